use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(String);

impl QuoteId {
    pub fn new(id: impl Into<String>) -> Self {
        QuoteId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DayKeyError {
    #[error("Day key must be a calendar date formatted YYYY-MM-DD, got {0:?}")]
    Invalid(String),
}

/// Calendar date key, always zero-padded `YYYY-MM-DD`.
///
/// Built either from a date (see [`DayKey::from_date`]) or parsed from text.
/// Parsing accepts only the canonical form, so `"2024-1-1"` and
/// `"2024-02-30"` are rejected rather than silently normalized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey(String);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DayKey(date.format(DAY_KEY_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DayKey {
    type Err = DayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = NaiveDate::parse_from_str(s, DAY_KEY_FORMAT)
            .map_err(|_| DayKeyError::Invalid(s.to_string()))?;

        // chrono accepts unpadded fields; round-trip to enforce the canonical form
        let key = DayKey::from_date(date);
        if key.0 != s {
            return Err(DayKeyError::Invalid(s.to_string()));
        }
        Ok(key)
    }
}

impl TryFrom<String> for DayKey {
    type Error = DayKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 32-bit generator seed derived from a day key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u32);

impl Seed {
    pub const fn new(value: u32) -> Self {
        Seed(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Content hash of a quote pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolVersion(String);

impl PoolVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        PoolVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
