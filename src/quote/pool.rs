use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::quote::Quote;
use crate::types::identifiers::PoolVersion;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Quote at position {0} has an empty id")]
    EmptyId(usize),
    #[error("Duplicate quote id: {0}")]
    DuplicateId(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// An ordered, validated set of quotes.
///
/// Order is part of the pool's identity: the daily shuffle permutes
/// positions, so the same quotes in a different order give a different board
/// and a different [`PoolVersion`].
#[derive(Debug, Clone, PartialEq)]
pub struct QuotePool {
    quotes: Vec<Quote>,
    version: PoolVersion,
}

impl QuotePool {
    pub fn new(quotes: Vec<Quote>) -> Result<Self, PoolError> {
        let mut seen = BTreeSet::new();
        for (position, quote) in quotes.iter().enumerate() {
            if quote.id.as_str().is_empty() {
                return Err(PoolError::EmptyId(position));
            }
            if !seen.insert(quote.id.as_str()) {
                return Err(PoolError::DuplicateId(quote.id.as_str().to_string()));
            }
        }

        let canonical = serde_json::to_vec(&quotes)?;
        let version = PoolVersion::from_content(&canonical);

        tracing::debug!(quotes = quotes.len(), version = version.as_str(), "quote pool loaded");

        Ok(QuotePool { quotes, version })
    }

    pub fn empty() -> Self {
        QuotePool {
            version: PoolVersion::from_content(b"[]"),
            quotes: Vec::new(),
        }
    }

    /// Parse a JSON array of quotes.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PoolError> {
        let quotes: Vec<Quote> = serde_json::from_reader(reader)?;
        Self::new(quotes)
    }

    pub fn from_json_str(json: &str) -> Result<Self, PoolError> {
        let quotes: Vec<Quote> = serde_json::from_str(json)?;
        Self::new(quotes)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, PoolError> {
        let f = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn version(&self) -> &PoolVersion {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
