use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selection::{DEFAULT_PICK_COUNT, DEFAULT_SEED_NAMESPACE, DEFAULT_TIME_ZONE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

// Every field has a default so a config file only needs the overrides.
// Values are validated when the config becomes a `DailySelector`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// IANA zone the calendar day is observed in.
    pub time_zone: String,
    /// Prefix hashed together with the day key.
    pub seed_namespace: String,
    pub pick_count: usize,
}

impl BoardConfig {
    pub fn v0() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE.into(),
            seed_namespace: DEFAULT_SEED_NAMESPACE.into(),
            pick_count: DEFAULT_PICK_COUNT,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let f = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(std::io::BufReader::new(f))?)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::v0()
    }
}
