//! Where a quote pool comes from, and when the bundled offline pool may
//! stand in for it.
//!
//! Falling back is a deliberate degraded mode: it happens only when the
//! primary source is missing or unreachable, and the caller can always tell
//! from [`PoolOrigin`] that it happened. A primary source that answers with
//! bad data is an error, not a reason to show yesterday's pool.

use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use crate::quote::{PoolError, QuotePool};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("Source not configured: {0}")]
    NotConfigured(String),
    #[error("Source unavailable: {0}")]
    Unavailable(String),
    #[error("Source returned malformed data: {0}")]
    Malformed(String),
}

impl SourceError {
    /// Whether the offline pool may be used instead.
    pub fn allows_fallback(&self) -> bool {
        matches!(self, SourceError::NotConfigured(_) | SourceError::Unavailable(_))
    }
}

pub trait QuoteSource {
    fn name(&self) -> &str;

    fn load(&self) -> Result<QuotePool, SourceError>;
}

/// A pool file on disk, in the `quotes.json` layout.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuoteSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn load(&self) -> Result<QuotePool, SourceError> {
        QuotePool::from_json_file(&self.path).map_err(|e| match e {
            PoolError::Io(io) if io.kind() == ErrorKind::NotFound => {
                SourceError::NotConfigured(format!("{} does not exist", self.path.display()))
            }
            PoolError::Io(io) => SourceError::Unavailable(format!("{}: {io}", self.path.display())),
            other => SourceError::Malformed(format!("{}: {other}", self.path.display())),
        })
    }
}

/// A pool already in memory, typically the bundled offline quotes.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    name: String,
    pool: QuotePool,
}

impl InMemorySource {
    pub fn new(name: impl Into<String>, pool: QuotePool) -> Self {
        Self {
            name: name.into(),
            pool,
        }
    }
}

impl QuoteSource for InMemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<QuotePool, SourceError> {
        Ok(self.pool.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolOrigin {
    Primary,
    Fallback { reason: SourceError },
}

#[derive(Debug, Clone)]
pub struct ResolvedPool {
    pub pool: QuotePool,
    pub origin: PoolOrigin,
}

impl ResolvedPool {
    pub fn is_degraded(&self) -> bool {
        matches!(self.origin, PoolOrigin::Fallback { .. })
    }
}

/// Load from `primary`, or from `fallback` when `primary` is not configured
/// or unavailable.
///
/// # Errors
/// Returns the primary's error when it is [`SourceError::Malformed`], and the
/// fallback's error when the fallback also fails.
pub fn load_with_fallback(
    primary: &dyn QuoteSource,
    fallback: &dyn QuoteSource,
) -> Result<ResolvedPool, SourceError> {
    match primary.load() {
        Ok(pool) => Ok(ResolvedPool {
            pool,
            origin: PoolOrigin::Primary,
        }),
        Err(reason) if reason.allows_fallback() => {
            tracing::warn!(
                primary = primary.name(),
                fallback = fallback.name(),
                %reason,
                "primary quote source failed, using offline pool"
            );
            let pool = fallback.load()?;
            Ok(ResolvedPool {
                pool,
                origin: PoolOrigin::Fallback { reason },
            })
        }
        Err(reason) => Err(reason),
    }
}
