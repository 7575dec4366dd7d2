use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::quote::Quote;
use crate::types::identifiers::{DayKey, PoolVersion, Seed};

/// A quote placed on the board, with its 1-based rank.
/// Owns its content so the board can be serialized on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedQuote {
    pub rank: usize,
    pub id: String,
    pub text: String,
    pub attributed_to: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl RankedQuote {
    pub fn from_quote(rank: usize, quote: &Quote) -> Self {
        Self {
            rank,
            id: quote.id.as_str().to_string(),
            text: quote.text.clone(),
            attributed_to: quote.attributed_to.clone(),
            tags: quote.tags.clone(),
        }
    }
}

/// Metadata describing how the board was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMetadata {
    pub day_key: DayKey,
    pub time_zone: String,
    pub seed: Seed,
    pub pool_version: PoolVersion,

    pub quotes_considered: usize,
    pub quotes_selected: usize,
}

/// The board for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBoard {
    pub quotes: Vec<RankedQuote>,
    pub selection: BoardMetadata,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Unknown IANA time zone: {0}")]
    InvalidTimeZone(String),

    #[error("Invalid pick count: {0}")]
    InvalidPickCount(usize),
}
