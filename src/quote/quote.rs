use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::QuoteId;

/// A single quote on the board.
///
/// Quotes are immutable once loaded. Selection only reorders references to
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub text: String,
    /// Who said it. Hand-edited pool files use `saidBy`.
    #[serde(alias = "saidBy")]
    pub attributed_to: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl Quote {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        attributed_to: impl Into<String>,
    ) -> Self {
        Quote {
            id: QuoteId::new(id),
            text: text.into(),
            attributed_to: attributed_to.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }
}
