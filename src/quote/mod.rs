pub mod pool;
pub mod quote;

pub use crate::types::identifiers::{PoolVersion, QuoteId};
pub use pool::{PoolError, QuotePool};
pub use quote::Quote;
