pub mod daily_board;
pub mod identifiers;

pub use daily_board::{BoardMetadata, DailyBoard, RankedQuote, SelectionError};
pub use identifiers::{DayKey, DayKeyError, PoolVersion, QuoteId, Seed};
