//! Deterministic daily quote selection for a static quote board.
//!
//! `quote-board-core` picks a small ranked set of quotes for each calendar
//! day. The pick is derived from the day alone (FNV-1a seed, Mulberry32
//! generator, Fisher-Yates shuffle), so every device renders the same board
//! for the same day without asking a server.
//!
//! ```
//! use quote_board::quote::{Quote, QuotePool};
//! use quote_board::selection::select_daily;
//! use quote_board::types::DayKey;
//!
//! let pool = QuotePool::new(vec![
//!     Quote::new("a", "first", "Sam"),
//!     Quote::new("b", "second", "Alex"),
//! ])
//! .unwrap();
//! let key: DayKey = "2099-01-01".parse().unwrap();
//!
//! let picked = select_daily(pool.quotes(), &key);
//! assert_eq!(picked.len(), 2);
//! ```

pub mod config;
pub mod quote;
pub mod selection;
pub mod source;
pub mod types;
