pub mod day_key;
pub mod rng;
pub mod seed;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::config::BoardConfig;
use crate::quote::{Quote, QuotePool};
use crate::types::daily_board::{
	BoardMetadata, DailyBoard, RankedQuote, SelectionError,
};
use crate::types::identifiers::{DayKey, Seed};
pub use day_key::{compute_day_key, day_key_in, parse_time_zone, DEFAULT_TIME_ZONE};
pub use rng::Mulberry32;
pub use seed::{fnv1a_32, seed_from_key, seed_from_namespaced, DEFAULT_SEED_NAMESPACE};

/// Size of the daily board.
pub const DEFAULT_PICK_COUNT: usize = 3;

/// Deterministic Fisher-Yates permutation of `0..len` driven by `seed`.
///
/// Walks from the last position down to 1, swapping each slot with
/// `floor(r * (i + 1))`.
pub fn shuffled_indices(len: usize, seed: Seed) -> Vec<usize> {
	let mut rng = Mulberry32::new(seed.value());
	let mut idx: Vec<usize> = (0..len).collect();

	for i in (1..len).rev() {
		let j = rng.next_index(i + 1);
		idx.swap(i, j);
	}

	idx
}

/// Pick up to `count` items in seeded order.
pub fn pick_seeded<T>(items: &[T], seed: Seed, count: usize) -> Vec<&T> {
	if items.is_empty() {
		return Vec::new();
	}

	shuffled_indices(items.len(), seed)
		.into_iter()
		.take(count.min(items.len()))
		.filter_map(|i| items.get(i))
		.collect()
}

/// The day's ranked selection: at most three items, no repeats, identical
/// for every caller holding the same pool and key.
pub fn select_daily<'a, T>(items: &'a [T], day_key: &DayKey) -> Vec<&'a T> {
	pick_seeded(items, seed_from_key(day_key), DEFAULT_PICK_COUNT)
}

/// A validated [`BoardConfig`] ready to build boards.
#[derive(Debug, Clone)]
pub struct DailySelector {
	time_zone: Tz,
	seed_namespace: String,
	pick_count: usize,
}

impl Default for DailySelector {
	fn default() -> Self {
		Self {
			time_zone: Tz::America__Los_Angeles,
			seed_namespace: DEFAULT_SEED_NAMESPACE.to_string(),
			pick_count: DEFAULT_PICK_COUNT,
		}
	}
}

impl DailySelector {
	pub fn new(config: &BoardConfig) -> Result<Self, SelectionError> {
		if config.pick_count == 0 {
			return Err(SelectionError::InvalidPickCount(config.pick_count));
		}

		Ok(Self {
			time_zone: parse_time_zone(&config.time_zone)?,
			seed_namespace: config.seed_namespace.clone(),
			pick_count: config.pick_count,
		})
	}

	pub fn time_zone(&self) -> Tz {
		self.time_zone
	}

	pub fn day_key(&self, now: DateTime<Utc>) -> DayKey {
		day_key_in(now, self.time_zone)
	}

	pub fn seed(&self, day_key: &DayKey) -> Seed {
		seed_from_namespaced(&self.seed_namespace, day_key)
	}

	pub fn select<'a>(&self, pool: &'a QuotePool, day_key: &DayKey) -> Vec<&'a Quote> {
		pick_seeded(pool.quotes(), self.seed(day_key), self.pick_count)
	}

	pub fn board(&self, pool: &QuotePool, now: DateTime<Utc>) -> DailyBoard {
		self.board_for_day(pool, &self.day_key(now))
	}

	pub fn board_for_day(&self, pool: &QuotePool, day_key: &DayKey) -> DailyBoard {
		let seed = self.seed(day_key);
		let picked = self.select(pool, day_key);

		debug_assert!(picked.len() == self.pick_count.min(pool.len()));

		tracing::debug!(
			day_key = day_key.as_str(),
			seed = seed.value(),
			pool_size = pool.len(),
			selected = picked.len(),
			"daily board selected"
		);

		let quotes: Vec<RankedQuote> = picked
			.iter()
			.enumerate()
			.map(|(i, quote)| RankedQuote::from_quote(i + 1, quote))
			.collect();

		let metadata = BoardMetadata {
			day_key: day_key.clone(),
			time_zone: self.time_zone.name().to_string(),
			seed,
			pool_version: pool.version().clone(),
			quotes_considered: pool.len(),
			quotes_selected: quotes.len(),
		};

		DailyBoard {
			quotes,
			selection: metadata,
		}
	}
}
