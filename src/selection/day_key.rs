use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::types::daily_board::SelectionError;
use crate::types::identifiers::DayKey;

/// Zone the board has always been keyed in.
pub const DEFAULT_TIME_ZONE: &str = "America/Los_Angeles";

pub fn parse_time_zone(name: &str) -> Result<Tz, SelectionError> {
    name.parse::<Tz>()
        .map_err(|_| SelectionError::InvalidTimeZone(name.to_string()))
}

/// Calendar date of `reference` as observed in the IANA zone `time_zone`.
///
/// Conversion goes through the tz database, so the day boundary moves with
/// DST instead of sitting at a fixed UTC offset.
pub fn compute_day_key(
    reference: DateTime<Utc>,
    time_zone: &str,
) -> Result<DayKey, SelectionError> {
    let tz = parse_time_zone(time_zone)?;
    Ok(day_key_in(reference, tz))
}

pub fn day_key_in(reference: DateTime<Utc>, tz: Tz) -> DayKey {
    DayKey::from_date(reference.with_timezone(&tz).date_naive())
}
