//! Wall-clock helpers.

use chrono::{DateTime, FixedOffset, Utc};

const SHANGHAI_OFFSET_SECS: i32 = 8 * 3600;

/// Convert a UTC instant to China Standard Time (UTC+8, no DST).
pub fn to_shanghai(date: DateTime<Utc>) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(SHANGHAI_OFFSET_SECS)
        .map_or_else(|| date.fixed_offset(), |offset| date.with_timezone(&offset))
}

/// Current time in China Standard Time.
pub fn shanghai_now() -> DateTime<FixedOffset> {
    to_shanghai(Utc::now())
}
