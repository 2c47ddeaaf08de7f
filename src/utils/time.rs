use chrono::{DateTime, SecondsFormat, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch; negative for times before it.
///
/// Returns `None` when the value does not fit in an `i64`.
#[must_use]
pub fn epoch_millis(time: SystemTime) -> Option<i64> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_millis()).ok(),
        Err(before) => i64::try_from(before.duration().as_millis())
            .ok()
            .map(|millis| -millis),
    }
}

/// Current wall-clock time as ISO-8601 UTC, e.g. `2015-04-13T09:30:00.000Z`.
#[must_use]
pub fn now_iso8601() -> String {
    iso8601(Utc::now())
}

/// Formats a UTC timestamp with millisecond precision and a `Z` suffix.
#[must_use]
pub fn iso8601(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}
