use chrono::{DateTime, Utc};

/// Current wall-clock time as integer nanoseconds since the Unix epoch.
pub fn now_nanos() -> i64 {
    to_epoch_nanos(Utc::now())
}

/// Saturates past year 2262 and clamps pre-epoch instants to zero.
fn to_epoch_nanos(instant: DateTime<Utc>) -> i64 {
    instant.timestamp_nanos_opt().unwrap_or(i64::MAX).max(0)
}
