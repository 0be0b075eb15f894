mod hms;

pub use hms::HourMinuteSecond;

/// Elapsed time in milliseconds
/// Non-negative by convention; signed so that deltas can be expressed directly
pub type Millis = i64;

// Commonly used constants
pub const SECOND_IN_MINUTE: i64 = 60;
pub const MINUTE_IN_HOUR: i64 = 60;
pub const MILLISECONDS_IN_SECOND: Millis = 1_000;
pub const MILLISECONDS_IN_MINUTE: Millis = 60_000;
pub const MILLISECONDS_IN_HOUR: Millis = 3_600_000;

/// Milliseconds represented by an (hour, minute, second) triple
///
/// The parts are not required to be normalized: `(0, 75, 0)` is 75 minutes.
/// Saturates at the `Millis` bounds instead of overflowing.
pub fn millis_from_parts(hour: i64, minute: i64, second: i64) -> Millis {
    hour.saturating_mul(MILLISECONDS_IN_HOUR)
        .saturating_add(minute.saturating_mul(MILLISECONDS_IN_MINUTE))
        .saturating_add(second.saturating_mul(MILLISECONDS_IN_SECOND))
}
