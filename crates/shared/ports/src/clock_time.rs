use std::fmt;

use chrono::Duration;
use clocktime_core::{
    DEFAULT_PATTERN, HourMinuteSecond, MILLISECONDS_IN_HOUR, MILLISECONDS_IN_MINUTE,
    MILLISECONDS_IN_SECOND, Millis, millis_from_parts,
};

/// Port for a duration value measured in milliseconds
///
/// Implementations decide how the value is stored:
/// - recomputing hour/minute/second on every read
/// - caching hour/minute/second and recomputing on every mutation
///
/// Both must satisfy the same contract:
/// - `hour() == floor(ms / 3_600_000)`, unbounded
/// - `minute() == floor(ms / 60_000) mod 60`
/// - `second() == floor(ms / 1_000) mod 60`
/// - `consume` never leaves the value below zero
/// - `extend` is exactly additive
pub trait ClockTime: Clone + fmt::Debug {
    /// Create a value holding `ms` milliseconds
    fn from_millis(ms: Millis) -> Self;

    /// Time in milliseconds
    fn ms(&self) -> Millis;

    /// Whole hours, not wrapped at 24
    fn hour(&self) -> i64;

    /// Minute component, from 0 to 59
    fn minute(&self) -> u32;

    /// Second component, from 0 to 59
    fn second(&self) -> u32;

    /// Subtract `ms` milliseconds, clamping the result at zero
    fn consume(&mut self, ms: Millis) -> &mut Self;

    /// Add `ms` milliseconds
    fn extend(&mut self, ms: Millis) -> &mut Self;

    fn of_seconds(seconds: i64) -> Self {
        Self::from_millis(seconds.saturating_mul(MILLISECONDS_IN_SECOND))
    }

    fn of_minutes(minutes: i64) -> Self {
        Self::from_millis(minutes.saturating_mul(MILLISECONDS_IN_MINUTE))
    }

    fn of_hours(hours: i64) -> Self {
        Self::from_millis(hours.saturating_mul(MILLISECONDS_IN_HOUR))
    }

    /// Create from an (hour, minute, second) triple
    ///
    /// The parts need not be normalized; `of_parts(0, 75, 0)` equals `of_minutes(75)`.
    fn of_parts(hour: i64, minute: i64, second: i64) -> Self {
        Self::from_millis(millis_from_parts(hour, minute, second))
    }

    /// Create from a `chrono::Duration`, truncated to whole milliseconds
    fn of_duration(duration: Duration) -> Self {
        Self::from_millis(duration.num_milliseconds())
    }

    /// Hour, minute and second as one value
    fn parts(&self) -> HourMinuteSecond {
        HourMinuteSecond {
            hour: self.hour(),
            minute: self.minute(),
            second: self.second(),
        }
    }

    /// Subtract the milliseconds held by another value
    fn consume_time<T: ClockTime>(&mut self, other: &T) -> &mut Self {
        self.consume(other.ms())
    }

    /// Add the milliseconds held by another value
    fn extend_time<T: ClockTime>(&mut self, other: &T) -> &mut Self {
        self.extend(other.ms())
    }

    fn consume_second(&mut self, seconds: i64) -> &mut Self {
        self.consume(seconds.saturating_mul(MILLISECONDS_IN_SECOND))
    }

    fn consume_minute(&mut self, minutes: i64) -> &mut Self {
        self.consume(minutes.saturating_mul(MILLISECONDS_IN_MINUTE))
    }

    fn consume_hour(&mut self, hours: i64) -> &mut Self {
        self.consume(hours.saturating_mul(MILLISECONDS_IN_HOUR))
    }

    fn extend_second(&mut self, seconds: i64) -> &mut Self {
        self.extend(seconds.saturating_mul(MILLISECONDS_IN_SECOND))
    }

    fn extend_minute(&mut self, minutes: i64) -> &mut Self {
        self.extend(minutes.saturating_mul(MILLISECONDS_IN_MINUTE))
    }

    fn extend_hour(&mut self, hours: i64) -> &mut Self {
        self.extend(hours.saturating_mul(MILLISECONDS_IN_HOUR))
    }

    /// Time in seconds, unrounded
    fn to_seconds(&self) -> f64 {
        self.ms() as f64 / MILLISECONDS_IN_SECOND as f64
    }

    /// Time in minutes, unrounded
    fn to_minutes(&self) -> f64 {
        self.ms() as f64 / MILLISECONDS_IN_MINUTE as f64
    }

    /// Time in hours, unrounded
    fn to_hours(&self) -> f64 {
        self.ms() as f64 / MILLISECONDS_IN_HOUR as f64
    }

    /// Time in whole seconds (floor)
    fn to_seconds_int(&self) -> i64 {
        self.ms().div_euclid(MILLISECONDS_IN_SECOND)
    }

    /// Time in whole minutes (floor)
    fn to_minutes_int(&self) -> i64 {
        self.ms().div_euclid(MILLISECONDS_IN_MINUTE)
    }

    /// Time in whole hours (floor)
    fn to_hours_int(&self) -> i64 {
        self.ms().div_euclid(MILLISECONDS_IN_HOUR)
    }

    /// Render with a pattern built from `hh`, `mm`, `ss`, `h`, `m`, `s`
    ///
    /// See [`clocktime_core::format`] for the substitution rules.
    fn format(&self, pattern: &str) -> String {
        self.parts().format(pattern)
    }

    /// Render as `hh:mm:ss`
    fn format_default(&self) -> String {
        self.format(DEFAULT_PATTERN)
    }

    /// Convert to a `chrono::Duration`
    fn to_duration(&self) -> Duration {
        // i64::MIN milliseconds is one past chrono's lower bound
        Duration::try_milliseconds(self.ms())
            .unwrap_or_else(|| Duration::milliseconds(self.ms().saturating_add(1)))
    }
}
