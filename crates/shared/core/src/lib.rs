//! Clocktime Core
//!
//! Pure value types for clock time durations.
//! This crate contains no I/O and no mutable state, and is 100% unit testable.

pub mod format;
pub mod values;

// Re-export commonly used types at crate root
pub use format::{DEFAULT_PATTERN, render};
pub use values::{
    HourMinuteSecond, MILLISECONDS_IN_HOUR, MILLISECONDS_IN_MINUTE, MILLISECONDS_IN_SECOND,
    MINUTE_IN_HOUR, Millis, SECOND_IN_MINUTE, millis_from_parts,
};
