//! Clocktime Ports
//!
//! Port definitions (traits) for clock time durations.
//! These define the capability every storage variant provides; conversions,
//! unit helpers and formatting are written once here on top of it.

mod clock_time;
mod error;

pub use clock_time::ClockTime;
pub use error::{ClockTimeError, ClockTimeResult};
