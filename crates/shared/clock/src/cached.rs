use clocktime_core::{HourMinuteSecond, Millis};
use clocktime_ports::ClockTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::arithmetic::{consumed, extended};

/// Clock time that caches its hour, minute and second
///
/// The cache is refreshed on construction and after every consume/extend,
/// so reads are plain field loads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Millis", into = "Millis")]
pub struct CachedClockTime {
    ms: Millis,
    parts: HourMinuteSecond,
}

impl CachedClockTime {
    pub fn new(ms: Millis) -> Self {
        Self {
            ms,
            parts: HourMinuteSecond::from_millis(ms),
        }
    }

    /// Recompute the cached hour, minute and second
    fn compute(&mut self) {
        self.parts = HourMinuteSecond::from_millis(self.ms);
    }
}

impl ClockTime for CachedClockTime {
    fn from_millis(ms: Millis) -> Self {
        Self::new(ms)
    }

    fn ms(&self) -> Millis {
        self.ms
    }

    fn hour(&self) -> i64 {
        self.parts.hour
    }

    fn minute(&self) -> u32 {
        self.parts.minute
    }

    fn second(&self) -> u32 {
        self.parts.second
    }

    fn parts(&self) -> HourMinuteSecond {
        self.parts
    }

    fn consume(&mut self, ms: Millis) -> &mut Self {
        self.ms = consumed(self.ms, ms);
        self.compute();
        self
    }

    fn extend(&mut self, ms: Millis) -> &mut Self {
        self.ms = extended(self.ms, ms);
        self.compute();
        self
    }
}

impl From<Millis> for CachedClockTime {
    fn from(ms: Millis) -> Self {
        Self::new(ms)
    }
}

impl From<CachedClockTime> for Millis {
    fn from(time: CachedClockTime) -> Self {
        time.ms
    }
}

impl fmt::Display for CachedClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_default())
    }
}
