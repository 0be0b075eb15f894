use clocktime_core::{
    HourMinuteSecond, MILLISECONDS_IN_HOUR, MILLISECONDS_IN_MINUTE, MILLISECONDS_IN_SECOND,
    MINUTE_IN_HOUR, Millis, SECOND_IN_MINUTE,
};
use clocktime_ports::ClockTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::arithmetic::{consumed, extended};

/// Clock time that stores only milliseconds
///
/// Hour, minute and second are recomputed on every read.
/// This is the default variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LazyClockTime {
    ms: Millis,
}

impl LazyClockTime {
    pub fn new(ms: Millis) -> Self {
        Self { ms }
    }
}

impl ClockTime for LazyClockTime {
    fn from_millis(ms: Millis) -> Self {
        Self::new(ms)
    }

    fn ms(&self) -> Millis {
        self.ms
    }

    fn hour(&self) -> i64 {
        self.ms.div_euclid(MILLISECONDS_IN_HOUR)
    }

    fn minute(&self) -> u32 {
        self.ms
            .div_euclid(MILLISECONDS_IN_MINUTE)
            .rem_euclid(MINUTE_IN_HOUR) as u32
    }

    fn second(&self) -> u32 {
        self.ms
            .div_euclid(MILLISECONDS_IN_SECOND)
            .rem_euclid(SECOND_IN_MINUTE) as u32
    }

    fn parts(&self) -> HourMinuteSecond {
        HourMinuteSecond::from_millis(self.ms)
    }

    fn consume(&mut self, ms: Millis) -> &mut Self {
        self.ms = consumed(self.ms, ms);
        self
    }

    fn extend(&mut self, ms: Millis) -> &mut Self {
        self.ms = extended(self.ms, ms);
        self
    }
}

impl From<Millis> for LazyClockTime {
    fn from(ms: Millis) -> Self {
        Self::new(ms)
    }
}

impl fmt::Display for LazyClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let time = LazyClockTime::default();
        assert_eq!(time.ms(), 0);
        assert_eq!(time.to_string(), "00:00:00");
    }

    #[test]
    fn test_decomposition() {
        let time = LazyClockTime::from_millis(4_532_500);
        assert_eq!(time.hour(), 1);
        assert_eq!(time.minute(), 15);
        assert_eq!(time.second(), 32);
    }

    #[test]
    fn test_extend_then_consume() {
        let mut time = LazyClockTime::from_millis(4_532_000);

        time.extend(1_200);
        assert_eq!((time.hour(), time.minute(), time.second()), (1, 15, 33));

        time.consume(329_000);
        assert_eq!((time.hour(), time.minute(), time.second()), (1, 10, 4));
    }

    #[test]
    fn test_consume_clamps_at_zero() {
        assert_eq!(LazyClockTime::from_millis(100).consume(5_000).ms(), 0);
        assert_eq!(
            LazyClockTime::from_millis(4_532_000)
                .consume(9_999_999_999)
                .ms(),
            0
        );
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = LazyClockTime::from_millis(30_030_000);
        let mut cloned = original.clone();

        original.consume(117_000);
        assert_eq!((cloned.hour(), cloned.minute(), cloned.second()), (8, 20, 30));

        cloned.extend_hour(1);
        assert_eq!(original.ms(), 29_913_000);
    }

    #[test]
    fn test_serializes_as_millis() {
        let time = LazyClockTime::from_millis(1_500);
        assert_eq!(serde_json::to_string(&time).unwrap(), "1500");

        let parsed: LazyClockTime = serde_json::from_str("387000").unwrap();
        assert_eq!(parsed.format("mm:ss"), "06:27");
    }
}
