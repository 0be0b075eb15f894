use serde::{Deserialize, Serialize};

use super::{
    MILLISECONDS_IN_HOUR, MILLISECONDS_IN_MINUTE, MILLISECONDS_IN_SECOND, MINUTE_IN_HOUR, Millis,
    SECOND_IN_MINUTE, millis_from_parts,
};
use crate::format;

/// Hour/minute/second decomposition of a millisecond count
///
/// - `hour` is unbounded (duration semantics, never wrapped at 24)
/// - `minute` and `second` are always in `0..60`
///
/// Division floors toward negative infinity, so a negative count still yields
/// in-range minutes and seconds with a negative hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HourMinuteSecond {
    pub hour: i64,
    pub minute: u32,
    pub second: u32,
}

impl HourMinuteSecond {
    /// Decompose a millisecond count
    pub fn from_millis(ms: Millis) -> Self {
        Self {
            hour: ms.div_euclid(MILLISECONDS_IN_HOUR),
            minute: ms.div_euclid(MILLISECONDS_IN_MINUTE).rem_euclid(MINUTE_IN_HOUR) as u32,
            second: ms.div_euclid(MILLISECONDS_IN_SECOND).rem_euclid(SECOND_IN_MINUTE) as u32,
        }
    }

    /// Milliseconds at the start of this second
    pub fn to_millis(&self) -> Millis {
        millis_from_parts(self.hour, i64::from(self.minute), i64::from(self.second))
    }

    /// Render with a pattern such as `"hh:mm:ss"` (see [`format::render`])
    pub fn format(&self, pattern: &str) -> String {
        format::render(self, pattern)
    }
}

impl From<Millis> for HourMinuteSecond {
    fn from(ms: Millis) -> Self {
        Self::from_millis(ms)
    }
}

impl std::fmt::Display for HourMinuteSecond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(format::DEFAULT_PATTERN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decompose() {
        let hms = HourMinuteSecond::from_millis(4_532_500);
        assert_eq!(hms.hour, 1);
        assert_eq!(hms.minute, 15);
        assert_eq!(hms.second, 32);
    }

    #[test]
    fn test_hour_is_not_wrapped() {
        let hms = HourMinuteSecond::from_millis(123 * MILLISECONDS_IN_HOUR + 59_999);
        assert_eq!(hms, HourMinuteSecond { hour: 123, minute: 0, second: 59 });
    }

    #[test]
    fn test_negative_floors() {
        // -1 ms is one millisecond before zero: hour -1, 59:59
        let hms = HourMinuteSecond::from_millis(-1);
        assert_eq!(hms, HourMinuteSecond { hour: -1, minute: 59, second: 59 });
    }

    #[test]
    fn test_display_uses_default_pattern() {
        let hms = HourMinuteSecond::from_millis(30_008_000);
        assert_eq!(hms.to_string(), "08:20:08");
    }

    proptest! {
        #[test]
        fn prop_decomposition_brackets_millis(ms in 0i64..=i64::MAX / 2) {
            let hms = HourMinuteSecond::from_millis(ms);
            let floor = hms.to_millis();
            prop_assert!(floor <= ms);
            prop_assert!(ms < floor + MILLISECONDS_IN_SECOND);
            prop_assert_eq!(hms.hour, ms / MILLISECONDS_IN_HOUR);
            prop_assert_eq!(i64::from(hms.minute), (ms / MILLISECONDS_IN_MINUTE) % 60);
            prop_assert_eq!(i64::from(hms.second), (ms / MILLISECONDS_IN_SECOND) % 60);
        }
    }
}
