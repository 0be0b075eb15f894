use clocktime_core::{HourMinuteSecond, Millis};
use clocktime_ports::{ClockTime, ClockTimeError, ClockTimeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::factory::Constructor;
use crate::{CachedClockTime, LazyClockTime};

/// Storage variant selectable at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockTimeKind {
    /// Recompute hour/minute/second on every read
    #[default]
    #[serde(alias = "default", alias = "slow")]
    Lazy,
    /// Cache hour/minute/second, recompute on mutation
    #[serde(alias = "eager", alias = "quick")]
    Cached,
}

impl ClockTimeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ClockTimeKind::Lazy => "lazy",
            ClockTimeKind::Cached => "cached",
        }
    }

    /// Constructor producing this variant wrapped in [`AnyClockTime`]
    pub fn constructor(self) -> Constructor<AnyClockTime> {
        match self {
            ClockTimeKind::Lazy => |ms| AnyClockTime::Lazy(LazyClockTime::new(ms)),
            ClockTimeKind::Cached => |ms| AnyClockTime::Cached(CachedClockTime::new(ms)),
        }
    }
}

impl FromStr for ClockTimeKind {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> ClockTimeResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "lazy" | "default" | "slow" => Ok(ClockTimeKind::Lazy),
            "cached" | "eager" | "quick" => Ok(ClockTimeKind::Cached),
            _ => Err(ClockTimeError::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for ClockTimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Clock time whose storage variant is chosen at runtime
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyClockTime {
    Lazy(LazyClockTime),
    Cached(CachedClockTime),
}

impl AnyClockTime {
    /// Create a value of the given variant
    pub fn with_kind(kind: ClockTimeKind, ms: Millis) -> Self {
        (kind.constructor())(ms)
    }

    pub fn kind(&self) -> ClockTimeKind {
        match self {
            AnyClockTime::Lazy(_) => ClockTimeKind::Lazy,
            AnyClockTime::Cached(_) => ClockTimeKind::Cached,
        }
    }
}

impl Default for AnyClockTime {
    fn default() -> Self {
        AnyClockTime::Lazy(LazyClockTime::default())
    }
}

impl ClockTime for AnyClockTime {
    /// Builds the default (lazy) variant
    fn from_millis(ms: Millis) -> Self {
        Self::with_kind(ClockTimeKind::default(), ms)
    }

    fn ms(&self) -> Millis {
        match self {
            AnyClockTime::Lazy(time) => time.ms(),
            AnyClockTime::Cached(time) => time.ms(),
        }
    }

    fn hour(&self) -> i64 {
        match self {
            AnyClockTime::Lazy(time) => time.hour(),
            AnyClockTime::Cached(time) => time.hour(),
        }
    }

    fn minute(&self) -> u32 {
        match self {
            AnyClockTime::Lazy(time) => time.minute(),
            AnyClockTime::Cached(time) => time.minute(),
        }
    }

    fn second(&self) -> u32 {
        match self {
            AnyClockTime::Lazy(time) => time.second(),
            AnyClockTime::Cached(time) => time.second(),
        }
    }

    fn parts(&self) -> HourMinuteSecond {
        match self {
            AnyClockTime::Lazy(time) => time.parts(),
            AnyClockTime::Cached(time) => time.parts(),
        }
    }

    fn consume(&mut self, ms: Millis) -> &mut Self {
        match self {
            AnyClockTime::Lazy(time) => {
                time.consume(ms);
            }
            AnyClockTime::Cached(time) => {
                time.consume(ms);
            }
        }
        self
    }

    fn extend(&mut self, ms: Millis) -> &mut Self {
        match self {
            AnyClockTime::Lazy(time) => {
                time.extend(ms);
            }
            AnyClockTime::Cached(time) => {
                time.extend(ms);
            }
        }
        self
    }
}

impl From<LazyClockTime> for AnyClockTime {
    fn from(time: LazyClockTime) -> Self {
        AnyClockTime::Lazy(time)
    }
}

impl From<CachedClockTime> for AnyClockTime {
    fn from(time: CachedClockTime) -> Self {
        AnyClockTime::Cached(time)
    }
}

impl fmt::Display for AnyClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("lazy".parse::<ClockTimeKind>(), Ok(ClockTimeKind::Lazy));
        assert_eq!("Quick".parse::<ClockTimeKind>(), Ok(ClockTimeKind::Cached));
        assert_eq!(" eager ".parse::<ClockTimeKind>(), Ok(ClockTimeKind::Cached));
        assert_eq!(
            "hourly".parse::<ClockTimeKind>(),
            Err(ClockTimeError::UnknownKind("hourly".to_string()))
        );
    }

    #[test]
    fn test_kind_serde_names() {
        assert_eq!(serde_json::to_string(&ClockTimeKind::Cached).unwrap(), "\"cached\"");
        let kind: ClockTimeKind = serde_json::from_str("\"slow\"").unwrap();
        assert_eq!(kind, ClockTimeKind::Lazy);
    }

    #[test]
    fn test_constructor_builds_requested_variant() {
        let lazy = AnyClockTime::with_kind(ClockTimeKind::Lazy, 1_000);
        let cached = AnyClockTime::with_kind(ClockTimeKind::Cached, 1_000);

        assert!(matches!(lazy, AnyClockTime::Lazy(_)));
        assert!(matches!(cached, AnyClockTime::Cached(_)));
        assert_eq!(cached.kind(), ClockTimeKind::Cached);
        assert_eq!(lazy.ms(), cached.ms());
    }

    #[test]
    fn test_from_millis_defaults_to_lazy() {
        assert_eq!(AnyClockTime::from_millis(5).kind(), ClockTimeKind::Lazy);
        assert_eq!(AnyClockTime::default().ms(), 0);
    }

    #[test]
    fn test_mutation_delegates() {
        let mut time = AnyClockTime::with_kind(ClockTimeKind::Cached, 4_532_000);
        time.extend(1_200).consume(329_000);
        assert_eq!(time.parts(), HourMinuteSecond { hour: 1, minute: 10, second: 4 });
        assert_eq!(time.kind(), ClockTimeKind::Cached);
    }

    #[test]
    fn test_variants_interoperate() {
        let mut lazy = AnyClockTime::from(LazyClockTime::of_minutes(10));
        let cached = CachedClockTime::of_minutes(4);

        lazy.consume_time(&cached);
        assert_eq!(lazy.to_minutes_int(), 6);

        lazy.extend_time(&cached).extend_time(&cached);
        assert_eq!(lazy.to_string(), "00:14:00");
    }
}
