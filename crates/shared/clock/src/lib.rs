//! Clocktime Clock Values
//!
//! Duration values measured in milliseconds, with hour/minute/second
//! decomposition, consume/extend arithmetic and pattern formatting.
//!
//! ## Variants
//!
//! ```text
//! ClockTime (port, clocktime-ports)
//!     │
//!     ├── LazyClockTime    (stores ms, recomputes h/m/s on read)  [default]
//!     ├── CachedClockTime  (stores ms + h/m/s, recomputes on mutation)
//!     └── AnyClockTime     (either of the above, chosen at runtime)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use clocktime_clock::{ClockTime, ClockTimeKind, FactoryConfig, LazyClockTime};
//!
//! // Direct construction
//! let mut countdown = LazyClockTime::of_minutes(90);
//! countdown.consume_second(30).consume_minute(5);
//! assert_eq!(countdown.format("h:mm:ss"), "1:24:30");
//!
//! // Variant chosen by configuration, injected where values are built
//! let factory = FactoryConfig::new().with_kind(ClockTimeKind::Cached).build_factory();
//! let lap = factory.of_seconds(100)?;
//! assert_eq!(lap.to_string(), "00:01:40");
//! ```

mod any;
mod arithmetic;
mod cached;
mod config;
mod factory;
mod lazy;

pub use any::{AnyClockTime, ClockTimeKind};
pub use cached::CachedClockTime;
pub use config::FactoryConfig;
pub use factory::{ClockTimeFactory, Constructor};
pub use lazy::LazyClockTime;

// Re-export the port and core values for convenience
pub use clocktime_core::{DEFAULT_PATTERN, HourMinuteSecond, Millis};
pub use clocktime_ports::{ClockTime, ClockTimeError, ClockTimeResult};
