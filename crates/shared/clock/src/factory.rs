use clocktime_core::{
    MILLISECONDS_IN_HOUR, MILLISECONDS_IN_MINUTE, MILLISECONDS_IN_SECOND, Millis,
    millis_from_parts,
};
use clocktime_ports::{ClockTime, ClockTimeError, ClockTimeResult};
use log::debug;
use std::any::type_name;

/// Function that builds a clock time from milliseconds
pub type Constructor<T> = fn(Millis) -> T;

/// Builds clock time values through an injected constructor
///
/// The factory is an ordinary value handed to whoever needs to create clock
/// times, so callers choose the concrete variant without changing call sites.
/// Registering a new constructor replaces the previous one.
#[derive(Debug, Clone)]
pub struct ClockTimeFactory<T> {
    constructor: Option<Constructor<T>>,
}

impl<T: ClockTime> ClockTimeFactory<T> {
    /// Create a factory with no constructor registered
    pub fn new() -> Self {
        Self { constructor: None }
    }

    /// Create a factory using `constructor`
    pub fn with_constructor(constructor: Constructor<T>) -> Self {
        Self {
            constructor: Some(constructor),
        }
    }

    /// Create a factory using `T::from_millis`
    pub fn native() -> Self {
        Self::with_constructor(T::from_millis)
    }

    /// Register `constructor`, replacing any previous one
    pub fn set_constructor(&mut self, constructor: Constructor<T>) {
        if self.constructor.is_some() {
            debug!("Replacing clock time constructor for {}", type_name::<T>());
        } else {
            debug!("Registered clock time constructor for {}", type_name::<T>());
        }
        self.constructor = Some(constructor);
    }

    pub fn clear_constructor(&mut self) {
        debug!("Cleared clock time constructor for {}", type_name::<T>());
        self.constructor = None;
    }

    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Create a clock time holding `ms` milliseconds
    pub fn create(&self, ms: Millis) -> ClockTimeResult<T> {
        let constructor = self
            .constructor
            .ok_or(ClockTimeError::NoConstructorRegistered)?;
        Ok(constructor(ms))
    }

    /// Create a zero clock time
    pub fn create_default(&self) -> ClockTimeResult<T> {
        self.create(0)
    }

    pub fn of_seconds(&self, seconds: i64) -> ClockTimeResult<T> {
        self.create(seconds.saturating_mul(MILLISECONDS_IN_SECOND))
    }

    pub fn of_minutes(&self, minutes: i64) -> ClockTimeResult<T> {
        self.create(minutes.saturating_mul(MILLISECONDS_IN_MINUTE))
    }

    pub fn of_hours(&self, hours: i64) -> ClockTimeResult<T> {
        self.create(hours.saturating_mul(MILLISECONDS_IN_HOUR))
    }

    pub fn of_parts(&self, hour: i64, minute: i64, second: i64) -> ClockTimeResult<T> {
        self.create(millis_from_parts(hour, minute, second))
    }
}

impl<T: ClockTime> Default for ClockTimeFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}
