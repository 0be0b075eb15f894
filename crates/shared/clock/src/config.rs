use clocktime_ports::ClockTimeResult;
use serde::{Deserialize, Serialize};

use crate::any::{AnyClockTime, ClockTimeKind};
use crate::factory::ClockTimeFactory;

/// Application-start configuration selecting the clock time variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Storage variant built by the factory
    pub kind: ClockTimeKind,
}

impl FactoryConfig {
    /// Create a config with the default (lazy) variant
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the variant
    pub fn with_kind(mut self, kind: ClockTimeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Create a config from a variant name such as `"lazy"` or `"cached"`
    pub fn from_kind_name(name: &str) -> ClockTimeResult<Self> {
        Ok(Self::new().with_kind(name.parse()?))
    }

    /// Build a factory producing the configured variant
    pub fn build_factory(&self) -> ClockTimeFactory<AnyClockTime> {
        ClockTimeFactory::with_constructor(self.kind.constructor())
    }
}
