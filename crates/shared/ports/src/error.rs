use thiserror::Error;

/// Errors raised while building clock time values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockTimeError {
    #[error("no clock time constructor registered")]
    NoConstructorRegistered,

    #[error("unknown clock time kind: {0}")]
    UnknownKind(String),
}

pub type ClockTimeResult<T> = std::result::Result<T, ClockTimeError>;
