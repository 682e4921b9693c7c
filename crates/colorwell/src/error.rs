use thiserror::Error;

/// Errors reported by colorwell
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorwellError {
    /// A non-pointer event reached pointer handling. This means a listener is
    /// bound to the wrong event and is not recoverable at runtime.
    #[error("unexpected event: {0}")]
    UnexpectedEvent(String),

    #[error("invalid hex color `{0}`")]
    InvalidHex(String),

    #[error("invalid color field: {0}")]
    InvalidField(String),

    #[error("invalid picker configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = ColorwellError> = std::result::Result<T, E>;
