//! Error types for host-facing operations.
//!
//! Parameter access, control mapping and audio processing never fail: invalid
//! identifiers are silently ignored and getters return sentinel values. The
//! errors here only come from the host edge (registry and metadata export).

/// Errors that can occur while registering, creating or describing effects.
#[derive(Debug, Clone, PartialEq)]
pub enum StompboxError {
    /// An effect with this identifier is already registered.
    DuplicateEffect(&'static str),
    /// No effect with this identifier is registered.
    UnknownEffect(String),
    /// The sample rate is not a positive, finite number.
    InvalidSampleRate(f32),
    /// Metadata export failed.
    Serialization(String),
}

impl std::fmt::Display for StompboxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateEffect(id) => write!(f, "effect '{id}' is already registered"),
            Self::UnknownEffect(id) => write!(f, "no effect registered as '{id}'"),
            Self::InvalidSampleRate(rate) => write!(f, "invalid sample rate: {rate}"),
            Self::Serialization(msg) => write!(f, "failed to serialize description: {msg}"),
        }
    }
}

impl std::error::Error for StompboxError {}

impl From<serde_json::Error> for StompboxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type for host-facing operations.
pub type Result<T> = std::result::Result<T, StompboxError>;
