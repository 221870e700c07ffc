//! Definition loading errors.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur when saving or loading automaton definitions
#[derive(Debug, Error)]
pub enum DefinitionLoadError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Definition version is not supported by this version
    #[error("Unsupported definition version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Definition decoded but does not describe a valid automaton
    #[error(transparent)]
    Invalid(#[from] BuildError),
}
