//! Error types for the sample-data crate.
//!
//! Registry parsing and dataset generation fail in distinct ways, so each has
//! its own `thiserror` enum.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing or querying a seed registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// The registry contains no seed definitions.
    #[error("registry contains no seed definitions")]
    EmptySeeds,

    /// Two seed definitions share a name.
    #[error("seed '{name}' is defined more than once")]
    DuplicateSeed {
        /// The repeated seed name.
        name: String,
    },

    /// The requested seed name was not found in the registry.
    #[error("seed '{name}' not found in registry")]
    SeedNotFound {
        /// The seed name that was not found.
        name: String,
    },
}

/// Errors that can occur while generating a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Failed to produce a unique, valid username after repeated attempts.
    #[error("failed to generate a unique username after {max_attempts} attempts")]
    UsernameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}
