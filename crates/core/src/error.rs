//! Error types for dk-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.
//! Note that the naming-compliance engine itself (classification, validation,
//! renaming, bidi sanitizing) is total and never returns `Error`; this type
//! covers configuration, profile and path handling.

use thiserror::Error;

/// Result type alias for dk-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for dk-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid path format
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Profile not found
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// Profile already exists
    #[error("Profile already exists: {0}")]
    ProfileExists(String),

    /// Malformed capabilities document
    #[error("Capability document error: {0}")]
    Capability(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidPath(_) => 2,      // UsageError
            Error::Config(_) => 2,           // UsageError
            Error::Capability(_) => 2,       // UsageError
            Error::ProfileNotFound(_) => 5,  // NotFound
            Error::ProfileExists(_) => 6,    // Conflict
            _ => 1,                          // GeneralError
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::InvalidPath("test".into()).exit_code(), 2);
        assert_eq!(Error::Config("test".into()).exit_code(), 2);
        assert_eq!(Error::Capability("test".into()).exit_code(), 2);
        assert_eq!(Error::ProfileNotFound("test".into()).exit_code(), 5);
        assert_eq!(Error::ProfileExists("test".into()).exit_code(), 6);
        assert_eq!(Error::General("test".into()).exit_code(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = Error::ProfileNotFound("cloud".into());
        assert_eq!(err.to_string(), "Profile not found: cloud");

        let err = Error::InvalidPath("/bad/path".into());
        assert_eq!(err.to_string(), "Invalid path: /bad/path");
    }
}
