//! Exit code definitions for the dk CLI
//!
//! These codes follow a consistent convention to allow scripts and
//! automation to handle different scenarios appropriately.

/// Exit codes for the dk CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Operation completed successfully
    Success = 0,

    /// General/unspecified error
    GeneralError = 1,

    /// User input error: invalid arguments, malformed path, etc.
    UsageError = 2,

    /// The checked name violates the server naming policy
    PolicyViolation = 3,

    /// Resource not found: profile or capabilities file does not exist
    NotFound = 5,

    /// Conflict: profile already exists
    Conflict = 6,

    /// Operation was interrupted (e.g., Ctrl+C)
    Interrupted = 130,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Create exit code from i32 value
    ///
    /// Returns None if the value doesn't correspond to a known exit code.
    pub const fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::GeneralError),
            2 => Some(Self::UsageError),
            3 => Some(Self::PolicyViolation),
            5 => Some(Self::NotFound),
            6 => Some(Self::Conflict),
            130 => Some(Self::Interrupted),
            _ => None,
        }
    }

    /// Map a dk-core error to its exit code
    pub const fn from_error(error: &dk_core::Error) -> Self {
        match Self::from_i32(error.exit_code()) {
            Some(code) => code,
            None => Self::GeneralError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::UsageError.as_i32(), 2);
        assert_eq!(ExitCode::PolicyViolation.as_i32(), 3);
        assert_eq!(ExitCode::NotFound.as_i32(), 5);
        assert_eq!(ExitCode::Conflict.as_i32(), 6);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_exit_code_roundtrip() {
        for code in [0, 1, 2, 3, 5, 6, 130] {
            assert_eq!(ExitCode::from_i32(code).unwrap().as_i32(), code);
        }
        assert!(ExitCode::from_i32(42).is_none());
    }

    #[test]
    fn test_from_error() {
        let err = dk_core::Error::ProfileNotFound("x".into());
        assert_eq!(ExitCode::from_error(&err), ExitCode::NotFound);

        let err = dk_core::Error::Config("x".into());
        assert_eq!(ExitCode::from_error(&err), ExitCode::UsageError);
    }
}
