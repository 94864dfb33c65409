//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: mosaic error (grid construction)
//! - 12: input error (bad color key, row out of range)
//! - 13: serialization error
//! - 14: a `check` found a broken invariant

use mosaic_core::MosaicError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A mosaic-level error other than bad user input.
    Mosaic(MosaicError),
    /// A user input error (malformed hex3 key, row out of range).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
    /// A consistency check failed.
    Check(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Mosaic(_) => 10,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::Check(_) => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Mosaic(e) => write!(f, "{e}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
            CliError::Check(msg) => write!(f, "check failed: {msg}"),
        }
    }
}

impl From<MosaicError> for CliError {
    fn from(e: MosaicError) -> Self {
        match e {
            MosaicError::InvalidColorFormat(msg) => CliError::Input(msg),
            other => CliError::Mosaic(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mosaic_error_exit_code_is_10() {
        let err = CliError::Mosaic(MosaicError::IncompleteGrid {
            filled: 1,
            expected: 4096,
        });
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        assert_eq!(CliError::Input("bad key".into()).exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        assert_eq!(CliError::Serialization("json fail".into()).exit_code(), 13);
    }

    #[test]
    fn check_error_exit_code_is_14() {
        let err = CliError::Check("duplicate cell".into());
        assert_eq!(err.exit_code(), 14);
        assert!(err.to_string().contains("duplicate cell"));
    }

    #[test]
    fn invalid_color_format_routes_to_input() {
        let cli_err = CliError::from(MosaicError::InvalidColorFormat("'zz'".into()));
        assert_eq!(cli_err.exit_code(), 12);
        assert!(cli_err.to_string().contains("zz"));
    }

    #[test]
    fn other_mosaic_errors_route_to_mosaic() {
        let cli_err = CliError::from(MosaicError::CandidateCount {
            expected: 4096,
            got: 7,
        });
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains('7'));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
