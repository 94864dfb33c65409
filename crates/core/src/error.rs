//! Error types for the mosaic core.

use thiserror::Error;

/// Errors produced by mosaic operations.
///
/// The grid itself is built from a generated domain, so these only surface at
/// the public edges: parsing user-supplied color keys and driving the
/// assigner by hand.
#[derive(Debug, Error)]
pub enum MosaicError {
    /// A color key was not three lowercase hex digits, or a channel exceeded 15.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    /// The one-shot assigner was handed the wrong number of candidates.
    #[error("expected {expected} placement candidates, got {got}")]
    CandidateCount { expected: usize, got: usize },

    /// An assigner was finished before every cell had been claimed.
    #[error("grid incomplete: {filled} of {expected} cells filled")]
    IncompleteGrid { filled: usize, expected: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_color_format_includes_input() {
        let err = MosaicError::InvalidColorFormat("'g00'".into());
        let msg = format!("{err}");
        assert!(msg.contains("g00"), "missing input in: {msg}");
        assert!(msg.contains("invalid color format"), "got: {msg}");
    }

    #[test]
    fn candidate_count_includes_both_counts() {
        let err = MosaicError::CandidateCount {
            expected: 4096,
            got: 12,
        };
        let msg = format!("{err}");
        assert!(msg.contains("4096"), "missing expected in: {msg}");
        assert!(msg.contains("12"), "missing got in: {msg}");
    }

    #[test]
    fn incomplete_grid_includes_fill_level() {
        let err = MosaicError::IncompleteGrid {
            filled: 3,
            expected: 4096,
        };
        let msg = format!("{err}");
        assert!(msg.contains("3 of 4096"), "got: {msg}");
    }

    #[test]
    fn mosaic_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MosaicError>();
    }

    #[test]
    fn mosaic_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<MosaicError>();
    }
}
