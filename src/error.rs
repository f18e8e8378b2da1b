//! Error types shared by the search engine.

use thiserror::Error;

/// Errors reported by the search algorithms and their buffers.
///
/// Every failure is an explicit status from the operation that detected it;
/// nothing is retried internally. A NaN fitness is *not* represented here:
/// it is the evaluation sentinel for a zero-dimensional input, which the
/// runner entry points already reject as `InvalidArgument`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A non-positive count, an inverted bound pair, or a mis-sized buffer.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A transient buffer could not be acquired.
    #[error("allocation failure")]
    Allocation,

    /// An algorithm selector outside the known set.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// A specialized `Result` type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::InvalidArgument("dimension must be at least 1".into());
        assert_eq!(
            err.to_string(),
            "invalid argument: dimension must be at least 1"
        );
        assert_eq!(SearchError::Allocation.to_string(), "allocation failure");
    }

    #[test]
    fn test_unsupported_names_selector() {
        let err = SearchError::UnsupportedAlgorithm("local".into());
        assert_eq!(err.to_string(), "unsupported algorithm: local");
    }
}
