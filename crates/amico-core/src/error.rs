//! Error types for scoring and matching.

use thiserror::Error;

/// Errors from similarity scoring and cross-matching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// The label chosen as normalizer has no tokens.
    #[error("invalid label {label:?}: no tokens to normalize against")]
    InvalidLabel { label: String },

    /// Splitting on an empty delimiter is undefined.
    #[error("token delimiter must not be empty")]
    EmptyDelimiter,

    /// Thresholds must be comparable numbers.
    #[error("invalid match threshold {0}: must be a finite number")]
    InvalidThreshold(f64),

    /// A candidate pair could not be scored.
    #[error("cannot score dataset {first} against {second}: {source}")]
    Pair {
        first: String,
        second: String,
        #[source]
        source: Box<MatchError>,
    },
}

impl MatchError {
    pub(crate) fn pair(first: &str, second: &str, source: MatchError) -> Self {
        Self::Pair {
            first: first.to_string(),
            second: second.to_string(),
            source: Box::new(source),
        }
    }
}
