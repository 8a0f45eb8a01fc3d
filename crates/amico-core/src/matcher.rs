//! Cross-matching of two record collections.

use serde::Serialize;

use crate::error::MatchError;
use crate::record::Record;
use crate::similarity::{DEFAULT_DELIMITER, similarity};

/// Default percentage a pair must exceed to count as a match.
pub const DEFAULT_THRESHOLD: f64 = 40.0;

/// Threshold and tokenization settings for a matching pass.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOptions {
    threshold: f64,
    delimiter: String,
}

impl MatchOptions {
    /// Options with the given threshold and the default delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidThreshold`] for NaN or infinite values.
    pub fn new(threshold: f64) -> Result<Self, MatchError> {
        if !threshold.is_finite() {
            return Err(MatchError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            delimiter: DEFAULT_DELIMITER.to_string(),
        })
    }

    /// Replace the token delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyDelimiter`] for an empty delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Result<Self, MatchError> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(MatchError::EmptyDelimiter);
        }
        self.delimiter = delimiter;
        Ok(self)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

/// A pair of records whose labels scored above the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match<'a> {
    /// Record from the first collection.
    pub first: &'a Record,
    /// Record from the second collection.
    pub second: &'a Record,
    /// Similarity of the two `physics_short` labels.
    pub score: f64,
}

/// Reusable matcher bound to one set of options.
#[derive(Debug, Clone, Default)]
pub struct CrossMatcher {
    options: MatchOptions,
}

impl CrossMatcher {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Score every pair of the two collections.
    ///
    /// See [`cross_match`].
    pub fn cross_match<'a>(
        &self,
        first: &'a [Record],
        second: &'a [Record],
    ) -> Result<Vec<Match<'a>>, MatchError> {
        cross_match(first, second, &self.options)
    }
}

/// Collect every pair whose label similarity strictly exceeds the threshold.
///
/// Pairs come out in nested iteration order, `first` outer and `second`
/// inner. A record may take part in any number of matches. Nothing is
/// deduplicated or sorted.
///
/// # Errors
///
/// The first pair that cannot be scored aborts the pass with
/// [`MatchError::Pair`], naming both datasets.
pub fn cross_match<'a>(
    first: &'a [Record],
    second: &'a [Record],
    options: &MatchOptions,
) -> Result<Vec<Match<'a>>, MatchError> {
    let mut matches = Vec::new();
    for left in first {
        for right in second {
            let score = similarity(&left.physics_short, &right.physics_short, &options.delimiter)
                .map_err(|source| MatchError::pair(&left.ldn, &right.ldn, source))?;
            if score > options.threshold {
                matches.push(Match {
                    first: left,
                    second: right,
                    score,
                });
            }
        }
    }
    Ok(matches)
}
