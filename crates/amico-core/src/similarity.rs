//! Token-overlap similarity between two delimited labels.
//!
//! The score is the share of the normalizer's tokens that also occur in the
//! other label, as a percentage. The normalizer is the operand with fewer
//! *characters* (the first one on a tie), while the denominator is its *token*
//! count. The two notions of "shorter" disagree for some labels, so the
//! denominator is not always the smaller token count, and for labels of equal
//! length `similarity(a, b)` can differ from `similarity(b, a)`.

use crate::error::MatchError;
use crate::tokens::{intersect, tokenize};

/// Delimiter used by catalog labels such as `mc14_13TeV_ttbar`.
pub const DEFAULT_DELIMITER: &str = "_";

/// Breakdown of a single similarity computation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityDetail<'a> {
    /// Percentage score.
    pub score: f64,
    /// Label used as normalizer.
    pub normalizer: &'a str,
    /// Token count of the normalizer.
    pub normalizer_tokens: usize,
    /// Tokens found in both labels, in intersection walk order.
    pub shared: Vec<&'a str>,
}

/// Score two labels by token overlap.
///
/// # Errors
///
/// Returns [`MatchError::EmptyDelimiter`] for an empty delimiter and
/// [`MatchError::InvalidLabel`] when the normalizer has no tokens.
pub fn similarity(first: &str, second: &str, delimiter: &str) -> Result<f64, MatchError> {
    similarity_detail(first, second, delimiter).map(|detail| detail.score)
}

/// Like [`similarity`], also returning the shared tokens.
///
/// # Errors
///
/// See [`similarity`].
pub fn similarity_detail<'a>(
    first: &'a str,
    second: &'a str,
    delimiter: &str,
) -> Result<SimilarityDetail<'a>, MatchError> {
    if delimiter.is_empty() {
        return Err(MatchError::EmptyDelimiter);
    }

    let (normalizer, other) = if second.chars().count() < first.chars().count() {
        (second, first)
    } else {
        (first, second)
    };

    let normalizer_tokens = tokenize(normalizer, delimiter);
    if normalizer_tokens.is_empty() {
        return Err(MatchError::InvalidLabel {
            label: normalizer.to_string(),
        });
    }
    let other_tokens = tokenize(other, delimiter);
    let shared = intersect(&normalizer_tokens, &other_tokens);

    Ok(SimilarityDetail {
        score: 100.0 * shared.len() as f64 / normalizer_tokens.len() as f64,
        normalizer,
        normalizer_tokens: normalizer_tokens.len(),
        shared,
    })
}
