//! Matching engine for dataset metadata.
//!
//! Scores pairs of dataset labels by the overlap of their delimiter-separated
//! tokens and collects the cross-collection pairs whose score clears a
//! threshold. Everything here is a pure function of its inputs: no I/O, no
//! logging, no shared state.

#![deny(unsafe_code)]

pub mod error;
pub mod matcher;
pub mod record;
pub mod similarity;
pub mod tokens;

pub use error::MatchError;
pub use matcher::{CrossMatcher, DEFAULT_THRESHOLD, Match, MatchOptions, cross_match};
pub use record::{LDN_FIELD, PHYSICS_SHORT_FIELD, Record};
pub use similarity::{DEFAULT_DELIMITER, SimilarityDetail, similarity, similarity_detail};
pub use tokens::{intersect, tokenize};

pub type Result<T> = std::result::Result<T, MatchError>;
