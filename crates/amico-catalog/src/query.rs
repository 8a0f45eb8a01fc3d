//! Catalog queries and wildcard patterns.

use std::fmt;

use regex::Regex;

use amico_core::{LDN_FIELD, PHYSICS_SHORT_FIELD};

use crate::error::{CatalogError, Result};

/// Dataset type requested when none is given.
pub const DEFAULT_DATASET_TYPE: &str = "AOD";
/// Maximum number of records per query when none is given.
pub const DEFAULT_LIMIT: usize = 10;

/// A catalog search pattern in `LIKE` syntax.
///
/// `%` matches any run of characters (including none), `_` matches exactly
/// one character, everything else matches itself. Matching is case-sensitive
/// and anchored at both ends.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    /// `None` when the translated expression exceeds the regex size limits.
    regex: Option<Regex>,
}

impl Pattern {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let regex = Regex::new(&like_to_regex(&raw)).ok();
        Self { raw, regex }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether `text` is matched by this pattern.
    pub fn matches(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|regex| regex.is_match(text))
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Pattern {}

/// Translate a `LIKE` pattern into an anchored regular expression.
fn like_to_regex(pattern: &str) -> String {
    let mut source = String::from("(?s)^");
    let mut literal = String::new();
    for c in pattern.chars() {
        let wildcard = match c {
            '%' => ".*",
            '_' => ".",
            _ => {
                literal.push(c);
                continue;
            }
        };
        source.push_str(&regex::escape(&literal));
        literal.clear();
        source.push_str(wildcard);
    }
    source.push_str(&regex::escape(&literal));
    source.push('$');
    source
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Request for datasets from a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetQuery {
    patterns: Vec<Pattern>,
    fields: Vec<String>,
    limit: usize,
    dataset_type: Option<String>,
}

impl DatasetQuery {
    /// Query for one pattern, returning `ldn` and `physics_short`, at most
    /// [`DEFAULT_LIMIT`] records of type [`DEFAULT_DATASET_TYPE`].
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            patterns: vec![Pattern::new(pattern)],
            fields: vec![LDN_FIELD.to_string(), PHYSICS_SHORT_FIELD.to_string()],
            limit: DEFAULT_LIMIT,
            dataset_type: Some(DEFAULT_DATASET_TYPE.to_string()),
        }
    }

    /// Add another pattern; a record matching any pattern is returned.
    #[must_use]
    pub fn or_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(Pattern::new(pattern));
        self
    }

    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Restrict results to one dataset type; `None` disables the filter.
    #[must_use]
    pub fn with_dataset_type(mut self, dataset_type: Option<String>) -> Self {
        self.dataset_type = dataset_type;
        self
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn dataset_type(&self) -> Option<&str> {
        self.dataset_type.as_deref()
    }

    /// Whether any of the query patterns matches `ldn`.
    pub fn matches_ldn(&self, ldn: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(ldn))
    }

    /// Check the query before it is sent to a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidQuery`] when there is no pattern, a
    /// pattern cannot be compiled, the limit is zero, or `ldn`/`physics_short` are not requested.
    pub fn validate(&self) -> Result<()> {
        if self.patterns.is_empty() {
            return Err(CatalogError::invalid_query("no search pattern"));
        }
        if let Some(pattern) = self.patterns.iter().find(|pattern| pattern.regex.is_none()) {
            return Err(CatalogError::invalid_query(format!(
                "pattern {pattern} is too large to compile"
            )));
        }
        if self.limit == 0 {
            return Err(CatalogError::invalid_query("result limit must be at least 1"));
        }
        for required in [LDN_FIELD, PHYSICS_SHORT_FIELD] {
            if !self.fields.iter().any(|field| field == required) {
                return Err(CatalogError::invalid_query(format!(
                    "field {required} must be requested"
                )));
            }
        }
        Ok(())
    }
}
