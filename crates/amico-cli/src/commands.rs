use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span};

use amico_catalog::{
    Catalog, CatalogEnvironment, DEFAULT_DATASET_TYPE, DEFAULT_LIMIT, DatasetQuery, Record,
};
use amico_core::{
    DEFAULT_DELIMITER, DEFAULT_THRESHOLD, Match, MatchOptions, cross_match, similarity_detail,
};

use crate::clock::RunClock;

pub const DEFAULT_FIRST_PATTERN: &str = "%mc14_13TeV%";
pub const DEFAULT_SECOND_PATTERN: &str = "%8TeV%";

/// Everything a comparison run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareConfig {
    pub first_pattern: String,
    pub second_pattern: String,
    pub threshold: f64,
    pub max_results: usize,
    pub dataset_type: Option<String>,
    pub delimiter: String,
    pub catalog: Option<PathBuf>,
    pub username: Option<String>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            first_pattern: DEFAULT_FIRST_PATTERN.to_string(),
            second_pattern: DEFAULT_SECOND_PATTERN.to_string(),
            threshold: DEFAULT_THRESHOLD,
            max_results: DEFAULT_LIMIT,
            dataset_type: Some(DEFAULT_DATASET_TYPE.to_string()),
            delimiter: DEFAULT_DELIMITER.to_string(),
            catalog: None,
            username: None,
        }
    }
}

impl CompareConfig {
    fn query(&self, pattern: &str) -> DatasetQuery {
        DatasetQuery::new(pattern)
            .with_limit(self.max_results)
            .with_dataset_type(self.dataset_type.clone())
    }

    fn match_options(&self) -> Result<MatchOptions> {
        let options = MatchOptions::new(self.threshold)?.with_delimiter(self.delimiter.clone())?;
        Ok(options)
    }
}

/// A matched pair, owning copies of both records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedPair {
    pub first: Record,
    pub second: Record,
    pub score: f64,
}

impl From<Match<'_>> for MatchedPair {
    fn from(found: Match<'_>) -> Self {
        Self {
            first: found.first.clone(),
            second: found.second.clone(),
            score: found.score,
        }
    }
}

/// Result of querying both patterns and cross-matching them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub first_pattern: String,
    pub second_pattern: String,
    pub threshold: f64,
    pub first: Vec<Record>,
    pub second: Vec<Record>,
    pub matches: Vec<MatchedPair>,
}

/// Audit the catalog environment, open the catalog and compare.
pub fn run_compare(config: &CompareConfig, clock: &mut RunClock) -> Result<Comparison> {
    let environment = clock
        .time("audit", || {
            CatalogEnvironment::resolve(config.catalog.as_deref())
        })
        .context("audit catalog environment")?;
    let catalog = clock
        .time("load", || environment.open())
        .with_context(|| format!("open catalog {}", environment.path().display()))?;
    info!(
        catalog = %environment.path().display(),
        entries = catalog.len(),
        "catalog ready"
    );
    compare(&catalog, config, clock)
}

/// Query both patterns from `catalog` and cross-match the results.
pub fn compare<C>(catalog: &C, config: &CompareConfig, clock: &mut RunClock) -> Result<Comparison>
where
    C: Catalog + ?Sized,
{
    let options = config.match_options().context("invalid match settings")?;
    let span = info_span!(
        "compare",
        pattern1 = %config.first_pattern,
        pattern2 = %config.second_pattern
    );
    let _guard = span.enter();

    info!(
        pattern1 = %config.first_pattern,
        pattern2 = %config.second_pattern,
        "query catalog for patterns"
    );
    info!(max_results = config.max_results, "limit on number of results");

    let query_start = Instant::now();
    let first = clock
        .time("query", || catalog.list_datasets(&config.query(&config.first_pattern)))
        .with_context(|| format!("query datasets for pattern {}", config.first_pattern))?;
    let second = clock
        .time("query", || catalog.list_datasets(&config.query(&config.second_pattern)))
        .with_context(|| format!("query datasets for pattern {}", config.second_pattern))?;
    info!(
        first = first.len(),
        second = second.len(),
        duration_ms = query_start.elapsed().as_millis(),
        "queries complete"
    );

    let match_start = Instant::now();
    let matches: Vec<MatchedPair> = clock
        .time("match", || cross_match(&first, &second, &options))
        .context("match datasets by short physics description")?
        .into_iter()
        .map(|found| {
            debug!(
                first = %found.first.ldn,
                second = %found.second.ldn,
                score = found.score,
                shared = ?shared_tokens(&found, options.delimiter()),
                "match"
            );
            MatchedPair::from(found)
        })
        .collect();
    info!(
        threshold = options.threshold(),
        candidates = first.len() * second.len(),
        matches = matches.len(),
        duration_ms = match_start.elapsed().as_millis(),
        "matching complete"
    );

    Ok(Comparison {
        first_pattern: config.first_pattern.clone(),
        second_pattern: config.second_pattern.clone(),
        threshold: options.threshold(),
        first,
        second,
        matches,
    })
}

/// Tokens both labels of a match have in common.
fn shared_tokens<'a>(found: &Match<'a>, delimiter: &str) -> Vec<&'a str> {
    let (first, second) = (found.first, found.second);
    similarity_detail(&first.physics_short, &second.physics_short, delimiter)
        .map(|detail| detail.shared)
        .unwrap_or_default()
}
