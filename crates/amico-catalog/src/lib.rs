//! Dataset catalog access.
//!
//! A [`Catalog`] answers [`DatasetQuery`] requests with collections of
//! [`Record`]s. The shipped [`FileCatalog`] serves a local catalog export;
//! [`CatalogEnvironment`] locates that export before anything is queried.

#![deny(unsafe_code)]

pub mod environment;
pub mod error;
pub mod file;
pub mod query;

pub use amico_core::Record;
pub use environment::{CATALOG_ENV_VAR, CatalogEnvironment};
pub use error::{CatalogError, Result};
pub use file::FileCatalog;
pub use query::{DEFAULT_DATASET_TYPE, DEFAULT_LIMIT, DatasetQuery, Pattern};

/// Source of dataset records.
pub trait Catalog {
    /// Return the records matching `query`, in catalog order.
    fn list_datasets(&self, query: &DatasetQuery) -> Result<Vec<Record>>;
}
