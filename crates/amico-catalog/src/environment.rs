//! Catalog environment audit.
//!
//! Runs before any query so that a missing catalog is reported once, up
//! front, instead of as a read failure halfway through a comparison.

use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::error::{CatalogError, Result};
use crate::file::FileCatalog;

/// Environment variable naming the catalog export when no path is passed.
pub const CATALOG_ENV_VAR: &str = "AMICO_CATALOG";

/// A located catalog export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEnvironment {
    path: PathBuf,
}

impl CatalogEnvironment {
    /// Resolve the catalog from an explicit path or [`CATALOG_ENV_VAR`].
    ///
    /// # Errors
    ///
    /// See [`CatalogEnvironment::resolve_with`].
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        Self::resolve_with(explicit, |name| std::env::var_os(name).map(PathBuf::from))
    }

    /// Resolve the catalog using `lookup` to read environment variables.
    ///
    /// An explicit path wins over the environment. Empty values count as
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EnvironmentMissing`] when neither source names
    /// a catalog and [`CatalogError::NotFound`] when the named file does not
    /// exist.
    pub fn resolve_with<F>(explicit: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        debug!("ensure existence of catalog environment");
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => lookup(CATALOG_ENV_VAR),
        }
        .filter(|path| !path.as_os_str().is_empty());

        let Some(path) = path else {
            error!(variable = CATALOG_ENV_VAR, "catalog environment not detected");
            return Err(CatalogError::EnvironmentMissing {
                variable: CATALOG_ENV_VAR.to_string(),
            });
        };
        if !path.is_file() {
            error!(path = %path.display(), "catalog file not found");
            return Err(CatalogError::NotFound { path });
        }
        debug!(path = %path.display(), "catalog environment detected");
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the located catalog.
    ///
    /// # Errors
    ///
    /// See [`FileCatalog::load`].
    pub fn open(&self) -> Result<FileCatalog> {
        FileCatalog::load(&self.path)
    }
}
