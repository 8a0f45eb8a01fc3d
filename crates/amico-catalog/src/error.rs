use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON catalog {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse CSV catalog {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("unsupported catalog format {path}: expected a .json or .csv file")]
    UnsupportedFormat { path: PathBuf },

    #[error("catalog entry {entry} has no {field} field")]
    MissingField { entry: String, field: String },

    #[error("invalid catalog query: {message}")]
    InvalidQuery { message: String },

    #[error("catalog environment not detected: pass --catalog or set {variable}")]
    EnvironmentMissing { variable: String },

    #[error("catalog file not found: {path}")]
    NotFound { path: PathBuf },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
