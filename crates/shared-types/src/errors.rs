//! Common error types shared by the engine crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for catalog and table ingestion.
///
/// Expected absences (unknown component ID, no bundle at a budget key,
/// unknown game) are `Option` values on the lookup APIs, not errors.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum BuildError {
    #[error("Catalog parse error: {message}")]
    CatalogParse { message: String },

    #[error("Invalid catalog record: {message}")]
    InvalidRecord {
        id: Option<String>,
        message: String,
    },

    #[error("Invalid configuration data: {message}")]
    InvalidConfig { message: String },
}

/// Result type alias for engine operations
pub type BuildResult<T> = Result<T, BuildError>;

impl From<serde_json::Error> for BuildError {
    fn from(err: serde_json::Error) -> Self {
        BuildError::CatalogParse {
            message: err.to_string(),
        }
    }
}
