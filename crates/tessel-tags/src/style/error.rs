//! Style document errors.

use thiserror::Error;

/// Error returned when a style document cannot be loaded.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The JSON document is malformed or not a flat mapping.
    #[error("invalid JSON style descriptor: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML document is malformed or not a flat mapping.
    #[error("invalid YAML style descriptor: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
