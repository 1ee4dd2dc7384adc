//! Error type shared by the model source, collector and output formats.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("failed to read manifest {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML manifest: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A non-polymorphic association whose target model could not be resolved
    #[error("cannot resolve target of association `{association}` on model `{model}`")]
    UnresolvedTarget { model: String, association: String },

    #[error("invalid model pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("unknown {what}: {value}. Valid options: {valid}")]
    UnknownFormat {
        what: &'static str,
        value: String,
        valid: &'static str,
    },
}
