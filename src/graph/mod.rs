//! ERD (Entity-Relationship Diagram) generation module.
//!
//! This module provides:
//! - Collection of model descriptors into a deduplicated node/edge graph
//! - Association kind to cardinality mapping
//! - Mermaid-safe naming for namespaced models
//! - Output formats: Mermaid, HTML, JSON

pub mod cardinality;
pub mod collect;
pub mod filter;
pub mod format;
pub mod sanitize;

pub use cardinality::Cardinality;
pub use collect::{collect, Edge, GraphData, Mode, Node};
pub use filter::{split_globs, ModelFilter};
pub use format::{to_html, to_json, to_mermaid, OutputFormat};
pub use sanitize::sanitize;

use crate::error::VizError;
use crate::model::ModelSource;

/// Load models from `source`, apply `filter`, collect and render Mermaid text.
///
/// Nothing is returned unless every step succeeds.
pub fn render_mermaid<S: ModelSource + ?Sized>(
    source: &S,
    mode: Mode,
    filter: &ModelFilter,
) -> Result<String, VizError> {
    let models = filter.apply(source.models()?);
    let graph = collect(&models, mode)?;
    Ok(to_mermaid(&graph))
}
