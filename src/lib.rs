//! Render ORM model metadata as Mermaid entity-relationship diagrams.
//!
//! The host application exports its models (name, columns, associations) as
//! [`model::ModelDescriptor`]s; [`graph::collect`] turns them into a
//! deduplicated node/edge graph and [`graph::to_mermaid`] renders it.

pub mod config;
pub mod error;
pub mod graph;
pub mod model;

pub use error::VizError;
