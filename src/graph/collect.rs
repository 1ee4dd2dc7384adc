//! Collection of model descriptors into a deduplicated node/edge graph.

use crate::error::VizError;
use crate::graph::cardinality::Cardinality;
use crate::graph::sanitize::sanitize;
use crate::model::{AssociationDescriptor, AssociationKind, ColumnDescriptor, ModelDescriptor};
use ahash::AHashSet;
use log::{debug, info};
use std::fmt;

/// Whether column detail is included in the diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Entities and relationships only
    #[default]
    Relations,
    /// Entities with their columns
    Columns,
}

impl Mode {
    /// Anything other than `columns` means relations; this never fails.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "columns" => Mode::Columns,
            _ => Mode::Relations,
        }
    }
}

impl From<&str> for Mode {
    fn from(s: &str) -> Self {
        Mode::parse_lenient(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Relations => write!(f, "relations"),
            Mode::Columns => write!(f, "columns"),
        }
    }
}

/// One entity block in the diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Sanitized model name
    pub id: String,
    pub columns: Vec<ColumnDescriptor>,
}

/// A directed relationship between two sanitized ids
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub relation: AssociationKind,
}

impl Edge {
    pub fn cardinality(&self) -> Cardinality {
        Cardinality::for_kind(&self.relation)
    }
}

/// Result of collection: nodes in model order, edges in first-seen order
#[derive(Debug, Clone, Default)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphData {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn column_count(&self) -> usize {
        self.nodes.iter().map(|n| n.columns.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Target name for an association: the related model, or a
/// `Polymorphic(<name>)` placeholder when the target varies per record.
fn target_name(model: &ModelDescriptor, assoc: &AssociationDescriptor) -> Result<String, VizError> {
    if assoc.polymorphic {
        return Ok(format!("Polymorphic({})", assoc.name));
    }
    assoc
        .target
        .clone()
        .ok_or_else(|| VizError::UnresolvedTarget {
            model: model.name.clone(),
            association: assoc.name.clone(),
        })
}

/// Build the graph for `models`.
///
/// Fails as a whole if any non-polymorphic association has no resolvable
/// target; no partial graph is returned.
pub fn collect(models: &[ModelDescriptor], mode: Mode) -> Result<GraphData, VizError> {
    let mut nodes = Vec::with_capacity(models.len());
    let mut edges = Vec::new();
    let mut seen: AHashSet<Edge> = AHashSet::new();

    for model in models {
        let from = sanitize(&model.name);

        let columns = match mode {
            Mode::Columns => model.columns.clone(),
            Mode::Relations => Vec::new(),
        };
        nodes.push(Node {
            id: from.clone(),
            columns,
        });

        for assoc in &model.associations {
            let edge = Edge {
                from: from.clone(),
                to: sanitize(&target_name(model, assoc)?),
                relation: assoc.kind.clone(),
            };

            if !seen.insert(edge.clone()) {
                debug!(
                    "Skipping duplicate edge {} -> {} ({})",
                    edge.from, edge.to, edge.relation
                );
                continue;
            }
            edges.push(edge);
        }
    }

    info!(
        "Collected {} models and {} relationships ({} mode)",
        nodes.len(),
        edges.len(),
        mode
    );

    Ok(GraphData { nodes, edges })
}
