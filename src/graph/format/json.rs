//! JSON format output for ERD data.

use crate::graph::collect::GraphData;
use crate::model::ColumnDescriptor;
use schemars::JsonSchema;
use serde::Serialize;

/// JSON representation of the ERD
#[derive(Debug, Serialize, JsonSchema)]
pub struct ErdJson {
    pub models: Vec<NodeJson>,
    pub relationships: Vec<EdgeJson>,
    pub stats: ErdStats,
}

/// JSON representation of a model node
#[derive(Debug, Serialize, JsonSchema)]
pub struct NodeJson {
    pub id: String,
    pub columns: Vec<ColumnDescriptor>,
}

/// JSON representation of a relationship
#[derive(Debug, Serialize, JsonSchema)]
pub struct EdgeJson {
    pub from: String,
    pub to: String,
    pub relation: String,
    pub cardinality: String,
}

/// ERD statistics
#[derive(Debug, Serialize, JsonSchema)]
pub struct ErdStats {
    pub model_count: usize,
    pub column_count: usize,
    pub relationship_count: usize,
}

/// Generate JSON output from collected graph data
pub fn to_json(graph: &GraphData) -> String {
    let erd = build_erd_json(graph);
    serde_json::to_string_pretty(&erd).unwrap_or_else(|_| "{}".to_string())
}

/// Build the JSON structure
pub fn build_erd_json(graph: &GraphData) -> ErdJson {
    let models = graph
        .nodes
        .iter()
        .map(|node| NodeJson {
            id: node.id.clone(),
            columns: node.columns.clone(),
        })
        .collect();

    let relationships = graph
        .edges
        .iter()
        .map(|e| EdgeJson {
            from: e.from.clone(),
            to: e.to.clone(),
            relation: e.relation.to_string(),
            cardinality: e.cardinality().as_mermaid().to_string(),
        })
        .collect();

    ErdJson {
        models,
        relationships,
        stats: ErdStats {
            model_count: graph.node_count(),
            column_count: graph.column_count(),
            relationship_count: graph.edge_count(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::collect::{collect, Mode};
    use crate::model::{AssociationDescriptor, AssociationKind, ModelDescriptor};

    fn create_test_graph() -> GraphData {
        let models = vec![
            ModelDescriptor::new("User")
                .column("id", "integer")
                .column("email", "string")
                .association(AssociationDescriptor::new(
                    "profile",
                    AssociationKind::HasOne,
                    "Profile",
                )),
            ModelDescriptor::new("Profile").column("user_id", "integer"),
        ];
        collect(&models, Mode::Columns).unwrap()
    }

    #[test]
    fn test_json_structure() {
        let erd = build_erd_json(&create_test_graph());

        assert_eq!(erd.models.len(), 2);
        assert_eq!(erd.relationships.len(), 1);
        assert_eq!(erd.stats.model_count, 2);
        assert_eq!(erd.stats.column_count, 3);
        assert_eq!(erd.relationships[0].cardinality, "||--||");
    }

    #[test]
    fn test_json_output() {
        let output = to_json(&create_test_graph());

        assert!(output.contains("\"id\": \"User\""));
        assert!(output.contains("\"type\": \"integer\""));
        assert!(output.contains("\"relation\": \"has_one\""));
    }
}
