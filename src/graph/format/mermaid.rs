//! Mermaid erDiagram format output.

use crate::graph::collect::GraphData;

/// Generate Mermaid erDiagram text.
///
/// Every node gets a block (empty when it has no columns) followed by a blank
/// line; relationships follow in collection order. Names are emitted as-is.
pub fn to_mermaid(graph: &GraphData) -> String {
    let mut output = String::from("erDiagram\n");

    for node in &graph.nodes {
        output.push_str(&format!("  {} {{\n", node.id));
        for col in &node.columns {
            output.push_str(&format!("    {} {}\n", col.name, col.col_type));
        }
        output.push_str("  }\n\n");
    }

    for edge in &graph.edges {
        output.push_str(&format!(
            "  {} {} {} : \"{}\"\n",
            edge.from,
            edge.cardinality().as_mermaid(),
            edge.to,
            edge.relation
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::collect::{Edge, Node};
    use crate::model::{AssociationKind, ColumnDescriptor};

    fn create_test_graph() -> GraphData {
        GraphData {
            nodes: vec![
                Node {
                    id: "User".to_string(),
                    columns: vec![
                        ColumnDescriptor {
                            name: "id".to_string(),
                            col_type: "integer".to_string(),
                        },
                        ColumnDescriptor {
                            name: "email".to_string(),
                            col_type: "string".to_string(),
                        },
                    ],
                },
                Node {
                    id: "Post".to_string(),
                    columns: vec![],
                },
            ],
            edges: vec![
                Edge {
                    from: "User".to_string(),
                    to: "Post".to_string(),
                    relation: AssociationKind::HasMany,
                },
                Edge {
                    from: "Post".to_string(),
                    to: "Tag".to_string(),
                    relation: AssociationKind::HasAndBelongsToMany,
                },
            ],
        }
    }

    #[test]
    fn test_mermaid_exact_output() {
        let output = to_mermaid(&create_test_graph());
        let expected = "erDiagram\n\
                        \x20 User {\n\
                        \x20   id integer\n\
                        \x20   email string\n\
                        \x20 }\n\
                        \n\
                        \x20 Post {\n\
                        \x20 }\n\
                        \n\
                        \x20 User ||--|{ Post : \"has_many\"\n\
                        \x20 Post }o--o{ Tag : \"has_and_belongs_to_many\"\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_mermaid_empty_graph() {
        assert_eq!(to_mermaid(&GraphData::default()), "erDiagram\n");
    }

    #[test]
    fn test_mermaid_unknown_kind_label() {
        let graph = GraphData {
            nodes: vec![],
            edges: vec![Edge {
                from: "User".to_string(),
                to: "Event".to_string(),
                relation: AssociationKind::from("has_rich_history"),
            }],
        };
        assert_eq!(
            to_mermaid(&graph),
            "erDiagram\n  User ||--|| Event : \"has_rich_history\"\n"
        );
    }
}
