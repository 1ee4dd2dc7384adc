//! Association kind to ER cardinality mapping.

use crate::model::AssociationKind;

/// Relationship cardinality for ERD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cardinality {
    /// Default for has_one and any unrecognized kind
    #[default]
    OneToOne,
    OneToMany,
    ManyToMany,
}

impl Cardinality {
    /// `belongs_to` deliberately renders like `has_many`: the diagram does not
    /// distinguish which side holds the foreign key.
    pub fn for_kind(kind: &AssociationKind) -> Self {
        match kind.as_str() {
            "belongs_to" | "has_many" => Cardinality::OneToMany,
            "has_one" => Cardinality::OneToOne,
            "has_and_belongs_to_many" => Cardinality::ManyToMany,
            _ => Cardinality::default(),
        }
    }

    /// Mermaid ERD notation
    pub fn as_mermaid(self) -> &'static str {
        match self {
            Cardinality::OneToOne => "||--||",
            Cardinality::OneToMany => "||--|{",
            Cardinality::ManyToMany => "}o--o{",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(kind: &str) -> &'static str {
        Cardinality::for_kind(&AssociationKind::from(kind)).as_mermaid()
    }

    #[test]
    fn test_known_kinds() {
        assert_eq!(symbol("belongs_to"), "||--|{");
        assert_eq!(symbol("has_many"), "||--|{");
        assert_eq!(symbol("has_one"), "||--||");
        assert_eq!(symbol("has_and_belongs_to_many"), "}o--o{");
    }

    #[test]
    fn test_keyed_by_relation_text() {
        let kind = AssociationKind::Other("has_and_belongs_to_many".to_string());
        assert_eq!(Cardinality::for_kind(&kind), Cardinality::ManyToMany);
    }

    #[test]
    fn test_unknown_kind_defaults_to_one_to_one() {
        assert_eq!(symbol("has_rich_history"), "||--||");
        assert_eq!(symbol(""), "||--||");
    }
}
