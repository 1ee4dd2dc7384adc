//! Model descriptors supplied by the host application.
//!
//! The host is responsible for discovering its models and reflecting their
//! associations; this module only describes the shape of what it hands over.

mod source;

pub use source::{ManifestFormat, ManifestSource, ModelSource};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Top-level manifest document exported by the host
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Manifest {
    pub models: Vec<ModelDescriptor>,
}

/// One ORM model as reflected by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ModelDescriptor {
    /// Model name, possibly namespaced (e.g. `Billing::Invoice`)
    pub name: String,
    /// Columns in declaration order; only read when column detail is requested
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
    /// Associations in declaration order
    #[serde(default)]
    pub associations: Vec<AssociationDescriptor>,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn column(mut self, name: impl Into<String>, col_type: impl Into<String>) -> Self {
        self.columns.push(ColumnDescriptor {
            name: name.into(),
            col_type: col_type.into(),
        });
        self
    }

    pub fn association(mut self, assoc: AssociationDescriptor) -> Self {
        self.associations.push(assoc);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Declared type as reported by the host (e.g. `integer`, `string`)
    #[serde(rename = "type")]
    pub col_type: String,
}

/// A reflected association
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AssociationDescriptor {
    /// The association's own name (e.g. `attachable`, `posts`)
    pub name: String,
    #[schemars(with = "String")]
    pub kind: AssociationKind,
    /// Related model name; `None` when the host could not resolve it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default)]
    pub polymorphic: bool,
}

impl AssociationDescriptor {
    pub fn new(name: impl Into<String>, kind: AssociationKind, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            target: Some(target.into()),
            polymorphic: false,
        }
    }

    pub fn polymorphic(name: impl Into<String>, kind: AssociationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            target: None,
            polymorphic: true,
        }
    }
}

/// Association macro kind. Anything the host reports that is not one of the
/// standard kinds is kept verbatim in `Other`.
///
/// Equality and hashing compare the relation text, so `Other("has_many")`
/// is the same kind as `HasMany`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssociationKind {
    BelongsTo,
    HasMany,
    HasOne,
    HasAndBelongsToMany,
    Other(String),
}

impl AssociationKind {
    pub fn as_str(&self) -> &str {
        match self {
            AssociationKind::BelongsTo => "belongs_to",
            AssociationKind::HasMany => "has_many",
            AssociationKind::HasOne => "has_one",
            AssociationKind::HasAndBelongsToMany => "has_and_belongs_to_many",
            AssociationKind::Other(kind) => kind,
        }
    }
}

impl PartialEq for AssociationKind {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for AssociationKind {}

impl Hash for AssociationKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for AssociationKind {
    fn from(s: &str) -> Self {
        match s {
            "belongs_to" => AssociationKind::BelongsTo,
            "has_many" => AssociationKind::HasMany,
            "has_one" => AssociationKind::HasOne,
            "has_and_belongs_to_many" => AssociationKind::HasAndBelongsToMany,
            other => AssociationKind::Other(other.to_string()),
        }
    }
}

impl From<String> for AssociationKind {
    fn from(s: String) -> Self {
        AssociationKind::from(s.as_str())
    }
}

impl From<AssociationKind> for String {
    fn from(kind: AssociationKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for AssociationKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AssociationKind::from(s))
    }
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
