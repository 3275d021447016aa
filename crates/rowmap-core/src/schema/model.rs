use super::{Relation, RelationKind};
use crate::Value;

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A custom per-attribute value transform. Failures are wrapped into a
/// transform error naming the offending model and attribute.
pub type Hook = Arc<dyn Fn(Value) -> anyhow::Result<Value> + Send + Sync>;

/// Per-model configuration. Immutable after construction; consulted,
/// never mutated, by every transformation.
#[derive(Debug)]
pub struct Model {
    /// Name of the model
    pub name: String,

    /// Explicit table-name override
    pub table: Option<String>,

    /// Per-attribute configuration, keyed by attribute name
    pub attributes: IndexMap<String, Attribute>,

    /// Relationships, keyed by relationship name
    pub relations: IndexMap<String, Relation>,

    /// Backend-managed timestamp column names
    pub timestamps: Timestamps,

    /// Per-model access-control override
    pub access: Option<AccessOverride>,
}

#[derive(Default)]
pub struct Attribute {
    /// Explicit column-name override
    pub column: Option<String>,

    /// Applied when writing the attribute to a row
    pub serialize: Option<Hook>,

    /// Applied when reading the attribute back from a row
    pub deserialize: Option<Hook>,
}

#[derive(Debug, Clone)]
pub struct Timestamps {
    pub created: String,
    pub updated: String,
}

#[derive(Debug, Default, Clone)]
pub struct AccessOverride {
    pub enabled: Option<bool>,
    pub column: Option<String>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            attributes: IndexMap::new(),
            relations: IndexMap::new(),
            timestamps: Timestamps::default(),
            access: None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    pub fn belongs_to(&self) -> impl Iterator<Item = (&str, &Relation)> {
        self.relations_of_kind(RelationKind::BelongsTo)
    }

    pub fn has_many(&self) -> impl Iterator<Item = (&str, &Relation)> {
        self.relations_of_kind(RelationKind::HasMany)
    }

    fn relations_of_kind(&self, kind: RelationKind) -> impl Iterator<Item = (&str, &Relation)> {
        self.relations
            .iter()
            .filter(move |(_, relation)| relation.kind == kind)
            .map(|(name, relation)| (name.as_str(), relation))
    }
}

impl Default for Timestamps {
    fn default() -> Self {
        Self {
            created: "created_at".to_string(),
            updated: "updated_at".to_string(),
        }
    }
}

impl fmt::Debug for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("column", &self.column)
            .field("serialize", &self.serialize.as_ref().map(|_| ".."))
            .field("deserialize", &self.deserialize.as_ref().map(|_| ".."))
            .finish()
    }
}
