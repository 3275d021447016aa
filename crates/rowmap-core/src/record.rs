use crate::Value;

use indexmap::IndexMap;

/// The normalized, schema-typed representation of an entity: identity,
/// flat attributes, and named relationships.
///
/// An absent attribute key means "not loaded", not "null".
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Name of the model this record belongs to
    pub model: String,

    /// Backend-assigned identity. `None` until the record has been
    /// created; immutable afterwards.
    pub id: Option<Value>,

    /// Loaded attribute values, keyed by attribute name
    pub attributes: IndexMap<String, Value>,

    /// Loaded relationships, keyed by relationship name
    pub relations: IndexMap<String, RelationRef>,
}

/// A loaded relationship reference.
#[derive(Debug, Clone, PartialEq)]
pub enum RelationRef {
    /// To-one reference; `None` means the relationship was cleared.
    One(Option<RecordId>),

    /// To-many references. Order is not significant.
    Many(Vec<RecordId>),
}

/// A typed identity pointing at another record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordId {
    pub model: String,
    pub id: Value,
}

impl Record {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            id: None,
            attributes: IndexMap::new(),
            relations: IndexMap::new(),
        }
    }

    pub fn with_id(model: impl Into<String>, id: impl Into<Value>) -> Self {
        let mut record = Self::new(model);
        record.id = Some(id.into());
        record
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    pub fn set_relation(&mut self, name: impl Into<String>, relation: RelationRef) -> &mut Self {
        self.relations.insert(name.into(), relation);
        self
    }

    pub fn relation(&self, name: &str) -> Option<&RelationRef> {
        self.relations.get(name)
    }

    /// The record's identity as a [`RecordId`], if it has been assigned.
    pub fn record_id(&self) -> Option<RecordId> {
        self.id.as_ref().map(|id| RecordId {
            model: self.model.clone(),
            id: id.clone(),
        })
    }
}

impl RelationRef {
    pub fn one(target: RecordId) -> Self {
        RelationRef::One(Some(target))
    }

    pub fn cleared() -> Self {
        RelationRef::One(None)
    }

    pub fn many(targets: impl IntoIterator<Item = RecordId>) -> Self {
        RelationRef::Many(targets.into_iter().collect())
    }
}

impl RecordId {
    pub fn new(model: impl Into<String>, id: impl Into<Value>) -> Self {
        Self {
            model: model.into(),
            id: id.into(),
        }
    }
}
