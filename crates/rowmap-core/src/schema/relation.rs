/// A named relationship from the owning model's perspective.
#[derive(Debug, Clone)]
pub struct Relation {
    /// Relationship cardinality
    pub kind: RelationKind,

    /// Name of the related model
    pub target: String,

    /// Explicit foreign-key column override. For `BelongsTo` this is a
    /// column on the owner's table; for `HasMany` it is the child-pointer
    /// column on the target's table.
    pub foreign_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// To-one: the foreign key lives on this model's table
    BelongsTo,

    /// To-many: the foreign key lives on the target model's table
    HasMany,
}

impl Relation {
    pub fn belongs_to(target: impl Into<String>) -> Self {
        Self {
            kind: RelationKind::BelongsTo,
            target: target.into(),
            foreign_key: None,
        }
    }

    pub fn has_many(target: impl Into<String>) -> Self {
        Self {
            kind: RelationKind::HasMany,
            target: target.into(),
            foreign_key: None,
        }
    }

    pub fn is_belongs_to(&self) -> bool {
        matches!(self.kind, RelationKind::BelongsTo)
    }

    pub fn is_has_many(&self) -> bool {
        matches!(self.kind, RelationKind::HasMany)
    }
}
