mod builder;
pub use builder::{Builder, ModelBuilder};

mod model;
pub use model::{AccessOverride, Attribute, Hook, Model, Timestamps};

pub mod name;
pub use name::{camel_case, snake_case, ColumnCase, NameResolver};

mod relation;
pub use relation::{Relation, RelationKind};

mod verify;
pub use verify::{Catalog, RelationDescriptor};

use crate::{Error, Result};

use indexmap::IndexMap;

/// The immutable global configuration: per-model configuration plus the
/// defaults every convention lookup falls back to.
///
/// Built once via [`Schema::builder`], then shared (typically behind an
/// `Arc`) for the adapter's lifetime. Every resolution method is a pure
/// function of the configuration, so behavior is fully predictable from
/// the configuration alone.
#[derive(Debug)]
pub struct Schema {
    /// Per-model configuration, keyed by model name
    pub(crate) models: IndexMap<String, Model>,

    /// Whether access control is enabled for models without an override
    pub(crate) access_enabled: bool,

    /// Default access-control column name
    pub(crate) access_column: String,

    /// Casing used on the column side of the mapping
    pub(crate) column_case: ColumnCase,

    /// When true, reads embed to-many child rows in the same request
    pub(crate) eager_load: bool,

    /// Pluralization/singularization functions
    pub(crate) names: NameResolver,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn model(&self, name: &str) -> Result<&Model> {
        self.models
            .get(name)
            .ok_or_else(|| Error::from(anyhow::anyhow!("unknown model `{name}`")))
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    pub fn names(&self) -> &NameResolver {
        &self.names
    }

    pub fn eager_load(&self) -> bool {
        self.eager_load
    }

    /// The table a model's rows live in: explicit override, else the
    /// pluralized model name.
    pub fn table_name(&self, model: &Model) -> String {
        match &model.table {
            Some(table) => table.clone(),
            None => self.names.pluralize(&model.name),
        }
    }

    /// The column an attribute maps to: per-attribute override, else the
    /// case-converted attribute name.
    pub fn column_name(&self, model: &Model, attribute: &str) -> String {
        if let Some(column) = model
            .attributes
            .get(attribute)
            .and_then(|attr| attr.column.as_deref())
        {
            return column.to_string();
        }
        self.column_case.to_column(attribute)
    }

    /// The attribute a column maps back to: reverse lookup of the
    /// per-attribute overrides, else the case-converted column name.
    pub fn attribute_name(&self, model: &Model, column: &str) -> String {
        for (name, attr) in &model.attributes {
            if attr.column.as_deref() == Some(column) {
                return name.clone();
            }
        }
        self.column_case.to_attribute(column)
    }

    /// The foreign-key column for a to-one relationship: explicit
    /// override, else the case-converted `{relation}_id`.
    pub fn foreign_key_column(&self, model: &Model, relation_name: &str) -> String {
        if let Some(fk) = model
            .relations
            .get(relation_name)
            .and_then(|relation| relation.foreign_key.as_deref())
        {
            return fk.to_string();
        }
        self.column_case.to_column(&format!("{relation_name}_id"))
    }

    /// The child-pointer column on the target table of a to-many
    /// relationship: the relation's override, else the case-converted
    /// `{owner}_id`.
    pub fn has_many_foreign_key(&self, owner: &Model, relation: &Relation) -> String {
        match &relation.foreign_key {
            Some(fk) => fk.clone(),
            None => self.column_case.to_column(&format!("{}_id", owner.name)),
        }
    }

    /// The row key a to-many relationship's embedded child rows appear
    /// under when eager loading.
    pub fn embed_alias(&self, relation_name: &str) -> String {
        self.column_case.to_column(relation_name)
    }

    pub fn access_enabled(&self, model: &Model) -> bool {
        model
            .access
            .as_ref()
            .and_then(|access| access.enabled)
            .unwrap_or(self.access_enabled)
    }

    pub fn access_column<'a>(&'a self, model: &'a Model) -> &'a str {
        model
            .access
            .as_ref()
            .and_then(|access| access.column.as_deref())
            .unwrap_or(&self.access_column)
    }

    /// True for the backend-managed timestamp columns, which are never
    /// written by this layer.
    pub fn is_timestamp_column(&self, model: &Model, column: &str) -> bool {
        column == model.timestamps.created || column == model.timestamps.updated
    }
}
