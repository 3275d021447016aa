use super::{AccessOverride, Attribute, ColumnCase, Model, NameResolver, Relation, Schema};
use crate::Value;

use indexmap::IndexMap;
use std::sync::Arc;

/// Assembles an immutable [`Schema`].
pub struct Builder {
    models: IndexMap<String, Model>,
    access_enabled: bool,
    access_column: String,
    column_case: ColumnCase,
    eager_load: bool,
    names: NameResolver,
}

/// Per-model configuration surface, used inside [`Builder::model`]
/// closures.
pub struct ModelBuilder {
    model: Model,

    /// Foreign-key overrides may be declared before or after the relation
    /// itself; they are applied when the model is finished.
    foreign_keys: IndexMap<String, String>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            models: IndexMap::new(),
            access_enabled: false,
            access_column: "user_id".to_string(),
            column_case: ColumnCase::default(),
            eager_load: false,
            names: NameResolver::default(),
        }
    }

    /// Enable or disable access control for models without an override.
    pub fn access_control(mut self, enabled: bool) -> Self {
        self.access_enabled = enabled;
        self
    }

    /// Default access-control column name.
    pub fn access_column(mut self, column: impl Into<String>) -> Self {
        self.access_column = column.into();
        self
    }

    pub fn column_case(mut self, case: ColumnCase) -> Self {
        self.column_case = case;
        self
    }

    /// When enabled, reads embed to-many child rows in the same request.
    pub fn eager_load(mut self, eager: bool) -> Self {
        self.eager_load = eager;
        self
    }

    pub fn names(mut self, names: NameResolver) -> Self {
        self.names = names;
        self
    }

    /// Configure a model. Declaring a model with an empty closure is
    /// enough to make it addressable by the dispatcher.
    pub fn model(mut self, name: &str, f: impl FnOnce(&mut ModelBuilder)) -> Self {
        let mut builder = ModelBuilder {
            model: Model::new(name),
            foreign_keys: IndexMap::new(),
        };
        f(&mut builder);

        let model = builder.finish();
        assert!(
            !self.models.contains_key(&model.name),
            "model `{}` configured twice",
            model.name
        );
        self.models.insert(model.name.clone(), model);
        self
    }

    pub fn build(self) -> Schema {
        Schema {
            models: self.models,
            access_enabled: self.access_enabled,
            access_column: self.access_column,
            column_case: self.column_case,
            eager_load: self.eager_load,
            names: self.names,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelBuilder {
    /// Explicit table-name override.
    pub fn table(&mut self, name: impl Into<String>) -> &mut Self {
        self.model.table = Some(name.into());
        self
    }

    /// Explicit column-name override for an attribute.
    pub fn column(&mut self, attribute: &str, column: impl Into<String>) -> &mut Self {
        self.attribute_mut(attribute).column = Some(column.into());
        self
    }

    /// Custom transform applied when writing an attribute to a row.
    pub fn serialize_with(
        &mut self,
        attribute: &str,
        hook: impl Fn(Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    ) -> &mut Self {
        self.attribute_mut(attribute).serialize = Some(Arc::new(hook));
        self
    }

    /// Custom transform applied when reading an attribute from a row.
    pub fn deserialize_with(
        &mut self,
        attribute: &str,
        hook: impl Fn(Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    ) -> &mut Self {
        self.attribute_mut(attribute).deserialize = Some(Arc::new(hook));
        self
    }

    pub fn belongs_to(&mut self, relation: &str, target: impl Into<String>) -> &mut Self {
        self.model
            .relations
            .insert(relation.to_string(), Relation::belongs_to(target));
        self
    }

    pub fn has_many(&mut self, relation: &str, target: impl Into<String>) -> &mut Self {
        self.model
            .relations
            .insert(relation.to_string(), Relation::has_many(target));
        self
    }

    /// Explicit foreign-key column override for a relation declared on
    /// this model.
    pub fn foreign_key(&mut self, relation: &str, column: impl Into<String>) -> &mut Self {
        self.foreign_keys.insert(relation.to_string(), column.into());
        self
    }

    /// Override the backend-managed timestamp column names.
    pub fn timestamps(&mut self, created: impl Into<String>, updated: impl Into<String>) -> &mut Self {
        self.model.timestamps.created = created.into();
        self.model.timestamps.updated = updated.into();
        self
    }

    pub fn access_enabled(&mut self, enabled: bool) -> &mut Self {
        self.access_mut().enabled = Some(enabled);
        self
    }

    pub fn access_column(&mut self, column: impl Into<String>) -> &mut Self {
        self.access_mut().column = Some(column.into());
        self
    }

    fn attribute_mut(&mut self, name: &str) -> &mut Attribute {
        self.model.attributes.entry(name.to_string()).or_default()
    }

    fn access_mut(&mut self) -> &mut AccessOverride {
        self.model.access.get_or_insert_with(AccessOverride::default)
    }

    fn finish(mut self) -> Model {
        for (relation, column) in self.foreign_keys {
            let Some(relation) = self.model.relations.get_mut(&relation) else {
                panic!(
                    "foreign key configured for unknown relation `{}.{}`",
                    self.model.name, relation
                );
            };
            relation.foreign_key = Some(column);
        }
        self.model
    }
}
