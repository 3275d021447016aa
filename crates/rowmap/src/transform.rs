use rowmap_core::{Error, Record, RecordId, RelationRef, Result, Row, Schema, Value};

/// Converts between the normalized record shape and the denormalized row
/// shape, consulting the schema's conventions and per-attribute hooks.
///
/// Neither direction validates attribute values against a schema; a hook
/// failure propagates as a transform error naming the offending
/// model/attribute, never silently swallowed.
#[derive(Debug)]
pub struct Transformer<'a> {
    schema: &'a Schema,
}

impl<'a> Transformer<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Normalized record → row.
    ///
    /// Timestamp columns are backend-managed and never written. To-many
    /// relationships are never serialized into the primary row; their
    /// foreign keys live on the other side.
    pub fn serialize(&self, record: &Record) -> Result<Row> {
        let model = self.schema.model(&record.model)?;
        let mut row = Row::new();

        if let Some(id) = &record.id {
            row.insert("id", id.clone());
        }

        for (name, value) in &record.attributes {
            let column = self.schema.column_name(model, name);
            if self.schema.is_timestamp_column(model, &column) {
                continue;
            }

            let value = match model.attribute(name).and_then(|attr| attr.serialize.as_ref()) {
                Some(hook) => hook(value.clone())
                    .map_err(|cause| Error::transform(&model.name, name, cause))?,
                None => value.clone(),
            };
            row.insert(column, value);
        }

        for (name, relation) in &record.relations {
            match relation {
                RelationRef::One(target) => {
                    let column = self.schema.foreign_key_column(model, name);
                    let value = match target {
                        Some(target) => target.id.clone(),
                        None => Value::Null,
                    };
                    row.insert(column, value);
                }
                RelationRef::Many(_) => {}
            }
        }

        Ok(row)
    }

    /// Row → normalized record.
    ///
    /// Skips `id`, the enforced access-control column, and embedded eager-loaded
    /// child arrays from the attribute pass; attribute names resolve
    /// through the per-attribute overrides first, then case conversion.
    /// A foreign-key column that is present and non-null becomes a loaded
    /// to-one reference; a null foreign key leaves the relationship
    /// unloaded.
    pub fn deserialize(&self, model_name: &str, row: Row) -> Result<Record> {
        let model = self.schema.model(model_name)?;

        // Only an enforced access column is policy-owned; on a model with
        // enforcement disabled the same column is an ordinary attribute.
        let access_column = self
            .schema
            .access_enabled(model)
            .then(|| self.schema.access_column(model).to_string());

        let foreign_keys: Vec<(String, String, String)> = model
            .belongs_to()
            .map(|(name, relation)| {
                (
                    self.schema.foreign_key_column(model, name),
                    name.to_string(),
                    relation.target.clone(),
                )
            })
            .collect();

        let embeds: Vec<(String, String, String)> = model
            .has_many()
            .map(|(name, relation)| {
                (
                    self.schema.embed_alias(name),
                    name.to_string(),
                    relation.target.clone(),
                )
            })
            .collect();

        let mut record = Record::new(model_name);

        for (column, value) in row {
            if column == "id" {
                record.id = Some(value);
                continue;
            }
            if access_column.as_deref() == Some(column.as_str()) {
                continue;
            }

            let value = match embeds.iter().find(|(alias, _, _)| *alias == column) {
                Some((_, name, target)) => match value {
                    Value::List(children) => {
                        let refs = embedded_refs(&model.name, name, target, children)?;
                        record.set_relation(name.clone(), RelationRef::Many(refs));
                        continue;
                    }
                    other => other,
                },
                None => value,
            };

            // An embedded array for a relationship that is not configured
            // carries no mappable data.
            if value.is_record_list() {
                continue;
            }

            if let Some((_, name, target)) = foreign_keys.iter().find(|(fk, _, _)| *fk == column) {
                if !value.is_null() {
                    record.set_relation(
                        name.clone(),
                        RelationRef::one(RecordId::new(target.clone(), value)),
                    );
                }
                continue;
            }

            let attribute = self.schema.attribute_name(model, &column);
            let value = match model
                .attribute(&attribute)
                .and_then(|attr| attr.deserialize.as_ref())
            {
                Some(hook) => hook(value)
                    .map_err(|cause| Error::transform(&model.name, &attribute, cause))?,
                None => value,
            };
            record.attributes.insert(attribute, value);
        }

        Ok(record)
    }
}

fn embedded_refs(
    model: &str,
    relation: &str,
    target: &str,
    children: Vec<Value>,
) -> Result<Vec<RecordId>> {
    children
        .into_iter()
        .map(|child| {
            let id = child
                .as_record()
                .and_then(|row| row.id())
                .cloned()
                .ok_or_else(|| {
                    Error::transform(model, relation, anyhow::anyhow!("embedded row missing `id`"))
                })?;
            Ok(RecordId::new(target, id))
        })
        .collect()
}
