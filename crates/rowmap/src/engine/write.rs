use crate::{Mapper, Transformer};
use rowmap_core::driver::operation::{DeleteByKey, Insert, UpdateByKey};
use rowmap_core::{Record, Result, Value};

use anyhow::anyhow;

impl Mapper {
    /// Serialize and insert a record, returning it as the backend stored
    /// it (backend-populated id and timestamps included).
    pub async fn create(&self, record: &Record) -> Result<Record> {
        let model = self.schema.model(&record.model)?;
        let transformer = Transformer::new(&self.schema);
        let mut row = transformer.serialize(record)?;

        // The policy value wins over any caller-supplied column.
        if let Some(subject) = self.policy.require_subject(&self.schema, model)? {
            row.insert(self.schema.access_column(model).to_string(), subject);
        }

        let insert = Insert {
            table: self.schema.table_name(model),
            row,
        };
        log::debug!("create model={} table={}", record.model, insert.table);

        let rows = self.driver.exec(insert.into()).await?.into_values()?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("insert into `{}` returned no row", record.model))?;
        transformer.deserialize(&record.model, row)
    }

    /// Serialize and update a record by id, returning the updated row.
    ///
    /// No access filter is re-applied here; updates rely on the backend's
    /// own row-level enforcement.
    pub async fn update(&self, record: &Record) -> Result<Record> {
        let model = self.schema.model(&record.model)?;
        let transformer = Transformer::new(&self.schema);

        let key = record
            .id
            .clone()
            .ok_or_else(|| anyhow!("update of `{}` requires an id", record.model))?;

        let mut assignments = transformer.serialize(record)?;
        // The id is a filter key, never a settable column.
        assignments.remove("id");

        let update = UpdateByKey {
            table: self.schema.table_name(model),
            key,
            assignments,
        };
        log::debug!("update model={} table={}", record.model, update.table);

        let rows = self.driver.exec(update.into()).await?.into_values()?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("update of `{}` returned no row", record.model))?;
        transformer.deserialize(&record.model, row)
    }

    /// Delete a record by id. Like update, deletes rely on the backend's
    /// own row-level enforcement.
    pub async fn delete(&self, model_name: &str, id: impl Into<Value>) -> Result<()> {
        let model = self.schema.model(model_name)?;

        let delete = DeleteByKey {
            table: self.schema.table_name(model),
            key: id.into(),
        };
        log::debug!("delete model={model_name} table={}", delete.table);

        self.driver.exec(delete.into()).await?;
        Ok(())
    }
}
