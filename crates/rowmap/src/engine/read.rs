use crate::{Mapper, Transformer};
use rowmap_core::driver::operation::{Embed, Query};
use rowmap_core::{Record, Result, Value};

impl Mapper {
    /// Every record of a model, deserialized in the order the backend
    /// delivered the rows.
    pub async fn find_all(&self, model_name: &str) -> Result<Vec<Record>> {
        let query = self.build_query(model_name)?;
        log::debug!(
            "find_all model={model_name} table={} filters={}",
            query.table,
            query.filters.len()
        );

        let rows = self.driver.exec(query.into()).await?.into_values()?;

        let transformer = Transformer::new(&self.schema);
        rows.into_iter()
            .map(|row| transformer.deserialize(model_name, row))
            .collect()
    }

    /// One record by id, or `None`. Absence is a normal outcome, not an
    /// error; a record-not-found driver report is converted here.
    pub async fn find_one(
        &self,
        model_name: &str,
        id: impl Into<Value>,
    ) -> Result<Option<Record>> {
        let mut query = self.build_query(model_name)?.filter("id", id);
        query.single = true;
        log::debug!("find_one model={model_name} table={}", query.table);

        let rows = match self.driver.exec(query.into()).await {
            Ok(response) => response.into_values()?,
            Err(err) if err.is_record_not_found() => return Ok(None),
            Err(err) => return Err(err),
        };

        let Some(row) = rows.into_iter().next() else {
            return Ok(None);
        };
        Transformer::new(&self.schema)
            .deserialize(model_name, row)
            .map(Some)
    }

    /// Shared read scaffolding: table, eager-load embeds, and the access
    /// filter. The filter is part of the same request so rows outside the
    /// caller's scope never leak, not even their existence.
    fn build_query(&self, model_name: &str) -> Result<Query> {
        let model = self.schema.model(model_name)?;
        let mut query = Query::new(self.schema.table_name(model));

        if let Some(subject) = self.policy.require_subject(&self.schema, model)? {
            query = query.filter(self.schema.access_column(model).to_string(), subject);
        }

        if self.schema.eager_load() {
            for (name, relation) in model.has_many() {
                let target = self.schema.model(&relation.target)?;
                query.embed.push(Embed {
                    alias: self.schema.embed_alias(name),
                    table: self.schema.table_name(target),
                    foreign_key: self.schema.has_many_foreign_key(model, relation),
                });
            }
        }

        Ok(query)
    }
}
