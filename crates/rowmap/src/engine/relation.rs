use crate::Mapper;
use rowmap_core::driver::operation::UpdateByKey;
use rowmap_core::schema::RelationKind;
use rowmap_core::{RecordId, Result, Row, Value};

use anyhow::anyhow;

impl Mapper {
    /// Point a relationship at a target (or clear it).
    ///
    /// For a to-one relationship the owner's foreign-key column is
    /// updated. For a to-many relationship the foreign key lives on the
    /// target's table, so the target row's child-pointer column is set to
    /// the owner's id instead; only a single child can be repointed per
    /// call, and a `None` target is a no-op (there is no child row to
    /// write to).
    pub async fn set_one(
        &self,
        owner: &RecordId,
        relation_name: &str,
        target: Option<&RecordId>,
    ) -> Result<()> {
        let model = self.schema.model(&owner.model)?;
        let relation = model.relation(relation_name).ok_or_else(|| {
            anyhow!("unknown relation `{}.{relation_name}`", owner.model)
        })?;

        let update = match relation.kind {
            RelationKind::BelongsTo => {
                let mut assignments = Row::new();
                assignments.insert(
                    self.schema.foreign_key_column(model, relation_name),
                    target.map(|target| target.id.clone()),
                );
                UpdateByKey {
                    table: self.schema.table_name(model),
                    key: owner.id.clone(),
                    assignments,
                }
            }
            RelationKind::HasMany => {
                let Some(target) = target else {
                    return Ok(());
                };
                let target_model = self.schema.model(&relation.target)?;
                let mut assignments = Row::new();
                assignments.insert(
                    self.schema.has_many_foreign_key(model, relation),
                    Value::from(owner.id.clone()),
                );
                UpdateByKey {
                    table: self.schema.table_name(target_model),
                    key: target.id.clone(),
                    assignments,
                }
            }
        };

        log::debug!(
            "set_one model={} relation={relation_name} table={}",
            owner.model,
            update.table
        );
        self.driver.exec(update.into()).await?;
        Ok(())
    }

    /// Repeated [`set_one`](Self::set_one) over each listed target. Does
    /// not clear members linked by a previous set; computing a strict
    /// replace-set requires diffing old membership, which needs a prior
    /// read this layer does not issue.
    pub async fn set_many(
        &self,
        owner: &RecordId,
        relation_name: &str,
        targets: &[RecordId],
    ) -> Result<()> {
        for target in targets {
            self.set_one(owner, relation_name, Some(target)).await?;
        }
        Ok(())
    }

    /// Link a single member; equivalent to a `set_one` add.
    pub async fn add_to(
        &self,
        owner: &RecordId,
        relation_name: &str,
        target: &RecordId,
    ) -> Result<()> {
        self.set_one(owner, relation_name, Some(target)).await
    }

    /// Intentional no-op. Unlinking a member is performed by clearing the
    /// child's foreign key directly, not inferred from set membership.
    pub async fn remove_from(
        &self,
        _owner: &RecordId,
        _relation_name: &str,
        _target: &RecordId,
    ) -> Result<()> {
        Ok(())
    }
}
