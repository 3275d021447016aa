use super::{RelationKind, Schema};
use crate::Result;

use anyhow::anyhow;

/// Supplies, per model, the attribute names and relationship descriptors
/// known to the application schema. Consulted only to validate
/// configuration, never on a per-request basis.
pub trait Catalog {
    fn attributes(&self, model: &str) -> Option<Vec<String>>;
    fn relations(&self, model: &str) -> Option<Vec<RelationDescriptor>>;
}

#[derive(Debug, Clone)]
pub struct RelationDescriptor {
    pub name: String,
    pub kind: RelationKind,
    pub target: String,
}

impl Schema {
    /// Checks every configured override against the catalog: attribute
    /// overrides must name known attributes, relations must exist with
    /// matching cardinality and target.
    pub fn verify(&self, catalog: &dyn Catalog) -> Result<()> {
        for model in self.models() {
            let attributes = catalog
                .attributes(&model.name)
                .ok_or_else(|| anyhow!("model `{}` not present in catalog", model.name))?;

            for name in model.attributes.keys() {
                if !attributes.iter().any(|attr| attr == name) {
                    return Err(anyhow!(
                        "attribute `{}.{}` configured but not present in catalog",
                        model.name,
                        name
                    )
                    .into());
                }
            }

            let relations = catalog.relations(&model.name).unwrap_or_default();

            for (name, relation) in &model.relations {
                let Some(descriptor) = relations.iter().find(|desc| desc.name == *name) else {
                    return Err(anyhow!(
                        "relation `{}.{}` configured but not present in catalog",
                        model.name,
                        name
                    )
                    .into());
                };

                if descriptor.kind != relation.kind {
                    return Err(anyhow!(
                        "relation `{}.{}` cardinality mismatch: configured {:?}, catalog {:?}",
                        model.name,
                        name,
                        relation.kind,
                        descriptor.kind
                    )
                    .into());
                }

                if descriptor.target != relation.target {
                    return Err(anyhow!(
                        "relation `{}.{}` targets `{}` but catalog says `{}`",
                        model.name,
                        name,
                        relation.target,
                        descriptor.target
                    )
                    .into());
                }
            }
        }

        Ok(())
    }
}
