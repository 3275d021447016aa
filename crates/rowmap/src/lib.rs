mod engine;
pub use engine::{Intent, Outcome};

mod policy;
pub use policy::{AccessPolicy, SubjectFn};

mod transform;
pub use transform::Transformer;

pub use rowmap_core::{
    driver, schema, Driver, Error, Record, RecordId, RelationRef, Result, Row, Schema, Value,
};

use std::sync::Arc;

/// The operation dispatcher: pairs an immutable [`Schema`] with a backend
/// [`Driver`] and an [`AccessPolicy`], and routes each read/write intent
/// through name resolution, policy enforcement, one backend call, and
/// shape conversion.
///
/// Holds no mutable state; one configured instance is safe to share
/// across any number of concurrent callers.
#[derive(Debug)]
pub struct Mapper {
    schema: Arc<Schema>,
    driver: Box<dyn Driver>,
    policy: AccessPolicy,
}

pub struct MapperBuilder {
    schema: Option<Arc<Schema>>,
    driver: Option<Box<dyn Driver>>,
    subject: Option<SubjectFn>,
}

impl Mapper {
    pub fn builder() -> MapperBuilder {
        MapperBuilder {
            schema: None,
            driver: None,
            subject: None,
        }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }
}

impl MapperBuilder {
    pub fn schema(mut self, schema: impl Into<Arc<Schema>>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn driver(mut self, driver: impl Driver) -> Self {
        self.driver = Some(Box::new(driver));
        self
    }

    /// The subject accessor: a zero-argument function returning the
    /// current caller's identifier, or `None` when no caller is
    /// resolvable.
    pub fn subject(mut self, subject: impl Fn() -> Option<Value> + Send + Sync + 'static) -> Self {
        self.subject = Some(Arc::new(subject));
        self
    }

    pub fn build(self) -> Result<Mapper> {
        let schema = self
            .schema
            .ok_or_else(|| anyhow::anyhow!("mapper requires a schema"))?;
        let driver = self
            .driver
            .ok_or_else(|| anyhow::anyhow!("mapper requires a driver"))?;
        let subject = self.subject.unwrap_or_else(|| Arc::new(|| None));

        Ok(Mapper {
            schema,
            driver,
            policy: AccessPolicy::new(subject),
        })
    }
}
