use rowmap_core::{schema::Model, Error, Result, Schema, Value};

use std::fmt;
use std::sync::Arc;

/// The caller-supplied subject accessor.
pub type SubjectFn = Arc<dyn Fn() -> Option<Value> + Send + Sync>;

/// Decides, per model, whether an identity must be enforced and supplies
/// the current subject. Fails closed: an access-controlled operation with
/// no resolvable subject is rejected before any backend call.
#[derive(Clone)]
pub struct AccessPolicy {
    subject: SubjectFn,
}

impl AccessPolicy {
    pub fn new(subject: SubjectFn) -> Self {
        Self { subject }
    }

    pub fn current_subject(&self) -> Option<Value> {
        (self.subject)()
    }

    /// Returns `None` without consulting the accessor when access control
    /// is disabled for the model, the subject when enabled and
    /// resolvable, and a missing-subject error otherwise.
    pub fn require_subject(&self, schema: &Schema, model: &Model) -> Result<Option<Value>> {
        if !schema.access_enabled(model) {
            return Ok(None);
        }
        match (self.subject)() {
            Some(subject) => Ok(Some(subject)),
            None => Err(Error::missing_subject(&model.name)),
        }
    }
}

impl fmt::Debug for AccessPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessPolicy").finish_non_exhaustive()
    }
}
