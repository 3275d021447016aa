use super::Operation;
use crate::{Row, Value};

#[derive(Debug, Clone)]
pub struct UpdateByKey {
    /// Which table to update
    pub table: String,

    /// The row's `id` value. A filter key, never a settable column.
    pub key: Value,

    /// Columns to assign
    pub assignments: Row,
}

impl From<UpdateByKey> for Operation {
    fn from(value: UpdateByKey) -> Self {
        Self::UpdateByKey(value)
    }
}
