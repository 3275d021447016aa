use super::Operation;
use crate::Value;

#[derive(Debug, Clone)]
pub struct DeleteByKey {
    /// Which table to delete from
    pub table: String,

    /// The row's `id` value
    pub key: Value,
}

impl From<DeleteByKey> for Operation {
    fn from(value: DeleteByKey) -> Self {
        Self::DeleteByKey(value)
    }
}
