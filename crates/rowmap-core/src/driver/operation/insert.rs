use super::Operation;
use crate::Row;

#[derive(Debug, Clone)]
pub struct Insert {
    /// Which table to insert into
    pub table: String,

    /// The serialized row. Identity and timestamp columns are
    /// backend-managed and absent here.
    pub row: Row,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
