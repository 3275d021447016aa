mod delete_by_key;
pub use delete_by_key::DeleteByKey;

mod insert;
pub use insert::Insert;

mod query;
pub use query::{Embed, Filter, Query};

mod update_by_key;
pub use update_by_key::UpdateByKey;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Look up rows by column-equality filters
    Query(Query),

    /// Insert a new row, returning it with backend-populated columns
    Insert(Insert),

    /// Update a row identified by its key, returning the updated row
    UpdateByKey(UpdateByKey),

    /// Delete a row identified by its key
    DeleteByKey(DeleteByKey),
}

impl Operation {
    /// The table this operation targets.
    pub fn table(&self) -> &str {
        match self {
            Operation::Query(op) => &op.table,
            Operation::Insert(op) => &op.table,
            Operation::UpdateByKey(op) => &op.table,
            Operation::DeleteByKey(op) => &op.table,
        }
    }
}
