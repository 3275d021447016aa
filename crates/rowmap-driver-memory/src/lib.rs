use rowmap_core::driver::operation::{DeleteByKey, Insert, Query, UpdateByKey};
use rowmap_core::driver::{Operation, Response};
use rowmap_core::{async_trait, Driver, Error, Result, Row, Value};

use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory backend driver.
///
/// Rows live in insertion order per table, ids are assigned from a
/// monotonic counter (rendered as strings), and the `created_at` /
/// `updated_at` columns are stamped from a logical clock on every write,
/// the way a real backend manages them. Intended as the default test
/// backend and as a test double for downstream users.
#[derive(Debug)]
pub struct MemoryDriver {
    store: Mutex<Store>,
}

#[derive(Debug, Default)]
struct Store {
    tables: HashMap<String, Vec<Row>>,
    next_id: u64,
    clock: i64,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store::default()),
        }
    }

    /// Seed a row directly, bypassing id assignment and timestamping.
    pub fn seed(&self, table: impl Into<String>, row: Row) {
        let mut store = self.store.lock().unwrap();
        store.tables.entry(table.into()).or_default().push(row);
    }

    /// Snapshot of a table's rows, for assertions.
    pub fn rows(&self, table: &str) -> Vec<Row> {
        let store = self.store.lock().unwrap();
        store.tables.get(table).cloned().unwrap_or_default()
    }
}

impl Default for MemoryDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Driver for MemoryDriver {
    async fn exec(&self, op: Operation) -> Result<Response> {
        let mut store = self.store.lock().unwrap();
        match op {
            Operation::Query(op) => store.query(op),
            Operation::Insert(op) => store.insert(op),
            Operation::UpdateByKey(op) => store.update_by_key(op),
            Operation::DeleteByKey(op) => store.delete_by_key(op),
        }
    }
}

impl Store {
    fn query(&self, op: Query) -> Result<Response> {
        let rows = self.tables.get(&op.table).cloned().unwrap_or_default();

        let mut matched: Vec<Row> = rows
            .into_iter()
            .filter(|row| {
                op.filters
                    .iter()
                    .all(|filter| row.get(&filter.column) == Some(&filter.value))
            })
            .collect();

        for embed in &op.embed {
            let children = self.tables.get(&embed.table).cloned().unwrap_or_default();
            for row in &mut matched {
                let Some(id) = row.id().cloned() else { continue };
                let embedded: Vec<Value> = children
                    .iter()
                    .filter(|child| child.get(&embed.foreign_key) == Some(&id))
                    .map(|child| Value::Record(child.clone()))
                    .collect();
                row.insert(embed.alias.clone(), Value::List(embedded));
            }
        }

        if op.single {
            return match matched.into_iter().next() {
                Some(row) => Ok(Response::values(vec![row])),
                None => Err(Error::record_not_found(format!("table={}", op.table))),
            };
        }

        Ok(Response::values(matched))
    }

    fn insert(&mut self, op: Insert) -> Result<Response> {
        let mut row = op.row;

        if !row.contains("id") {
            self.next_id += 1;
            row.insert("id", self.next_id.to_string());
        }

        self.clock += 1;
        row.insert("created_at", self.clock);
        row.insert("updated_at", self.clock);

        self.tables.entry(op.table).or_default().push(row.clone());
        Ok(Response::values(vec![row]))
    }

    fn update_by_key(&mut self, op: UpdateByKey) -> Result<Response> {
        self.clock += 1;
        let clock = self.clock;

        let rows = self.tables.entry(op.table.clone()).or_default();
        let Some(row) = rows.iter_mut().find(|row| row.id() == Some(&op.key)) else {
            return Err(Error::record_not_found(format!(
                "table={} key={:?}",
                op.table, op.key
            )));
        };

        for (column, value) in op.assignments {
            row.insert(column, value);
        }
        row.insert("updated_at", clock);

        Ok(Response::values(vec![row.clone()]))
    }

    fn delete_by_key(&mut self, op: DeleteByKey) -> Result<Response> {
        let rows = self.tables.entry(op.table).or_default();
        let before = rows.len();
        rows.retain(|row| row.id() != Some(&op.key));
        Ok(Response::count((before - rows.len()) as u64))
    }
}
