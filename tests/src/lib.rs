mod recording_driver;
pub use recording_driver::{OpsLog, RecordingDriver};

pub use rowmap::{
    driver::operation::{Filter, Query},
    driver::Operation,
    schema::{ColumnCase, NameResolver},
    Intent, Mapper, Outcome, Record, RecordId, RelationRef, Row, Schema, Value,
};
pub use rowmap_driver_memory::MemoryDriver;

use std::sync::Arc;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A blog-shaped schema: posts belong to an author and have many
/// comments; comments point back at their post.
pub fn blog_schema() -> Schema {
    blog_builder().build()
}

/// The blog schema with access control enabled globally.
pub fn secured_blog_schema() -> Schema {
    blog_builder().access_control(true).build()
}

fn blog_builder() -> rowmap::schema::Builder {
    Schema::builder()
        .model("post", |m| {
            m.belongs_to("author", "author").has_many("comments", "comment");
        })
        .model("author", |_| {})
        .model("comment", |m| {
            m.belongs_to("post", "post");
        })
}

/// A mapper over a fresh recording memory driver. Returns handles to the
/// underlying store (for seeding and snapshots) and the operation log.
pub fn mapper_with(schema: Schema) -> (Mapper, Arc<MemoryDriver>, OpsLog) {
    mapper_with_subject(schema, None)
}

pub fn mapper_with_subject(
    schema: Schema,
    subject: Option<&str>,
) -> (Mapper, Arc<MemoryDriver>, OpsLog) {
    init_logging();

    let driver = RecordingDriver::new();
    let store = driver.store();
    let ops = driver.ops();

    let subject = subject.map(Value::from);
    let mapper = Mapper::builder()
        .schema(schema)
        .driver(driver)
        .subject(move || subject.clone())
        .build()
        .unwrap();

    (mapper, store, ops)
}

pub fn new_post(title: &str) -> Record {
    let mut record = Record::new("post");
    record.set_attribute("title", title);
    record
}

pub fn seed_row(store: &MemoryDriver, table: &str, pairs: &[(&str, &str)]) {
    let mut row = Row::new();
    for (column, value) in pairs {
        row.insert(column.to_string(), *value);
    }
    store.seed(table, row);
}

/// Tables touched by the recorded operations, in order.
pub fn recorded_tables(ops: &OpsLog) -> Vec<String> {
    ops.lock()
        .unwrap()
        .iter()
        .map(|op| op.table().to_string())
        .collect()
}
