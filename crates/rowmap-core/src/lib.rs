pub mod driver;
pub use driver::Driver;

mod error;
pub use error::Error;

mod record;
pub use record::{Record, RecordId, RelationRef};

pub mod schema;
pub use schema::Schema;

mod value;
pub use value::{Row, Value};

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
