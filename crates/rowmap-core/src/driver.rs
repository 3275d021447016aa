pub mod operation;
pub use operation::Operation;

mod response;
pub use response::{Response, Rows};

use crate::{async_trait, Result};

use std::fmt::Debug;

/// The backend collaborator: an atomic single-statement request/response
/// primitive per table.
///
/// Drivers own connection management, cancellation, and retry policy; the
/// mapping layer issues exactly one operation per dispatch and propagates
/// driver failures verbatim.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a backend operation.
    async fn exec(&self, op: Operation) -> Result<Response>;
}
