use rowmap::driver::{Operation, Response};
use rowmap::{Driver, Result};
use rowmap_core::async_trait;
use rowmap_driver_memory::MemoryDriver;

use std::sync::{Arc, Mutex};

/// Log of all operations executed through a [`RecordingDriver`], behind
/// `Arc<Mutex>` for access from tests after the driver has been moved
/// into a mapper.
pub type OpsLog = Arc<Mutex<Vec<Operation>>>;

/// A driver wrapper that records every operation before handing it to an
/// in-memory backend.
#[derive(Debug)]
pub struct RecordingDriver {
    inner: Arc<MemoryDriver>,
    ops: OpsLog,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MemoryDriver::new()),
            ops: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the backing store, valid after the driver moves into a
    /// mapper.
    pub fn store(&self) -> Arc<MemoryDriver> {
        self.inner.clone()
    }

    /// Handle to the operation log.
    pub fn ops(&self) -> OpsLog {
        self.ops.clone()
    }
}

impl Default for RecordingDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Driver for RecordingDriver {
    async fn exec(&self, op: Operation) -> Result<Response> {
        self.ops.lock().unwrap().push(op.clone());
        self.inner.exec(op).await
    }
}
