//! Database handle: the partition a request targets.

use crate::model::record::Record;
use crate::request::record_save::RecordSaveRequest;
use serde::{Deserialize, Serialize};

/// Partition id of the shared public database.
pub const PUBLIC_DATABASE_ID: &str = "_public";
/// Partition id of the per-user private database.
pub const PRIVATE_DATABASE_ID: &str = "_private";

/// Anything that can name the target partition of a request.
///
/// Containers and configuration live outside this crate; they only need to
/// expose the partition id.
pub trait DatabaseHandle {
    fn partition_id(&self) -> &str;
}

/// Plain database handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    partition_id: String,
}

impl Database {
    pub fn new(partition_id: impl Into<String>) -> Self {
        Self {
            partition_id: partition_id.into(),
        }
    }

    pub fn public() -> Self {
        Self::new(PUBLIC_DATABASE_ID)
    }

    pub fn private() -> Self {
        Self::new(PRIVATE_DATABASE_ID)
    }

    /// Builds a save request for `records` against this database.
    pub fn save_request(&self, records: Vec<Record>) -> RecordSaveRequest {
        RecordSaveRequest::new(records, self)
    }
}

impl DatabaseHandle for Database {
    fn partition_id(&self) -> &str {
        &self.partition_id
    }
}

impl<T: DatabaseHandle + ?Sized> DatabaseHandle for &T {
    fn partition_id(&self) -> &str {
        (**self).partition_id()
    }
}
