//! Batch record save request.
//!
//! # Responsibility
//! - Serialize a batch of records plus the target partition into the
//!   `record:save` data map.
//! - Enforce save-time invariants before submission.
//!
//! # Invariants
//! - Record order in the payload equals construction order.
//! - `atomic` is present in `data()` iff the flag is currently `true`.
//! - The record set is fixed after construction.

use crate::model::database::DatabaseHandle;
use crate::model::record::Record;
use crate::request::{InvalidRequestReason, Request, RequestResult};
use crate::serializer::record::serialize_record;
use log::debug;
use serde_json::{Map, Value};

pub const RECORD_SAVE_ACTION: &str = "record:save";

pub const KEY_DATABASE_ID: &str = "database_id";
pub const KEY_RECORDS: &str = "records";
pub const KEY_ATOMIC: &str = "atomic";

/// Save request for one or more records.
///
/// Not synchronized: share across threads only behind external locking,
/// since `set_atomic` and `data` must not race.
#[derive(Debug, Clone)]
pub struct RecordSaveRequest {
    records: Vec<Record>,
    /// Serialized records and partition id; rebuilt only by `update_records`.
    base: Map<String, Value>,
    atomic: bool,
}

impl RecordSaveRequest {
    /// Builds the request payload eagerly. Never fails; an empty batch is
    /// rejected only by `validate()`.
    pub fn new<D>(records: Vec<Record>, database: &D) -> Self
    where
        D: DatabaseHandle + ?Sized,
    {
        let mut base = Map::new();
        base.insert(
            KEY_DATABASE_ID.to_string(),
            Value::String(database.partition_id().to_string()),
        );
        base.insert(KEY_RECORDS.to_string(), serialize_records(&records));

        Self {
            records,
            base,
            atomic: true,
        }
    }

    /// Applies `update` to every record in order, then re-serializes them.
    ///
    /// Records cannot be added or removed; identity fields have no setters.
    /// Used to resolve uploaded assets after a failed `validate()`.
    pub fn update_records<F>(&mut self, update: F)
    where
        F: FnMut(&mut Record),
    {
        self.records.iter_mut().for_each(update);
        self.base
            .insert(KEY_RECORDS.to_string(), serialize_records(&self.records));
    }

    /// Requests all-or-nothing (`true`) or best-effort (`false`) saving.
    pub fn set_atomic(&mut self, atomic: bool) {
        self.atomic = atomic;
    }

    pub fn is_atomic(&self) -> bool {
        self.atomic
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Partition id captured at construction.
    pub fn database_id(&self) -> Option<&str> {
        self.base.get(KEY_DATABASE_ID).and_then(Value::as_str)
    }
}

fn serialize_records(records: &[Record]) -> Value {
    Value::Array(
        records
            .iter()
            .map(|record| Value::Object(serialize_record(record)))
            .collect(),
    )
}

impl Request for RecordSaveRequest {
    fn action(&self) -> &'static str {
        RECORD_SAVE_ACTION
    }

    fn data(&self) -> Map<String, Value> {
        let mut data = self.base.clone();
        if self.atomic {
            data.insert(KEY_ATOMIC.to_string(), Value::Bool(true));
        }
        data
    }

    /// Fails fast on the first violation: empty batch, then pending assets in
    /// record order. Mixed record types are accepted.
    fn validate(&self) -> RequestResult<()> {
        if self.records.is_empty() {
            debug!("event=record_save_validate module=request status=error reason=empty_records");
            return Err(InvalidRequestReason::EmptyRecords.into());
        }

        for record in &self.records {
            if let Some(field) = record.first_pending_asset() {
                debug!(
                    "event=record_save_validate module=request status=error reason=pending_asset record_type={}",
                    record.record_type()
                );
                return Err(InvalidRequestReason::PendingAsset {
                    record: record.reference(),
                    field,
                }
                .into());
            }
        }

        debug!(
            "event=record_save_validate module=request status=ok records={} atomic={}",
            self.records.len(),
            self.atomic
        );
        Ok(())
    }
}
