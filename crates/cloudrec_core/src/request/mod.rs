//! Request construction and local validation.
//!
//! # Responsibility
//! - Define the action + data envelope every remote call is built from.
//! - Reject invalid requests locally, before any transport sees them.
//!
//! # Invariants
//! - `validate()` is pure: no I/O, no mutation, same verdict on same input.
//! - `payload()` never returns an envelope for a request that fails
//!   validation.

pub mod record_save;

use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Envelope key carrying the action name.
pub const KEY_ACTION: &str = "action";

pub type RequestResult<T> = Result<T, RequestError>;

/// Why a request was rejected locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequestReason {
    /// Save request without any record.
    EmptyRecords,
    /// A record field holds an asset that has not been uploaded yet.
    PendingAsset {
        /// `"<type>/<id>"` of the offending record.
        record: String,
        /// Field path, e.g. `attachment` or `gallery[1].cover`.
        field: String,
    },
}

impl Display for InvalidRequestReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRecords => write!(f, "no records to save"),
            Self::PendingAsset { record, field } => write!(
                f,
                "record `{record}` field `{field}` holds an asset pending upload"
            ),
        }
    }
}

/// Local request errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    InvalidRequest(InvalidRequestReason),
}

impl RequestError {
    pub fn reason(&self) -> &InvalidRequestReason {
        match self {
            Self::InvalidRequest(reason) => reason,
        }
    }
}

impl Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest(reason) => write!(f, "invalid request: {reason}"),
        }
    }
}

impl Error for RequestError {}

impl From<InvalidRequestReason> for RequestError {
    fn from(value: InvalidRequestReason) -> Self {
        Self::InvalidRequest(value)
    }
}

/// One remote call: an action name plus its data map.
pub trait Request {
    /// Remote action name, e.g. `record:save`.
    fn action(&self) -> &'static str;

    /// Data map as it would be sent right now.
    fn data(&self) -> Map<String, Value>;

    /// Checks request invariants without side effects.
    fn validate(&self) -> RequestResult<()>;

    /// Validates and returns the full envelope: `action` plus `data()`.
    fn payload(&self) -> RequestResult<Map<String, Value>> {
        self.validate()?;
        let mut envelope = self.data();
        envelope.insert(
            KEY_ACTION.to_string(),
            Value::String(self.action().to_string()),
        );
        Ok(envelope)
    }
}
