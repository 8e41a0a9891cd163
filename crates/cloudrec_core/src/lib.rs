//! Client core for saving records to a remote cloud database.
//! Builds request payloads and rejects invalid saves before they leave the
//! process.

pub mod logging;
pub mod model;
pub mod request;
pub mod serializer;
pub mod transport;

pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig,
    LoggingError,
};
pub use model::asset::{Asset, AssetBuilder};
pub use model::database::{Database, DatabaseHandle, PRIVATE_DATABASE_ID, PUBLIC_DATABASE_ID};
pub use model::record::{Record, RecordError};
pub use model::value::RecordValue;
pub use request::record_save::RecordSaveRequest;
pub use request::{InvalidRequestReason, Request, RequestError, RequestResult};
pub use serializer::record::{serialize_record, serialize_value};
pub use transport::{submit, SubmitError, Transport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
