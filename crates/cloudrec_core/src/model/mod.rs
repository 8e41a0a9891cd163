//! Client-side domain model for records headed to a remote database.
//!
//! # Responsibility
//! - Define records, their field values and attachments.
//! - Define the database handle a request targets.
//!
//! # Invariants
//! - Every record is identified by a stable `"<type>/<id>"` reference.
//! - Asset pending state is owned by the asset itself, never cached on the
//!   record.

pub mod asset;
pub mod database;
pub mod record;
pub mod value;
