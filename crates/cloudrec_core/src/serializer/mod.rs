//! Wire serialization for client-side model types.
//!
//! # Responsibility
//! - Map records and field values to the JSON shape the remote API expects.
//! - Stay pure: no validation, no logging, no I/O.

pub mod record;
