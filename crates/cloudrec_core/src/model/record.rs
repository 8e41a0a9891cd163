//! Record domain model.
//!
//! # Responsibility
//! - Define the typed, identified document that save requests carry.
//! - Guard field names so user data never collides with wire metadata keys.
//!
//! # Invariants
//! - `record_type` matches `^[A-Za-z][A-Za-z0-9_]*$`.
//! - `id` is non-empty, contains no `/`, and never changes after creation.
//! - Field names are non-empty and never start with `_`.

use crate::model::value::RecordValue;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static RECORD_TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("valid record type regex"));

/// Prefix reserved for metadata keys such as `_id` and `_recordType`.
pub const RESERVED_KEY_PREFIX: char = '_';

/// Record construction and mutation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    InvalidType(String),
    InvalidId(String),
    EmptyKey,
    ReservedKey(String),
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidType(value) => write!(f, "record type is invalid: `{value}`"),
            Self::InvalidId(value) => write!(f, "record id is invalid: `{value}`"),
            Self::EmptyKey => write!(f, "record field name must not be empty"),
            Self::ReservedKey(key) => write!(f, "record field name is reserved: `{key}`"),
        }
    }
}

impl Error for RecordError {}

/// Typed document with an open set of named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    record_type: String,
    id: String,
    fields: BTreeMap<String, RecordValue>,
}

impl Record {
    /// Creates an empty record with a generated UUID v4 id.
    pub fn new(record_type: impl Into<String>) -> Result<Self, RecordError> {
        Self::with_id(record_type, Uuid::new_v4().to_string())
    }

    /// Creates an empty record with a caller-provided id.
    ///
    /// Used when the identity already exists on the server.
    pub fn with_id(
        record_type: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Self, RecordError> {
        let record_type = record_type.into();
        if !RECORD_TYPE_RE.is_match(&record_type) {
            return Err(RecordError::InvalidType(record_type));
        }

        let id = id.into();
        if id.trim().is_empty() || id.contains('/') {
            return Err(RecordError::InvalidId(id));
        }

        Ok(Self {
            record_type,
            id,
            fields: BTreeMap::new(),
        })
    }

    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Canonical `"<type>/<id>"` reference, used as the wire `_id`.
    pub fn reference(&self) -> String {
        format!("{}/{}", self.record_type, self.id)
    }

    /// Value pointing at this record, for use in another record's fields.
    pub fn to_reference_value(&self) -> RecordValue {
        RecordValue::Reference(self.reference())
    }

    /// Sets one field, replacing any previous value.
    ///
    /// # Errors
    /// - `EmptyKey` for an empty name.
    /// - `ReservedKey` for names starting with `_`.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<RecordValue>,
    ) -> Result<(), RecordError> {
        let key = key.into();
        if key.is_empty() {
            return Err(RecordError::EmptyKey);
        }
        if key.starts_with(RESERVED_KEY_PREFIX) {
            return Err(RecordError::ReservedKey(key));
        }

        self.fields.insert(key, value.into());
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&RecordValue> {
        self.fields.get(key)
    }

    /// Gives mutable access to a field, e.g. to resolve an asset in place.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut RecordValue> {
        self.fields.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<RecordValue> {
        self.fields.remove(key)
    }

    /// Fields in name order.
    pub fn fields(&self) -> &BTreeMap<String, RecordValue> {
        &self.fields
    }

    /// Returns the field path of the first pending asset, e.g. `attachment`
    /// or `gallery[2]`.
    pub fn first_pending_asset(&self) -> Option<String> {
        self.fields.iter().find_map(|(key, value)| {
            value
                .find_pending_asset()
                .map(|rest| format!("{key}{rest}"))
        })
    }

    pub fn has_pending_assets(&self) -> bool {
        self.first_pending_asset().is_some()
    }
}
