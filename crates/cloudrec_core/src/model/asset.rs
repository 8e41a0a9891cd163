//! Asset (binary attachment) descriptor.
//!
//! # Responsibility
//! - Describe an attachment either as local bytes awaiting upload or as a
//!   server-resolved url.
//!
//! # Invariants
//! - An asset is pending exactly when it has no url.
//! - This crate never uploads; `resolve` is the hook the upload collaborator
//!   uses once the server assigns a url.

use serde::{Deserialize, Serialize};

const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Binary attachment referenced from a record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Display/file name, e.g. `hello.txt`.
    pub name: String,
    /// MIME type sent as `$content_type`.
    pub mime_type: String,
    /// Local bytes. Empty for assets resolved from the server.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<u8>,
    /// Server-assigned url; `None` while pending upload.
    #[serde(default)]
    pub url: Option<String>,
}

impl Asset {
    /// Starts building a local (pending) asset.
    pub fn builder(name: impl Into<String>) -> AssetBuilder {
        AssetBuilder::new(name)
    }

    /// Creates an asset that already has a server url.
    pub fn resolved(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data: Vec::new(),
            url: Some(url.into()),
        }
    }

    /// Returns whether the asset still needs uploading.
    pub fn is_pending(&self) -> bool {
        self.url.is_none()
    }

    /// Marks the asset as uploaded under `url`.
    ///
    /// Local bytes are dropped since the server copy is now authoritative.
    pub fn resolve(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
        self.data = Vec::new();
    }

    /// Size of the local payload in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Builder for locally constructed assets.
#[derive(Debug, Clone)]
pub struct AssetBuilder {
    name: String,
    mime_type: Option<String>,
    data: Vec<u8>,
}

impl AssetBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            data: Vec::new(),
        }
    }

    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = data.into();
        self
    }

    /// Builds a pending asset. Missing MIME type falls back to
    /// `application/octet-stream`.
    pub fn build(self) -> Asset {
        Asset {
            name: self.name,
            mime_type: self
                .mime_type
                .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
            data: self.data,
            url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Asset;

    #[test]
    fn built_asset_is_pending() {
        let asset = Asset::builder("hello.txt")
            .mime_type("text/plain")
            .data("hello world".as_bytes())
            .build();

        assert!(asset.is_pending());
        assert_eq!(asset.mime_type, "text/plain");
        assert_eq!(asset.size(), 11);
    }

    #[test]
    fn builder_defaults_mime_type() {
        let asset = Asset::builder("blob").build();
        assert_eq!(asset.mime_type, "application/octet-stream");
    }

    #[test]
    fn resolve_clears_pending_state_and_local_bytes() {
        let mut asset = Asset::builder("hello.txt").data(vec![1, 2, 3]).build();
        asset.resolve("https://cdn.example/hello.txt");

        assert!(!asset.is_pending());
        assert_eq!(asset.size(), 0);
        assert_eq!(asset.url.as_deref(), Some("https://cdn.example/hello.txt"));
    }
}
