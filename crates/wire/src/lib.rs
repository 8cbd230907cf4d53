//! Wire/boundary support for the consent record file panel.
//!
//! This crate provides **wire models** and **translation helpers** for the file service that
//! stores uploaded consent documents:
//! - the paginated upload listing returned by the service (JSON)
//! - the query parameters used to request one page of that listing
//!
//! This crate focuses on:
//! - serialisation/deserialisation
//! - translation between domain-level carriers and wire structs
//!
//! It carries no HTTP transport; hosts own the request/response cycle and hand the body text to
//! [`FileUploads::parse_page`].

pub mod file_upload;
pub mod upload_query;

// Re-export facades
pub use file_upload::FileUploads;

// Re-export public domain-level types
pub use file_upload::{FilePage, FileRecord, Uploader};
pub use upload_query::UploadListQuery;

/// Errors returned by the `consent-wire` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`WireError`].
pub type WireResult<T> = Result<T, WireError>;
