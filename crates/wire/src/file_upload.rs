//! File upload listing wire models and translation helpers.
//!
//! Responsibilities:
//! - Define public domain-level types for uploaded files and listing pages
//! - Define the wire model of the file service's paginated listing
//! - Provide translation helpers between the two
//!
//! Notes:
//! - The file service returns more fields than are modelled here (signed URLs, upload
//!   completion, uploader contact details). Unknown keys are ignored rather than rejected.
//! - Only the first page is ever requested by the panel, so `next`/`previous` are carried
//!   through for hosts that want to detect truncation.

use crate::{WireError, WireResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Public domain-level types
// ============================================================================

/// An uploaded file as seen by the consent panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    /// Identifier assigned by the file service.
    pub id: String,

    /// File name without extension.
    pub name: String,

    /// Extension including the leading dot (e.g. `.pdf`), possibly empty.
    pub extension: String,

    /// When the upload was created.
    pub created_date: DateTime<Utc>,

    /// Whether the file has been archived.
    pub is_archived: bool,

    /// The user who uploaded the file, when the service reports one.
    pub uploaded_by: Option<Uploader>,

    /// Reason given when the file was archived.
    pub archive_reason: Option<String>,

    /// When the file was archived.
    pub archived_datetime: Option<DateTime<Utc>>,

    /// The user who archived the file.
    pub archived_by: Option<Uploader>,
}

/// Minimal identity of a user attached to a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Uploader {
    pub username: String,
}

impl Uploader {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// One page of the file listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilePage {
    /// Total number of matching files across all pages, if reported.
    pub count: Option<u64>,

    /// URL of the next page, if any.
    pub next: Option<String>,

    /// URL of the previous page, if any.
    pub previous: Option<String>,

    /// Files on this page, in service order.
    pub results: Vec<FileRecord>,
}

impl FilePage {
    /// Build a page holding exactly `results`.
    pub fn from_results(results: Vec<FileRecord>) -> Self {
        Self {
            count: Some(results.len() as u64),
            next: None,
            previous: None,
            results,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

// ============================================================================
// Public FileUploads operations
// ============================================================================

/// File listing operations.
///
/// This is a zero-sized type used for namespacing listing-related operations.
/// All methods are associated functions.
pub struct FileUploads;

impl FileUploads {
    /// Parse one page of the file listing from JSON text.
    ///
    /// This uses `serde_path_to_error` to surface the path (e.g. `results[0].created_date`)
    /// of the failing field when the JSON does not match the wire schema.
    ///
    /// # Errors
    ///
    /// Returns [`WireError`] if:
    /// - the JSON does not represent a listing page,
    /// - any field has an unexpected type,
    /// - a file has an empty `id`.
    pub fn parse_page(json_text: &str) -> WireResult<FilePage> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);

        let wire = match serde_path_to_error::deserialize::<_, PageWire>(&mut deserializer) {
            Ok(parsed) => parsed,
            Err(err) => {
                let path = err.path().to_string();
                let source = err.into_inner();
                let path = if path.is_empty() || path == "." {
                    "<root>"
                } else {
                    path.as_str()
                };
                return Err(WireError::Translation(format!(
                    "File listing schema mismatch at {path}: {source}"
                )));
            }
        };

        wire_to_domain(wire)
    }

    /// Render a listing page as JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`WireError`] if serialisation fails.
    pub fn render_page(page: &FilePage) -> WireResult<String> {
        let wire = domain_to_wire(page);
        Ok(serde_json::to_string(&wire)?)
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize)]
struct PageWire {
    #[serde(default)]
    count: Option<u64>,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    previous: Option<String>,
    results: Vec<FileUploadWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
struct FileUploadWire {
    id: String,
    name: String,
    #[serde(default)]
    extension: Option<String>,
    created_date: DateTime<Utc>,
    #[serde(default)]
    is_archived: bool,
    #[serde(default)]
    uploaded_by: Option<UserWire>,
    #[serde(default)]
    archive_reason: Option<String>,
    #[serde(default)]
    archived_datetime: Option<DateTime<Utc>>,
    #[serde(default)]
    archived_by: Option<UserWire>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
struct UserWire {
    username: String,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn wire_to_domain(wire: PageWire) -> WireResult<FilePage> {
    let results = wire
        .results
        .into_iter()
        .enumerate()
        .map(|(index, file)| {
            if file.id.trim().is_empty() {
                return Err(WireError::InvalidInput(format!(
                    "results[{index}].id cannot be empty"
                )));
            }
            Ok(FileRecord {
                id: file.id,
                name: file.name,
                extension: file.extension.unwrap_or_default(),
                created_date: file.created_date,
                is_archived: file.is_archived,
                uploaded_by: file.uploaded_by.map(|u| Uploader::new(u.username)),
                archive_reason: file.archive_reason.filter(|r| !r.trim().is_empty()),
                archived_datetime: file.archived_datetime,
                archived_by: file.archived_by.map(|u| Uploader::new(u.username)),
            })
        })
        .collect::<WireResult<Vec<_>>>()?;

    Ok(FilePage {
        count: wire.count,
        next: wire.next,
        previous: wire.previous,
        results,
    })
}

fn domain_to_wire(page: &FilePage) -> PageWire {
    PageWire {
        count: page.count,
        next: page.next.clone(),
        previous: page.previous.clone(),
        results: page
            .results
            .iter()
            .map(|file| FileUploadWire {
                id: file.id.clone(),
                name: file.name.clone(),
                extension: Some(file.extension.clone()),
                created_date: file.created_date,
                is_archived: file.is_archived,
                uploaded_by: file.uploaded_by.as_ref().map(|u| UserWire {
                    username: u.username.clone(),
                }),
                archive_reason: file.archive_reason.clone(),
                archived_datetime: file.archived_datetime,
                archived_by: file.archived_by.as_ref().map(|u| UserWire {
                    username: u.username.clone(),
                }),
            })
            .collect(),
    }
}
