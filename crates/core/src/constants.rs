//! Constants used throughout the consent core crate.

/// File-type tag that scopes listing queries to consent uploads.
pub const CONSENT_RECORD_FILE_TYPE: &str = "CONSENT_RECORD";

/// Number of files requested per listing page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Upper bound accepted for a configured page size.
pub const MAX_PAGE_SIZE: u32 = 1_000;

/// Only the first page of each listing is requested.
pub const FIRST_PAGE_OFFSET: u32 = 0;

/// `chrono` format for the created-date label on each row (e.g. `01 May 2024, 04:50 AM`).
pub const CREATED_DATE_FORMAT: &str = "%d %b %Y, %I:%M %p";

/// Suffix appended to the name of an archived file.
pub const ARCHIVED_SUFFIX: &str = " (Archived)";
