//! Query parameters for one page of the file listing.

use crate::{WireError, WireResult};
use serde::Serialize;

/// Parameters that scope a listing request to one owner and archive state.
///
/// Rendered by [`UploadListQuery::to_query_pairs`] in the order the file service documents
/// them, so hosts can append them to the listing URL as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UploadListQuery {
    /// File-type tag that classifies the uploads (e.g. `CONSENT_RECORD`).
    pub file_type: String,

    /// Identifier of the entity the files are attached to.
    pub associating_id: String,

    pub is_archived: bool,
    pub limit: u32,
    pub offset: u32,
}

impl UploadListQuery {
    /// Create a new query.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::InvalidInput`] if `file_type` or `associating_id` is blank, or if
    /// `limit` is zero.
    pub fn new(
        file_type: impl Into<String>,
        associating_id: impl Into<String>,
        is_archived: bool,
        limit: u32,
        offset: u32,
    ) -> WireResult<Self> {
        let file_type = file_type.into();
        let associating_id = associating_id.into();

        if file_type.trim().is_empty() {
            return Err(WireError::InvalidInput("file_type cannot be empty".into()));
        }
        if associating_id.trim().is_empty() {
            return Err(WireError::InvalidInput(
                "associating_id cannot be empty".into(),
            ));
        }
        if limit == 0 {
            return Err(WireError::InvalidInput("limit must be positive".into()));
        }

        Ok(Self {
            file_type,
            associating_id,
            is_archived,
            limit,
            offset,
        })
    }

    /// Render the query as ordered key/value pairs.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("file_type", self.file_type.clone()),
            ("associating_id", self.associating_id.clone()),
            ("is_archived", self.is_archived.to_string()),
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ]
    }
}
