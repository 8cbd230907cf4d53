//! Consent records and the files attached to them.
//!
//! [`ConsentRecord`] is owned by the caller and only read here. File records come from the
//! listing service through `consent-wire`.

use crate::{ConsentError, ConsentResult};
use serde::{Deserialize, Serialize};

pub use consent_wire::{FilePage, FileRecord, Uploader};

/// A patient's recorded consent, optionally soft-deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentRecord {
    /// Identifier that file uploads are associated with.
    pub id: String,

    /// Consent type code, see [`crate::choices::CONSENT_TYPE_CHOICES`].
    #[serde(rename = "type")]
    pub consent_type: u32,

    /// Patient code status code, see [`crate::choices::CONSENT_PATIENT_CODE_STATUS_CHOICES`].
    #[serde(default)]
    pub patient_code_status: Option<u32>,

    /// Set when the record has been archived as a whole.
    #[serde(default)]
    pub deleted: bool,
}

impl ConsentRecord {
    /// Creates a live (not deleted) consent record.
    ///
    /// # Errors
    ///
    /// Returns [`ConsentError::InvalidInput`] if `id` is blank.
    pub fn new(id: impl Into<String>, consent_type: u32) -> ConsentResult<Self> {
        let id = id.into().trim().to_string();
        if id.is_empty() {
            return Err(ConsentError::InvalidInput(
                "consent record id cannot be empty".into(),
            ));
        }
        Ok(Self {
            id,
            consent_type,
            patient_code_status: None,
            deleted: false,
        })
    }

    pub fn with_patient_code_status(mut self, code: u32) -> Self {
        self.patient_code_status = Some(code);
        self
    }

    pub fn with_deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }
}
