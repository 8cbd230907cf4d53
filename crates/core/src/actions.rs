//! Side-effect handlers the panel forwards to.
//!
//! Previewing, archiving and deleting are owned by the host. The panel only decides whether an
//! action is offered and hands over the file together with the consent record id.
//! Authorisation is enforced by the handlers; eligibility here is advisory.

use crate::records::{ConsentRecord, FileRecord};

/// Extra context for an archive request that should skip the confirmation prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveOptions {
    pub reason: String,
}

impl ArchiveOptions {
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Opens a live preview of an active file.
pub trait Previewer: Send + Sync {
    fn preview_file(&self, file: &FileRecord, consent_record_id: &str);
}

/// Archives an active file, or shows details of an archived one.
pub trait Archiver: Send + Sync {
    fn archive_file(
        &self,
        file: &FileRecord,
        consent_record_id: &str,
        options: Option<&ArchiveOptions>,
    );
}

/// Starts the host's deletion workflow for a whole consent record.
pub trait RecordDeleter: Send + Sync {
    fn on_delete(&self, record: &ConsentRecord);
}
