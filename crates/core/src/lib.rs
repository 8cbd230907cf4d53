//! # Consent Core
//!
//! File visibility and query synchronisation for consent record panels.
//!
//! A consent record panel lists the files uploaded against one patient consent record. This
//! crate contains the logic behind it:
//! - two listings per record (active and archived files) and their fetch state
//! - merging the listings into the list of files to show, per view mode and record state
//! - refetching the right listing when the caller's view mode or refresh signal changes
//! - deciding which actions (preview, archive/inspect) a viewer is offered per file
//!
//! **No transport or UI concerns**: fetching, previewing, archiving and deleting are supplied by
//! the host through the traits in [`query`] and [`actions`]. Wire formats live in
//! `consent-wire`.

pub mod actions;
pub mod choices;
pub mod config;
pub mod constants;
pub mod eligibility;
pub mod error;
pub mod panel;
pub mod query;
pub mod records;
pub mod resync;
pub mod view;
pub mod viewer;
pub mod visibility;

#[cfg(test)]
mod test_support;

pub use actions::{ArchiveOptions, Archiver, Previewer, RecordDeleter};
pub use config::CoreConfig;
pub use eligibility::{ActionIntent, ButtonVariant, FileActions};
pub use error::{ConsentError, ConsentResult};
pub use panel::{ConsentRecordPanel, Mounted, PanelHandlers, Unmounted};
pub use query::{FetchTicket, FileFetcher, FileQuery, FilesFoundListener, QueryKind};
pub use records::{ConsentRecord, FilePage, FileRecord, Uploader};
pub use resync::{RefreshToken, ResyncController, ResyncInputs};
pub use view::{FileRow, PanelHeader, PanelView, RowTone};
pub use viewer::{Role, Viewer};
pub use visibility::{DisplayList, ViewMode};
