//! Merging the two listings into the list of files a panel shows.
//!
//! - Active view shows exactly the active listing.
//! - Archive view shows the archived listing, followed by the active listing when the consent
//!   record itself has been deleted (deleting a record archives all of its files, even those
//!   not yet individually marked archived).
//!
//! A panel with nothing to show is hidden rather than rendering an empty state.

use crate::query::QueryKind;
use crate::records::{FilePage, FileRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which subset of files a panel shows. Owned by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Active,
    Archive,
}

impl ViewMode {
    pub fn from_show_archive(show_archive: bool) -> Self {
        if show_archive {
            ViewMode::Archive
        } else {
            ViewMode::Active
        }
    }

    pub fn shows_archive(self) -> bool {
        matches!(self, ViewMode::Archive)
    }

    /// The listing this view keeps fresh.
    pub fn query_kind(self) -> QueryKind {
        match self {
            ViewMode::Active => QueryKind::Active,
            ViewMode::Archive => QueryKind::Archived,
        }
    }
}

/// Files selected for display, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayList<'a> {
    files: Vec<&'a FileRecord>,
}

impl<'a> DisplayList<'a> {
    /// Merge the listings for `mode`.
    ///
    /// A file id already taken from an earlier listing is skipped, so a file archived between
    /// two responses is shown once, in its archived form.
    pub fn merge(
        mode: ViewMode,
        record_deleted: bool,
        active: Option<&'a FilePage>,
        archived: Option<&'a FilePage>,
    ) -> Self {
        let active = active.map(|p| p.results.as_slice()).unwrap_or_default();
        let archived = archived.map(|p| p.results.as_slice()).unwrap_or_default();

        let sources: Vec<&'a [FileRecord]> = match mode {
            ViewMode::Active => vec![active],
            ViewMode::Archive if record_deleted => vec![archived, active],
            ViewMode::Archive => vec![archived],
        };

        let mut seen = HashSet::new();
        let mut files = Vec::new();
        for file in sources.into_iter().flatten() {
            if seen.insert(file.id.as_str()) {
                files.push(file);
            }
        }

        Self { files }
    }

    pub fn files(&self) -> &[&'a FileRecord] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// An empty list hides the whole panel.
    pub fn is_hidden(&self) -> bool {
        self.is_empty()
    }

    pub fn find(&self, file_id: &str) -> Option<&'a FileRecord> {
        self.files.iter().copied().find(|f| f.id == file_id)
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.files.iter().map(|f| f.id.as_str()).collect()
    }
}
