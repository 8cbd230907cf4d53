//! Render-ready description of a panel.
//!
//! The rendering layer draws icons and buttons; this module decides the text, tone and actions
//! it draws them with.

use crate::choices::{consent_type_text, patient_code_status_text};
use crate::constants::{ARCHIVED_SUFFIX, CREATED_DATE_FORMAT};
use crate::eligibility::FileActions;
use crate::records::{ConsentRecord, FileRecord};
use crate::viewer::Viewer;
use crate::visibility::{DisplayList, ViewMode};
use serde::Serialize;

/// Heading of a panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PanelHeader {
    /// Consent type, followed by the patient code status in parentheses when known.
    pub title: String,
    /// Shown when the consent record has been deleted.
    pub archived_badge: bool,
}

impl PanelHeader {
    pub fn for_record(record: &ConsentRecord) -> Self {
        let mut title = consent_type_text(record.consent_type)
            .unwrap_or_default()
            .to_string();

        if let Some(status) = record.patient_code_status.and_then(patient_code_status_text) {
            if !title.is_empty() {
                title.push(' ');
            }
            title.push('(');
            title.push_str(status);
            title.push(')');
        }

        Self {
            title,
            archived_badge: record.deleted,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowTone {
    Plain,
    /// Rows in archive view are greyed out.
    Muted,
}

/// One file row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileRow {
    pub file_id: String,
    pub title: String,
    pub created_label: String,
    pub tone: RowTone,
    pub actions: FileActions,
}

impl FileRow {
    pub fn build(file: &FileRecord, mode: ViewMode, viewer: &Viewer) -> Self {
        let tone = if mode.shows_archive() {
            RowTone::Muted
        } else {
            RowTone::Plain
        };

        Self {
            file_id: file.id.clone(),
            title: row_title(file),
            created_label: created_label(file),
            tone,
            actions: FileActions::evaluate(file, viewer),
        }
    }
}

/// Everything the rendering layer needs for one panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub header: PanelHeader,
    /// No files to show; the panel takes no space.
    pub hidden: bool,
    /// A listing is in flight; a placeholder is drawn instead of rows.
    pub loading: bool,
    /// Empty while loading.
    pub rows: Vec<FileRow>,
    pub delete_offered: bool,
}

impl PanelView {
    pub fn build(
        record: &ConsentRecord,
        mode: ViewMode,
        display: &DisplayList<'_>,
        loading: bool,
        delete_offered: bool,
        viewer: &Viewer,
    ) -> Self {
        let rows = if loading {
            Vec::new()
        } else {
            display
                .files()
                .iter()
                .map(|file| FileRow::build(file, mode, viewer))
                .collect()
        };

        Self {
            header: PanelHeader::for_record(record),
            hidden: display.is_hidden(),
            loading,
            rows,
            delete_offered,
        }
    }
}

/// Name and extension, marked when archived.
pub fn row_title(file: &FileRecord) -> String {
    let mut title = format!("{}{}", file.name, file.extension);
    if file.is_archived {
        title.push_str(ARCHIVED_SUFFIX);
    }
    title
}

/// Creation time in UTC, e.g. `01 May 2024, 04:05 PM`.
pub fn created_label(file: &FileRecord) -> String {
    file.created_date.format(CREATED_DATE_FORMAT).to_string()
}
