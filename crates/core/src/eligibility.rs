//! Per-file action eligibility.
//!
//! Each file shown on a panel offers up to two actions:
//! - preview, only for files that are not archived
//! - archive (active files) or inspect (archived files)
//!
//! Archived files can always be inspected. Active files can be archived by their uploader or by
//! a district/state administrator.

use crate::records::FileRecord;
use crate::viewer::Viewer;
use serde::Serialize;

/// What the archive/inspect button does for a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionIntent {
    /// Archive an active file.
    Archive,
    /// Show details of an archived file.
    Inspect,
}

impl ActionIntent {
    pub fn for_file(file: &FileRecord) -> Self {
        if file.is_archived {
            ActionIntent::Inspect
        } else {
            ActionIntent::Archive
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActionIntent::Archive => "Archive",
            ActionIntent::Inspect => "More Info",
        }
    }

    pub fn variant(self) -> ButtonVariant {
        match self {
            ActionIntent::Archive => ButtonVariant::Secondary,
            ActionIntent::Inspect => ButtonVariant::Primary,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

/// Actions offered for one file to one viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FileActions {
    pub can_preview: bool,
    /// `None` when the archive/inspect button is not offered.
    pub archive_action: Option<ActionIntent>,
}

impl FileActions {
    /// Evaluate the actions `viewer` is offered for `file`.
    pub fn evaluate(file: &FileRecord, viewer: &Viewer) -> Self {
        Self {
            can_preview: can_preview(file),
            archive_action: can_archive_or_inspect(file, viewer)
                .then(|| ActionIntent::for_file(file)),
        }
    }

    pub fn can_archive_or_inspect(&self) -> bool {
        self.archive_action.is_some()
    }
}

/// Archived files are inspected through "More Info" instead of a live preview.
pub fn can_preview(file: &FileRecord) -> bool {
    !file.is_archived
}

pub fn can_archive_or_inspect(file: &FileRecord, viewer: &Viewer) -> bool {
    file.is_archived || is_uploader(file, viewer) || viewer.role.is_elevated()
}

fn is_uploader(file: &FileRecord, viewer: &Viewer) -> bool {
    file.uploaded_by
        .as_ref()
        .is_some_and(|u| u.username == viewer.username)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{active_file, archived_file};
    use crate::viewer::Role;

    const ALL_ROLES: &[Role] = &[
        Role::Nurse,
        Role::Doctor,
        Role::Volunteer,
        Role::DistrictAdmin,
        Role::StateAdmin,
        Role::Other,
    ];

    #[test]
    fn preview_depends_only_on_archive_state() {
        for role in ALL_ROLES {
            for username in ["alice", "bob"] {
                let viewer = Viewer::new(username, *role);
                assert!(FileActions::evaluate(&active_file("f1", "alice"), &viewer).can_preview);
                assert!(!FileActions::evaluate(&archived_file("f2", "alice"), &viewer).can_preview);
            }
        }
    }

    #[test]
    fn archived_files_can_always_be_inspected() {
        for role in ALL_ROLES {
            let viewer = Viewer::new("mallory", *role);
            let actions = FileActions::evaluate(&archived_file("f2", "alice"), &viewer);
            assert_eq!(actions.archive_action, Some(ActionIntent::Inspect));
        }
    }

    #[test]
    fn other_users_active_file_needs_elevated_role() {
        let file = active_file("f1", "alice");

        let nurse = Viewer::new("bob", Role::Nurse);
        assert!(!can_archive_or_inspect(&file, &nurse));
        assert_eq!(FileActions::evaluate(&file, &nurse).archive_action, None);

        let district_admin = Viewer::new("bob", Role::DistrictAdmin);
        assert!(can_archive_or_inspect(&file, &district_admin));

        let state_admin = Viewer::new("bob", Role::StateAdmin);
        assert_eq!(
            FileActions::evaluate(&file, &state_admin).archive_action,
            Some(ActionIntent::Archive)
        );
    }

    #[test]
    fn uploader_can_archive_own_file() {
        let viewer = Viewer::new("alice", Role::Volunteer);
        let actions = FileActions::evaluate(&active_file("f1", "alice"), &viewer);
        assert!(actions.can_archive_or_inspect());
        assert_eq!(actions.archive_action, Some(ActionIntent::Archive));
    }

    #[test]
    fn file_without_uploader_is_not_owned_by_anyone() {
        let mut file = active_file("f1", "alice");
        file.uploaded_by = None;

        assert!(!can_archive_or_inspect(&file, &Viewer::new("alice", Role::Doctor)));
        assert!(can_archive_or_inspect(&file, &Viewer::new("alice", Role::StateAdmin)));
    }

    #[test]
    fn intent_controls_label_and_variant() {
        assert_eq!(ActionIntent::Archive.label(), "Archive");
        assert_eq!(ActionIntent::Archive.variant(), ButtonVariant::Secondary);
        assert_eq!(ActionIntent::Inspect.label(), "More Info");
        assert_eq!(ActionIntent::Inspect.variant(), ButtonVariant::Primary);
    }
}
