//! Test doubles shared by the unit tests in this crate.

use crate::actions::{ArchiveOptions, Archiver, Previewer, RecordDeleter};
use crate::query::{FileFetcher, FilesFoundListener};
use crate::records::{ConsentRecord, FilePage, FileRecord, Uploader};
use crate::{ConsentError, ConsentResult};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use consent_wire::UploadListQuery;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn file(id: &str, is_archived: bool, uploader: &str) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        name: format!("{id}-scan"),
        extension: ".pdf".to_string(),
        created_date: Utc
            .with_ymd_and_hms(2024, 5, 1, 16, 5, 0)
            .single()
            .expect("valid timestamp"),
        is_archived,
        uploaded_by: Some(Uploader::new(uploader)),
        archive_reason: None,
        archived_datetime: None,
        archived_by: None,
    }
}

pub fn active_file(id: &str, uploader: &str) -> FileRecord {
    file(id, false, uploader)
}

pub fn archived_file(id: &str, uploader: &str) -> FileRecord {
    file(id, true, uploader)
}

#[derive(Default)]
struct MockState {
    pages: HashMap<(String, bool), Vec<FileRecord>>,
    failing: HashSet<(String, bool)>,
    requests: Vec<UploadListQuery>,
}

/// Listing service double keyed by `(associating_id, is_archived)`.
///
/// Unconfigured listings return an empty page.
#[derive(Clone, Default)]
pub struct MockFileFetcher {
    state: Arc<Mutex<MockState>>,
}

impl MockFileFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_page(&self, associating_id: &str, is_archived: bool, files: Vec<FileRecord>) {
        self.state
            .lock()
            .unwrap()
            .pages
            .insert((associating_id.to_string(), is_archived), files);
    }

    pub fn fail_for(&self, associating_id: &str, is_archived: bool) {
        self.state
            .lock()
            .unwrap()
            .failing
            .insert((associating_id.to_string(), is_archived));
    }

    pub fn requests(&self) -> Vec<UploadListQuery> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Number of requests made for the archived (`true`) or active (`false`) listing.
    pub fn request_count(&self, is_archived: bool) -> usize {
        self.state
            .lock()
            .unwrap()
            .requests
            .iter()
            .filter(|q| q.is_archived == is_archived)
            .count()
    }
}

#[async_trait]
impl FileFetcher for MockFileFetcher {
    async fn fetch_page(&self, query: &UploadListQuery) -> ConsentResult<FilePage> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(query.clone());

        let key = (query.associating_id.clone(), query.is_archived);
        if state.failing.contains(&key) {
            return Err(ConsentError::Fetch("service unavailable".into()));
        }

        let files = state.pages.get(&key).cloned().unwrap_or_default();
        Ok(FilePage::from_results(files))
    }
}

#[derive(Default)]
pub struct RecordingListener {
    calls: AtomicUsize,
}

impl RecordingListener {
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FilesFoundListener for RecordingListener {
    fn files_found(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Records every call made to the action handlers.
#[derive(Default)]
pub struct RecordingActions {
    pub previews: Mutex<Vec<(String, String)>>,
    pub archives: Mutex<Vec<(String, String, Option<ArchiveOptions>)>>,
    pub deletes: Mutex<Vec<String>>,
}

impl Previewer for RecordingActions {
    fn preview_file(&self, file: &FileRecord, consent_record_id: &str) {
        self.previews
            .lock()
            .unwrap()
            .push((file.id.clone(), consent_record_id.to_string()));
    }
}

impl Archiver for RecordingActions {
    fn archive_file(
        &self,
        file: &FileRecord,
        consent_record_id: &str,
        options: Option<&ArchiveOptions>,
    ) {
        self.archives.lock().unwrap().push((
            file.id.clone(),
            consent_record_id.to_string(),
            options.cloned(),
        ));
    }
}

impl RecordDeleter for RecordingActions {
    fn on_delete(&self, record: &ConsentRecord) {
        self.deletes.lock().unwrap().push(record.id.clone());
    }
}
