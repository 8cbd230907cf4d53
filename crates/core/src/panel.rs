//! Consent Record File Panel.
//!
//! A panel shows the files attached to one consent record and keeps them in step with the
//! caller's view mode and refresh signal.
//!
//! ## Architecture
//!
//! - **Type-state pattern**: a panel starts [`Unmounted`]; mounting performs the initial
//!   fetches and yields a [`Mounted`] panel, the only state that can sync, render or act.
//! - **Two listings**: the active listing is always fetched on mount, the archived listing only
//!   when the panel mounts in archive view. After that, each change of inputs refetches the
//!   listing of the current view.
//! - **Injected effects**: fetching, previewing, archiving, deleting and the "files found"
//!   notification are all provided by the host.

use crate::actions::{ArchiveOptions, Archiver, Previewer, RecordDeleter};
use crate::config::CoreConfig;
use crate::eligibility::{can_archive_or_inspect, can_preview, ActionIntent};
use crate::error::{ConsentError, ConsentResult};
use crate::query::{FetchTicket, FileFetcher, FileQuery, FilesFoundListener, QueryKind};
use crate::records::{ConsentRecord, FilePage, FileRecord};
use crate::resync::{ResyncController, ResyncInputs};
use crate::view::PanelView;
use crate::viewer::Viewer;
use crate::visibility::{DisplayList, ViewMode};
use std::sync::Arc;

// ============================================================================
// TYPE-STATE MARKERS
// ============================================================================

/// Marker type: no listing has been requested yet.
#[derive(Clone, Copy, Debug)]
pub struct Unmounted;

/// Marker type: initial listings have been requested and inputs are being tracked.
#[derive(Clone, Debug)]
pub struct Mounted {
    resync: ResyncController,
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Host-provided effects a panel invokes.
#[derive(Clone)]
pub struct PanelHandlers {
    pub previewer: Arc<dyn Previewer>,
    pub archiver: Arc<dyn Archiver>,
    pub deleter: Arc<dyn RecordDeleter>,
    pub files_found: Arc<dyn FilesFoundListener>,
}

// ============================================================================
// CONSENT RECORD PANEL
// ============================================================================

/// Files of one consent record, split into active and archived listings.
///
/// Generic parameter `S` is either `Unmounted` or `Mounted`.
pub struct ConsentRecordPanel<S> {
    record: ConsentRecord,
    fetcher: Arc<dyn FileFetcher>,
    handlers: PanelHandlers,
    active: FileQuery,
    archived: FileQuery,
    inputs: ResyncInputs,
    state: S,
}

impl ConsentRecordPanel<Unmounted> {
    /// Creates a panel for `record`, with listings scoped by `cfg`.
    ///
    /// # Errors
    ///
    /// Returns a `ConsentError` if the listing queries cannot be built for this record.
    pub fn new(
        cfg: &CoreConfig,
        record: ConsentRecord,
        fetcher: Arc<dyn FileFetcher>,
        handlers: PanelHandlers,
        inputs: ResyncInputs,
    ) -> ConsentResult<Self> {
        let active = FileQuery::new(cfg, &record.id, QueryKind::Active)?;
        let archived = FileQuery::new(cfg, &record.id, QueryKind::Archived)?;

        Ok(Self {
            record,
            fetcher,
            handlers,
            active,
            archived,
            inputs,
            state: Unmounted,
        })
    }

    /// Performs the initial fetches.
    ///
    /// The active listing is always fetched. The archived listing is fetched only when the
    /// panel starts in archive view; otherwise it stays empty until the view switches.
    /// The inputs given to [`ConsentRecordPanel::new`] count as already synchronised.
    pub async fn mount(mut self) -> ConsentRecordPanel<Mounted> {
        tracing::debug!(
            consent_record_id = %self.record.id,
            view_mode = ?self.inputs.view_mode,
            "mounting consent record panel"
        );

        let fetcher = Arc::clone(&self.fetcher);
        let listener = Arc::clone(&self.handlers.files_found);

        self.active
            .refetch(fetcher.as_ref(), listener.as_ref())
            .await;
        if self.inputs.view_mode.shows_archive() {
            self.archived
                .refetch(fetcher.as_ref(), listener.as_ref())
                .await;
        }

        ConsentRecordPanel {
            record: self.record,
            fetcher: self.fetcher,
            handlers: self.handlers,
            active: self.active,
            archived: self.archived,
            inputs: self.inputs,
            state: Mounted {
                resync: ResyncController::seeded(self.inputs),
            },
        }
    }
}

impl<S> ConsentRecordPanel<S> {
    pub fn record(&self) -> &ConsentRecord {
        &self.record
    }

    pub fn view_mode(&self) -> ViewMode {
        self.inputs.view_mode
    }

    pub fn inputs(&self) -> ResyncInputs {
        self.inputs
    }

    pub fn active_query(&self) -> &FileQuery {
        &self.active
    }

    pub fn archived_query(&self) -> &FileQuery {
        &self.archived
    }
}

impl ConsentRecordPanel<Mounted> {
    /// Applies new caller inputs.
    ///
    /// Returns the listing that was refetched, or `None` if the inputs did not change.
    pub async fn sync(&mut self, inputs: ResyncInputs) -> Option<QueryKind> {
        self.inputs = inputs;
        let kind = self.state.resync.observe(inputs)?;
        self.refetch(kind).await;
        Some(kind)
    }

    /// Fetches a fresh page for one listing.
    pub async fn refetch(&mut self, kind: QueryKind) {
        let fetcher = Arc::clone(&self.fetcher);
        let listener = Arc::clone(&self.handlers.files_found);
        let query = match kind {
            QueryKind::Active => &mut self.active,
            QueryKind::Archived => &mut self.archived,
        };
        query.refetch(fetcher.as_ref(), listener.as_ref()).await;
    }

    /// Issues a request for one listing without awaiting it.
    ///
    /// For hosts that drive the transport themselves; pair with
    /// [`ConsentRecordPanel::complete_fetch`].
    pub fn begin_fetch(&mut self, kind: QueryKind) -> FetchTicket {
        match kind {
            QueryKind::Active => self.active.begin(),
            QueryKind::Archived => self.archived.begin(),
        }
    }

    /// Stores the outcome of a request issued by [`ConsentRecordPanel::begin_fetch`].
    pub fn complete_fetch(&mut self, ticket: FetchTicket, outcome: ConsentResult<FilePage>) {
        let listener = self.handlers.files_found.as_ref();
        match ticket.kind() {
            QueryKind::Active => self.active.resolve(ticket, outcome, listener),
            QueryKind::Archived => self.archived.resolve(ticket, outcome, listener),
        }
    }

    /// Replaces the caller's copy of the consent record, e.g. after it was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`ConsentError::InvalidInput`] if `record` has a different id; listings are
    /// scoped to the record the panel was created for.
    pub fn update_record(&mut self, record: ConsentRecord) -> ConsentResult<()> {
        if record.id != self.record.id {
            return Err(ConsentError::InvalidInput(format!(
                "panel for consent record {} cannot show record {}",
                self.record.id, record.id
            )));
        }
        self.record = record;
        Ok(())
    }

    /// Files to show for the current inputs.
    pub fn display_list(&self) -> DisplayList<'_> {
        DisplayList::merge(
            self.inputs.view_mode,
            self.record.deleted,
            self.active.data(),
            self.archived.data(),
        )
    }

    /// True while either listing has a request in flight.
    pub fn loading(&self) -> bool {
        self.active.loading() || self.archived.loading()
    }

    pub fn is_hidden(&self) -> bool {
        self.display_list().is_hidden()
    }

    /// Whether the record-level delete action is offered: only for live records in active view.
    pub fn delete_offered(&self) -> bool {
        !self.record.deleted && !self.inputs.view_mode.shows_archive()
    }

    pub fn view(&self, viewer: &Viewer) -> PanelView {
        PanelView::build(
            &self.record,
            self.inputs.view_mode,
            &self.display_list(),
            self.loading(),
            self.delete_offered(),
            viewer,
        )
    }

    /// Forwards a shown, active file to the previewer.
    ///
    /// # Errors
    ///
    /// - [`ConsentError::UnknownFile`] if the file is not shown on this panel
    /// - [`ConsentError::ActionNotPermitted`] if the file is archived
    pub fn preview(&self, file_id: &str) -> ConsentResult<()> {
        let file = self.shown_file(file_id)?;
        if !can_preview(file) {
            return Err(ConsentError::ActionNotPermitted {
                file_id: file_id.to_string(),
                action: "preview",
            });
        }

        tracing::info!(
            consent_record_id = %self.record.id,
            file_id,
            "forwarding file preview"
        );
        self.handlers.previewer.preview_file(file, &self.record.id);
        Ok(())
    }

    /// Forwards a shown file to the archiver: archive for active files, inspect for archived.
    ///
    /// # Errors
    ///
    /// - [`ConsentError::UnknownFile`] if the file is not shown on this panel
    /// - [`ConsentError::ActionNotPermitted`] if `viewer` may not archive the file
    pub fn archive(
        &self,
        file_id: &str,
        viewer: &Viewer,
        options: Option<ArchiveOptions>,
    ) -> ConsentResult<ActionIntent> {
        let file = self.shown_file(file_id)?;
        if !can_archive_or_inspect(file, viewer) {
            return Err(ConsentError::ActionNotPermitted {
                file_id: file_id.to_string(),
                action: "archive",
            });
        }

        let intent = ActionIntent::for_file(file);
        tracing::info!(
            consent_record_id = %self.record.id,
            file_id,
            intent = ?intent,
            "forwarding file archive action"
        );
        self.handlers
            .archiver
            .archive_file(file, &self.record.id, options.as_ref());
        Ok(intent)
    }

    /// Hands the consent record to the host's deletion workflow.
    ///
    /// # Errors
    ///
    /// Returns [`ConsentError::DeleteNotOffered`] when the record is already deleted or the
    /// panel is in archive view.
    pub fn request_delete(&self) -> ConsentResult<()> {
        if !self.delete_offered() {
            return Err(ConsentError::DeleteNotOffered(self.record.id.clone()));
        }

        tracing::info!(consent_record_id = %self.record.id, "forwarding record deletion");
        self.handlers.deleter.on_delete(&self.record);
        Ok(())
    }

    fn shown_file(&self, file_id: &str) -> ConsentResult<&FileRecord> {
        self.display_list()
            .find(file_id)
            .ok_or_else(|| ConsentError::UnknownFile(file_id.to_string()))
    }
}
