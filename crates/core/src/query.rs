//! Query state for the two file listings behind a panel.
//!
//! A panel keeps two independent listings scoped to one consent record: the active files and the
//! archived files. Each [`FileQuery`] holds the last page it received, whether any of its
//! requests is still outstanding, and the error of the last failed request.
//!
//! Fetching is split in two so hosts can interleave requests:
//! - [`FileQuery::begin`] issues a request and marks the query as loading
//! - [`FileQuery::resolve`] stores the outcome of a request
//!
//! [`FileQuery::refetch`] does both against a [`FileFetcher`]. Requests are never cancelled;
//! whichever response resolves last is the one shown.

use crate::config::CoreConfig;
use crate::constants::FIRST_PAGE_OFFSET;
use crate::records::{FilePage, FileRecord};
use crate::ConsentResult;
use async_trait::async_trait;
use consent_wire::UploadListQuery;
use std::collections::BTreeSet;

/// Which of the two listings a query covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Active,
    Archived,
}

impl QueryKind {
    pub fn is_archived(self) -> bool {
        matches!(self, QueryKind::Archived)
    }
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryKind::Active => write!(f, "active"),
            QueryKind::Archived => write!(f, "archived"),
        }
    }
}

/// Paginated file listing capability.
///
/// Implemented by the host over whatever transport it uses. Failures are reported as errors and
/// turned into absent data by the query; no retry is attempted here.
#[async_trait]
pub trait FileFetcher: Send + Sync {
    async fn fetch_page(&self, query: &UploadListQuery) -> ConsentResult<FilePage>;
}

/// Notified whenever a listing response carries at least one file.
pub trait FilesFoundListener: Send + Sync {
    fn files_found(&self);
}

/// Handle for one issued request, returned by [`FileQuery::begin`].
///
/// Consumed when resolved; a query accepts each of its tickets once.
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket {
    kind: QueryKind,
    generation: u64,
    params: UploadListQuery,
}

impl FetchTicket {
    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Parameters to send for this request.
    pub fn params(&self) -> &UploadListQuery {
        &self.params
    }
}

/// State of one file listing.
#[derive(Clone, Debug)]
pub struct FileQuery {
    kind: QueryKind,
    params: UploadListQuery,
    data: Option<FilePage>,
    outstanding: BTreeSet<u64>,
    issued: u64,
    last_error: Option<String>,
}

impl FileQuery {
    /// Creates a query for the first page of `kind` files attached to `consent_record_id`.
    ///
    /// Nothing is fetched until [`FileQuery::begin`] or [`FileQuery::refetch`] is called.
    pub fn new(cfg: &CoreConfig, consent_record_id: &str, kind: QueryKind) -> ConsentResult<Self> {
        let params = UploadListQuery::new(
            cfg.file_type(),
            consent_record_id,
            kind.is_archived(),
            cfg.page_size(),
            FIRST_PAGE_OFFSET,
        )?;

        Ok(Self {
            kind,
            params,
            data: None,
            outstanding: BTreeSet::new(),
            issued: 0,
            last_error: None,
        })
    }

    pub fn kind(&self) -> QueryKind {
        self.kind
    }

    pub fn params(&self) -> &UploadListQuery {
        &self.params
    }

    /// Last page received, or `None` before the first response and after a failed one.
    pub fn data(&self) -> Option<&FilePage> {
        self.data.as_ref()
    }

    /// Files of the last page received; empty when no data is present.
    pub fn results(&self) -> &[FileRecord] {
        self.data
            .as_ref()
            .map(|page| page.results.as_slice())
            .unwrap_or_default()
    }

    /// True while any request issued by this query is outstanding.
    pub fn loading(&self) -> bool {
        !self.outstanding.is_empty()
    }

    /// Message of the last failed request, cleared by the next successful one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of requests issued so far.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Issues a new request and marks the query as loading.
    pub fn begin(&mut self) -> FetchTicket {
        self.issued += 1;
        self.outstanding.insert(self.issued);

        tracing::debug!(
            kind = %self.kind,
            associating_id = %self.params.associating_id,
            generation = self.issued,
            "issuing file listing request"
        );

        FetchTicket {
            kind: self.kind,
            generation: self.issued,
            params: self.params.clone(),
        }
    }

    /// Stores the outcome of a request issued by [`FileQuery::begin`].
    ///
    /// Tickets issued by another query, or already resolved, are ignored.
    ///
    /// A successful page replaces the current data even if a newer request is still
    /// outstanding, and notifies `listener` once when the page is non-empty. A failure leaves
    /// the query without data.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: ConsentResult<FilePage>,
        listener: &dyn FilesFoundListener,
    ) {
        if ticket.kind != self.kind || ticket.params != self.params {
            tracing::warn!(
                kind = %self.kind,
                associating_id = %self.params.associating_id,
                ticket_kind = %ticket.kind,
                ticket_associating_id = %ticket.params.associating_id,
                "ignoring response issued by a different listing"
            );
            return;
        }

        if !self.outstanding.remove(&ticket.generation) {
            tracing::warn!(
                kind = %self.kind,
                generation = ticket.generation,
                "ignoring response for a request that is not outstanding"
            );
            return;
        }

        if ticket.generation < self.issued {
            tracing::debug!(
                kind = %self.kind,
                generation = ticket.generation,
                latest = self.issued,
                "stale file listing response resolved"
            );
        }

        match outcome {
            Ok(page) => {
                if !page.is_empty() {
                    listener.files_found();
                }
                self.data = Some(page);
                self.last_error = None;
            }
            Err(err) => {
                tracing::warn!(
                    kind = %self.kind,
                    associating_id = %self.params.associating_id,
                    "file listing request failed: {err}"
                );
                self.data = None;
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Fetches a fresh page and stores it.
    pub async fn refetch(&mut self, fetcher: &dyn FileFetcher, listener: &dyn FilesFoundListener) {
        let ticket = self.begin();
        let outcome = fetcher.fetch_page(ticket.params()).await;
        self.resolve(ticket, outcome, listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{active_file, archived_file, MockFileFetcher, RecordingListener};
    use crate::ConsentError;

    fn query(kind: QueryKind) -> FileQuery {
        FileQuery::new(&CoreConfig::default(), "c1", kind).expect("valid query")
    }

    #[test]
    fn params_are_scoped_to_record_and_archive_state() {
        let active = query(QueryKind::Active);
        assert_eq!(active.params().file_type, "CONSENT_RECORD");
        assert_eq!(active.params().associating_id, "c1");
        assert!(!active.params().is_archived);
        assert_eq!(active.params().limit, 100);
        assert_eq!(active.params().offset, 0);

        assert!(query(QueryKind::Archived).params().is_archived);
    }

    #[test]
    fn new_query_has_no_data_and_is_idle() {
        let q = query(QueryKind::Active);
        assert!(q.data().is_none());
        assert!(q.results().is_empty());
        assert!(!q.loading());
        assert_eq!(q.issued(), 0);
    }

    #[test]
    fn blank_record_id_is_rejected() {
        let err = FileQuery::new(&CoreConfig::default(), " ", QueryKind::Active)
            .expect_err("blank record id");
        assert!(matches!(err, ConsentError::Wire(_)));
    }

    #[test]
    fn loading_until_every_request_resolves() {
        let listener = RecordingListener::default();
        let mut q = query(QueryKind::Active);

        let first = q.begin();
        let second = q.begin();
        assert!(q.loading());

        q.resolve(second, Ok(FilePage::from_results(vec![active_file("f2", "alice")])), &listener);
        assert!(q.loading());

        q.resolve(first, Ok(FilePage::from_results(vec![active_file("f1", "alice")])), &listener);
        assert!(!q.loading());

        // Last resolved wins, even when it was issued first.
        assert_eq!(q.results()[0].id, "f1");
    }

    #[test]
    fn non_empty_response_notifies_once() {
        let listener = RecordingListener::default();
        let mut q = query(QueryKind::Archived);

        let ticket = q.begin();
        q.resolve(
            ticket,
            Ok(FilePage::from_results(vec![
                archived_file("f1", "alice"),
                archived_file("f2", "alice"),
            ])),
            &listener,
        );

        assert_eq!(listener.count(), 1);
    }

    #[test]
    fn empty_response_does_not_notify() {
        let listener = RecordingListener::default();
        let mut q = query(QueryKind::Active);

        let ticket = q.begin();
        q.resolve(ticket, Ok(FilePage::default()), &listener);

        assert_eq!(listener.count(), 0);
        assert!(q.data().is_some());
        assert!(q.results().is_empty());
    }

    #[test]
    fn failure_clears_data_and_records_error() {
        let listener = RecordingListener::default();
        let mut q = query(QueryKind::Active);

        let ticket = q.begin();
        q.resolve(ticket, Ok(FilePage::from_results(vec![active_file("f1", "alice")])), &listener);

        let ticket = q.begin();
        q.resolve(ticket, Err(ConsentError::Fetch("timed out".into())), &listener);

        assert!(q.data().is_none());
        assert!(!q.loading());
        assert!(q.last_error().expect("error recorded").contains("timed out"));

        let ticket = q.begin();
        q.resolve(ticket, Ok(FilePage::default()), &listener);
        assert!(q.last_error().is_none());
    }

    #[test]
    fn ticket_from_other_listing_is_ignored() {
        let listener = RecordingListener::default();
        let mut active = query(QueryKind::Active);
        let mut archived = query(QueryKind::Archived);

        let _pending = active.begin();
        let foreign = archived.begin();
        active.resolve(
            foreign,
            Ok(FilePage::from_results(vec![archived_file("f9", "alice")])),
            &listener,
        );

        assert!(active.loading());
        assert!(active.data().is_none());
        assert_eq!(listener.count(), 0);
    }

    #[test]
    fn ticket_from_other_record_is_ignored() {
        let listener = RecordingListener::default();
        let mut c1 = query(QueryKind::Active);
        let mut c2 = FileQuery::new(&CoreConfig::default(), "c2", QueryKind::Active)
            .expect("valid query");

        let pending = c1.begin();
        let foreign = c2.begin();
        assert_eq!(pending.generation(), foreign.generation());

        c1.resolve(
            foreign,
            Ok(FilePage::from_results(vec![active_file("other", "alice")])),
            &listener,
        );

        assert!(c1.loading());
        assert!(c1.data().is_none());
        assert_eq!(listener.count(), 0);

        c1.resolve(pending, Ok(FilePage::default()), &listener);
        assert!(!c1.loading());
    }

    #[test]
    fn resolving_a_ticket_twice_keeps_newer_request_loading() {
        let listener = RecordingListener::default();
        let mut q = query(QueryKind::Active);

        let first = q.begin();
        let _second = q.begin();
        let repeated = FetchTicket {
            kind: first.kind,
            generation: first.generation,
            params: first.params.clone(),
        };

        q.resolve(first, Ok(FilePage::from_results(vec![active_file("f1", "alice")])), &listener);
        q.resolve(
            repeated,
            Ok(FilePage::from_results(vec![active_file("f2", "alice")])),
            &listener,
        );

        assert!(q.loading());
        assert_eq!(q.results()[0].id, "f1");
        assert_eq!(listener.count(), 1);
    }

    #[tokio::test]
    async fn refetch_sends_query_params_and_stores_page() {
        let fetcher = MockFileFetcher::new();
        fetcher.set_page("c1", false, vec![active_file("f1", "alice")]);
        let listener = RecordingListener::default();
        let mut q = query(QueryKind::Active);

        q.refetch(&fetcher, &listener).await;

        assert_eq!(q.results().len(), 1);
        assert!(!q.loading());
        assert_eq!(listener.count(), 1);

        let requests = fetcher.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0], *q.params());
    }
}
