//! Paginated log cursor with client-side filtering.
//!
//! One cursor per selected session. The server side is consumed in fixed
//! 250-record pages into an append-only buffer; the client side exposes a
//! search-filtered page/page-size window over that buffer. Switching sessions
//! discards everything and restarts the server cursor at page 1.

use crate::model::{LogLevel, LogLine, ServiceError};
use crate::parser;
use crate::service::LogQueryService;

/// Server-side fetch size.
pub const FETCH_PAGE_SIZE: u32 = 250;
/// Default client-side rows per page.
pub const DEFAULT_ROWS_PER_PAGE: usize = 25;

/// Wide single-page probe used to snapshot total and error counts at session
/// open, before incremental loading starts.
const COUNT_PROBE_PAGE_SIZE: u32 = 1000;

/// Accumulating log cursor for one selected session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogCursor {
    session_id: Option<u32>,
    buffer: Vec<LogLine>,
    next_page: u32,
    exhausted: bool,
    fetch_in_flight: bool,
    fetch_page_size: u32,
    total_count: u64,
    error_count: u64,
    search: String,
    page: usize,
    per_page: usize,
}

impl Default for LogCursor {
    fn default() -> Self {
        Self {
            session_id: None,
            buffer: Vec::new(),
            next_page: 1,
            exhausted: false,
            fetch_in_flight: false,
            fetch_page_size: FETCH_PAGE_SIZE,
            total_count: 0,
            error_count: 0,
            search: String::new(),
            page: 1,
            per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl LogCursor {
    /// Open the cursor on a session.
    ///
    /// Discards the accumulated buffer, restarts the server cursor at page 1,
    /// snapshots the total and error counts once via a wide probe fetch, and
    /// loads the first page. Search and page-size settings survive the
    /// switch; the client page resets to 1.
    pub fn open<S: LogQueryService + ?Sized>(
        &mut self,
        service: &S,
        session_id: Option<u32>,
    ) -> Result<(), ServiceError> {
        self.session_id = session_id;
        self.buffer.clear();
        self.next_page = 1;
        self.exhausted = false;
        self.fetch_in_flight = false;
        self.page = 1;

        let probe = service.fetch_page(1, COUNT_PROBE_PAGE_SIZE, session_id)?;
        self.total_count = probe.total_logs;
        self.error_count = probe
            .logs
            .iter()
            .filter(|log| parser::classify_level(&log.message) == LogLevel::Error)
            .count() as u64;

        self.load_more(service)?;
        Ok(())
    }

    /// Fetch and append the next server page.
    ///
    /// Idempotent against concurrent invocation: a fetch already in flight,
    /// or an exhausted cursor, makes this a no-op returning `Ok(false)`. A
    /// short page (fewer than `FETCH_PAGE_SIZE` records) marks the cursor
    /// exhausted so no further requests are issued.
    pub fn load_more<S: LogQueryService + ?Sized>(
        &mut self,
        service: &S,
    ) -> Result<bool, ServiceError> {
        if self.fetch_in_flight || self.exhausted {
            return Ok(false);
        }
        self.fetch_in_flight = true;
        let result = service.fetch_page(self.next_page, self.fetch_page_size, self.session_id);
        self.fetch_in_flight = false;

        let page = result?;
        if (page.logs.len() as u32) < self.fetch_page_size {
            self.exhausted = true;
        }
        self.next_page += 1;
        self.buffer.extend(page.logs);
        Ok(true)
    }

    /// The filtered subset of the buffer: lines belonging to the selected
    /// session whose message or extracted event contains the search text,
    /// case-insensitively. An empty search matches everything.
    pub fn filtered(&self) -> Vec<&LogLine> {
        let needle = self.search.trim().to_lowercase();
        self.buffer
            .iter()
            .filter(|log| self.session_id.is_none() || log.session_id == self.session_id)
            .filter(|log| {
                needle.is_empty()
                    || log.message.to_lowercase().contains(&needle)
                    || parser::extract_event(&log.message)
                        .to_lowercase()
                        .contains(&needle)
            })
            .collect()
    }

    /// The current client page of the filtered subset.
    pub fn visible(&self) -> Vec<&LogLine> {
        self.filtered()
            .into_iter()
            .skip((self.page - 1) * self.per_page)
            .take(self.per_page)
            .collect()
    }

    /// Number of client pages the filtered subset spans (at least 1).
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(self.per_page).max(1)
    }

    /// Set the search text and rewind to the first client page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Jump to a client page, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    /// Change the rows-per-page and rewind to the first client page.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.page = 1;
    }

    /// Change the server-side fetch size. Takes effect from the next fetch.
    pub fn set_fetch_page_size(&mut self, fetch_page_size: u32) {
        self.fetch_page_size = fetch_page_size.max(1);
    }

    /// Selected session, if any.
    pub fn session_id(&self) -> Option<u32> {
        self.session_id
    }

    /// Total record count snapshotted at session open.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Error record count snapshotted at session open.
    pub fn error_count(&self) -> u64 {
        self.error_count
    }

    /// All records fetched so far.
    pub fn buffer(&self) -> &[LogLine] {
        &self.buffer
    }

    /// Whether the server side has been fully consumed.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Current client page (1-based).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Current rows-per-page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }
}
