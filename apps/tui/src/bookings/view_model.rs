use tracing::{debug, info, warn};

use crate::api::{ApiAck, BookingService, NewBooking, RawBooking};
use crate::bookings::record::Booking;
use crate::bookings::view::{count_tabs, filter_and_page, Page, TabCounts, ViewState};
use crate::domain::BookingTab;
use crate::error::{ApiError, BookingError};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Identifies one load request. Only the newest ticket may replace the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was replaced with this many records.
    Applied(usize),
    /// A newer load was issued in the meantime; the response was dropped.
    Stale,
}

#[derive(Debug)]
pub enum CreateOutcome {
    Refreshed(usize),
    /// The server accepted the booking but the follow-up reload failed.
    RefreshFailed(BookingError),
}

/// Maps the create call's response: transport errors and `success: false`
/// are both `CreateFailed`.
pub fn check_create_ack(result: Result<ApiAck, ApiError>) -> Result<(), BookingError> {
    let ack = result.map_err(|e| {
        warn!(error = %e, "booking submission failed");
        BookingError::create(&e)
    })?;

    if ack.success {
        return Ok(());
    }

    let reason = ack
        .message
        .unwrap_or_else(|| "rejected by server".to_string());
    warn!(%reason, "booking rejected");
    Err(BookingError::CreateFailed(reason))
}

/// Owns the fetched bookings and the table's view state.
#[derive(Debug)]
pub struct BookingsViewModel {
    records: Vec<Booking>,
    view: ViewState,
    page_size: usize,
    issued: u64,
    loaded_once: bool,
}

impl Default for BookingsViewModel {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl BookingsViewModel {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            view: ViewState::default(),
            page_size: page_size.max(1),
            issued: 0,
            loaded_once: false,
        }
    }

    pub fn records(&self) -> &[Booking] {
        &self.records
    }

    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    pub const fn has_loaded(&self) -> bool {
        self.loaded_once
    }

    /// Drops every record, e.g. after logging out.
    pub fn clear(&mut self) {
        self.records.clear();
        self.view = ViewState::default();
        self.loaded_once = false;
        // Anything still in flight belongs to the old session.
        self.issued += 1;
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Applies a fetch result. The list is replaced whole or not at all.
    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<RawBooking>, ApiError>,
    ) -> Result<LoadOutcome, BookingError> {
        if ticket.0 != self.issued {
            debug!(ticket = ticket.0, newest = self.issued, "dropping stale bookings response");
            return Ok(LoadOutcome::Stale);
        }

        let raw = result.map_err(|e| {
            warn!(error = %e, "bookings load failed, keeping previous list");
            BookingError::load(&e)
        })?;

        let mut records: Vec<Booking> = raw.into_iter().map(Booking::from).collect();
        // Stable: equal (date, slot) keep the order the server sent.
        records.sort_by(|a, b| (&a.date, &a.slot).cmp(&(&b.date, &b.slot)));

        let count = records.len();
        self.records = records;
        self.loaded_once = true;
        info!(count, "bookings loaded");
        Ok(LoadOutcome::Applied(count))
    }

    pub async fn load<S>(&mut self, service: &S) -> Result<usize, BookingError>
    where
        S: BookingService + ?Sized,
    {
        let ticket = self.begin_load();
        let result = service.list_bookings().await;
        match self.apply_load(ticket, result)? {
            LoadOutcome::Applied(count) => Ok(count),
            LoadOutcome::Stale => Ok(self.records.len()),
        }
    }

    /// Submits a booking and reloads on success. Nothing is appended locally.
    pub async fn create<S>(
        &mut self,
        service: &S,
        candidate: &NewBooking,
    ) -> Result<CreateOutcome, BookingError>
    where
        S: BookingService + ?Sized,
    {
        check_create_ack(service.create_booking(candidate).await)?;

        info!(date = %candidate.date, slot = %candidate.slot, "booking created");
        Ok(match self.load(service).await {
            Ok(count) => CreateOutcome::Refreshed(count),
            Err(e) => CreateOutcome::RefreshFailed(e),
        })
    }

    pub fn filtered_and_paged(
        &self,
        tab: BookingTab,
        search: &str,
        page: usize,
        today: &str,
    ) -> Page<'_> {
        filter_and_page(&self.records, tab, search, page, self.page_size, today)
    }

    /// The page selected by the owned view state.
    pub fn current_page(&self, today: &str) -> Page<'_> {
        self.filtered_and_paged(self.view.tab, &self.view.search, self.view.page, today)
    }

    pub fn tab_counts(&self, today: &str) -> TabCounts {
        count_tabs(&self.records, today)
    }

    pub fn set_tab(&mut self, tab: BookingTab) {
        self.view = std::mem::take(&mut self.view).with_tab(tab);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view = std::mem::take(&mut self.view).with_search(search);
    }

    pub fn set_page(&mut self, page: usize) {
        self.view = std::mem::take(&mut self.view).with_page(page);
    }

    pub fn next_page(&mut self, today: &str) {
        let total_pages = self.current_page(today).total_pages;
        self.view = std::mem::take(&mut self.view).next_page(total_pages);
    }

    pub fn prev_page(&mut self) {
        self.view = std::mem::take(&mut self.view).prev_page();
    }
}
