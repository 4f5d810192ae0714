use serde::{Deserialize, Serialize};

use crate::bookings::record::Booking;
use crate::domain::BookingTab;

/// Tab, search term and page of the bookings table.
///
/// Transitions are pure: each returns the next state. Changing the tab or
/// the search term always lands on page 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub tab: BookingTab,
    pub search: String,
    pub page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            tab: BookingTab::All,
            search: String::new(),
            page: 1,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn with_tab(self, tab: BookingTab) -> Self {
        Self {
            tab,
            page: 1,
            ..self
        }
    }

    #[must_use]
    pub fn with_search(self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: 1,
            ..self
        }
    }

    #[must_use]
    pub fn with_page(self, page: usize) -> Self {
        Self {
            page: page.max(1),
            ..self
        }
    }

    /// Moves forward unless already on the last page.
    #[must_use]
    pub fn next_page(self, total_pages: usize) -> Self {
        let page = if self.page < total_pages {
            self.page + 1
        } else {
            self.page
        };
        self.with_page(page)
    }

    #[must_use]
    pub fn prev_page(self) -> Self {
        let page = self.page.saturating_sub(1);
        self.with_page(page)
    }
}

/// One page of the filtered bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a> {
    pub items: Vec<&'a Booking>,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

/// Badge counters for every tab, independent of the search term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TabCounts {
    pub all: usize,
    pub today: usize,
    pub upcoming: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl TabCounts {
    pub const fn get(&self, tab: BookingTab) -> usize {
        match tab {
            BookingTab::All => self.all,
            BookingTab::Today => self.today,
            BookingTab::Upcoming => self.upcoming,
            BookingTab::Completed => self.completed,
            BookingTab::Cancelled => self.cancelled,
        }
    }
}

/// Tab predicate. `today` is an ISO `YYYY-MM-DD` string, so plain string
/// ordering is date ordering.
pub fn tab_matches(tab: BookingTab, booking: &Booking, today: &str) -> bool {
    use crate::domain::BookingStatus;

    match tab {
        BookingTab::All => true,
        BookingTab::Today => booking.date == today,
        BookingTab::Upcoming => booking.date.as_str() >= today && booking.status.is_open(),
        BookingTab::Completed => booking.status == BookingStatus::Completed,
        BookingTab::Cancelled => booking.status == BookingStatus::Cancelled,
    }
}

/// Search, then tab, then slice out the requested 1-based page.
pub fn filter_and_page<'a>(
    records: &'a [Booking],
    tab: BookingTab,
    search: &str,
    page: usize,
    page_size: usize,
    today: &str,
) -> Page<'a> {
    let term = search.trim();
    let page_size = page_size.max(1);
    let page = page.max(1);

    let filtered: Vec<&Booking> = records
        .iter()
        .filter(|booking| term.is_empty() || booking.matches_search(term))
        .filter(|booking| tab_matches(tab, booking, today))
        .collect();

    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size).min(total_count);
    let end = start.saturating_add(page_size).min(total_count);

    Page {
        items: filtered[start..end].to_vec(),
        page,
        page_size,
        total_count,
        total_pages,
    }
}

pub fn count_tabs(records: &[Booking], today: &str) -> TabCounts {
    let count = |tab| {
        records
            .iter()
            .filter(|booking| tab_matches(tab, booking, today))
            .count()
    };

    TabCounts {
        all: records.len(),
        today: count(BookingTab::Today),
        upcoming: count(BookingTab::Upcoming),
        completed: count(BookingTab::Completed),
        cancelled: count(BookingTab::Cancelled),
    }
}
