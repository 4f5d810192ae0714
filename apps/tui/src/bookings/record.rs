use serde::Serialize;
use tracing::warn;

use crate::api::RawBooking;
use crate::domain::BookingStatus;

/// A booking with its effective status resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub slot: String,
    pub reminder_sent: bool,
    pub feedback_sent: bool,
    pub stored_status: Option<BookingStatus>,
    pub status: BookingStatus,
    pub notes: Option<String>,
}

/// Feedback beats reminder beats whatever was stored.
pub const fn derive_status(
    reminder_sent: bool,
    feedback_sent: bool,
    stored: Option<BookingStatus>,
) -> BookingStatus {
    if feedback_sent {
        return BookingStatus::Completed;
    }
    if reminder_sent {
        return BookingStatus::Confirmed;
    }
    match stored {
        Some(status) => status,
        None => BookingStatus::Scheduled,
    }
}

impl From<RawBooking> for Booking {
    fn from(raw: RawBooking) -> Self {
        let stored_status = raw.status.as_deref().and_then(|value| {
            let parsed = BookingStatus::parse(value);
            if parsed.is_none() && !value.trim().is_empty() {
                warn!(id = raw.id, status = value, "unknown stored status, treating as absent");
            }
            parsed
        });

        Self {
            id: raw.id,
            status: derive_status(raw.reminder_sent, raw.feedback_sent, stored_status),
            name: raw.name,
            phone: raw.phone,
            email: raw.email.unwrap_or_default(),
            date: raw.date,
            slot: raw.slot,
            reminder_sent: raw.reminder_sent,
            feedback_sent: raw.feedback_sent,
            stored_status,
            notes: raw.notes,
        }
    }
}

impl Booking {
    /// Search matching: name and email ignore case, phone and date are plain
    /// substrings. `term` must already be trimmed and non-empty.
    pub fn matches_search(&self, term: &str) -> bool {
        let lowered = term.to_lowercase();
        self.name.to_lowercase().contains(&lowered)
            || self.phone.contains(term)
            || self.email.to_lowercase().contains(&lowered)
            || self.date.contains(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::raw;

    const STORED: [Option<BookingStatus>; 5] = [
        None,
        Some(BookingStatus::Scheduled),
        Some(BookingStatus::Confirmed),
        Some(BookingStatus::Completed),
        Some(BookingStatus::Cancelled),
    ];

    #[test]
    fn feedback_always_means_completed() {
        for stored in STORED {
            for reminder in [false, true] {
                assert_eq!(derive_status(reminder, true, stored), BookingStatus::Completed);
            }
        }
    }

    #[test]
    fn reminder_without_feedback_means_confirmed() {
        for stored in STORED {
            assert_eq!(derive_status(true, false, stored), BookingStatus::Confirmed);
        }
    }

    #[test]
    fn no_flags_passes_stored_status_through() {
        for stored in STORED {
            let expected = stored.unwrap_or(BookingStatus::Scheduled);
            assert_eq!(derive_status(false, false, stored), expected);
        }
    }

    #[test]
    fn unknown_stored_status_is_treated_as_absent() {
        let booking = Booking::from(raw(1, "John Doe", "2025-07-05", false, false, Some("pending")));
        assert_eq!(booking.stored_status, None);
        assert_eq!(booking.status, BookingStatus::Scheduled);
    }

    #[test]
    fn stored_cancelled_is_overridden_by_flags() {
        let booking = Booking::from(raw(1, "John Doe", "2025-07-05", true, false, Some("cancelled")));
        assert_eq!(booking.stored_status, Some(BookingStatus::Cancelled));
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn search_matches_each_field_with_its_own_rule() {
        let booking = Booking::from(raw(42, "John Doe", "2025-07-05", false, false, None));

        assert!(booking.matches_search("JOHN"));
        assert!(booking.matches_search("john.doe@EXAMPLE"));
        assert!(booking.matches_search("00042"));
        assert!(booking.matches_search("2025-07"));
        assert!(!booking.matches_search("alice"));
    }
}
