// Bookings view model: status derivation, filtering, paging and the
// load/create flow against the booking service.

pub mod record;
pub mod view;
pub mod view_model;

pub use record::{derive_status, Booking};
pub use view::{Page, TabCounts, ViewState};
pub use view_model::{
    check_create_ack, BookingsViewModel, CreateOutcome, LoadOutcome, LoadTicket, DEFAULT_PAGE_SIZE,
};
