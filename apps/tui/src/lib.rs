// Terminal dashboard for the AI sales agent bookings service.
//
// The binary in `main.rs` wires these modules together; they are exported
// here for the integration tests.

pub mod api;
pub mod app;
pub mod bookings;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod event;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use domain::{BookingStatus, BookingTab, Section};
