// API module for salesdesk-tui
// Talks to the bookings backend over HTTP

pub mod client;
#[cfg(test)]
pub mod fake;
pub mod models;

pub use client::HttpBookingService;
pub use models::{ApiAck, Credentials, NewBooking, RawBooking};

use crate::error::ApiError;
use async_trait::async_trait;

/// The external booking service consumed by the dashboard.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// `GET /bookings`: the full list, no paging on the server side.
    async fn list_bookings(&self) -> Result<Vec<RawBooking>, ApiError>;

    /// `POST /bookings`
    async fn create_booking(&self, booking: &NewBooking) -> Result<ApiAck, ApiError>;

    /// `POST /login`
    async fn login(&self, credentials: &Credentials) -> Result<ApiAck, ApiError>;

    /// `POST /logout`
    async fn logout(&self) -> Result<ApiAck, ApiError>;
}
