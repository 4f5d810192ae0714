//! In-memory `BookingService` used by the view-model and app tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::api::models::{ApiAck, Credentials, NewBooking, RawBooking};
use crate::api::BookingService;
use crate::error::ApiError;

#[derive(Debug, Default)]
pub struct FakeBookingService {
    bookings: Mutex<Vec<RawBooking>>,
    list_fails: Mutex<bool>,
    create_ack: Mutex<Option<ApiAck>>,
    login_ack: Mutex<Option<ApiAck>>,
    created: Mutex<Vec<NewBooking>>,
    list_calls: AtomicUsize,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl FakeBookingService {
    pub fn with_bookings(bookings: Vec<RawBooking>) -> Self {
        let service = Self::default();
        *lock(&service.bookings) = bookings;
        *lock(&service.create_ack) = Some(ApiAck::ok());
        *lock(&service.login_ack) = Some(ApiAck::ok());
        service
    }

    pub fn fail_list(&self, fail: bool) {
        *lock(&self.list_fails) = fail;
    }

    /// `None` makes the call fail at the transport level.
    pub fn set_create_ack(&self, ack: Option<ApiAck>) {
        *lock(&self.create_ack) = ack;
    }

    pub fn set_login_ack(&self, ack: Option<ApiAck>) {
        *lock(&self.login_ack) = ack;
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<NewBooking> {
        lock(&self.created).clone()
    }
}

#[async_trait]
impl BookingService for FakeBookingService {
    async fn list_bookings(&self) -> Result<Vec<RawBooking>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if *lock(&self.list_fails) {
            return Err(ApiError::Status(StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(lock(&self.bookings).clone())
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<ApiAck, ApiError> {
        let ack = lock(&self.create_ack)
            .clone()
            .ok_or(ApiError::Status(StatusCode::BAD_GATEWAY))?;

        if ack.success {
            lock(&self.created).push(booking.clone());
            let mut bookings = lock(&self.bookings);
            let id = i64::try_from(bookings.len()).unwrap_or(i64::MAX) + 1;
            bookings.push(raw(id, &booking.name, &booking.date, false, false, None));
        }
        Ok(ack)
    }

    async fn login(&self, _credentials: &Credentials) -> Result<ApiAck, ApiError> {
        lock(&self.login_ack)
            .clone()
            .ok_or(ApiError::Status(StatusCode::BAD_GATEWAY))
    }

    async fn logout(&self) -> Result<ApiAck, ApiError> {
        Ok(ApiAck::ok())
    }
}

/// Shorthand for building wire records in tests.
pub fn raw(
    id: i64,
    name: &str,
    date: &str,
    reminder_sent: bool,
    feedback_sent: bool,
    status: Option<&str>,
) -> RawBooking {
    RawBooking {
        id,
        name: name.to_string(),
        phone: format!("98765{id:05}"),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', "."))),
        date: date.to_string(),
        slot: "10:00".to_string(),
        reminder_sent,
        feedback_sent,
        status: status.map(str::to_string),
        notes: None,
    }
}
