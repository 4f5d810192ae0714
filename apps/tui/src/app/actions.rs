use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use crate::api::{ApiAck, BookingService, Credentials, NewBooking, RawBooking};
use crate::bookings::LoadTicket;
use crate::error::ApiError;

/// Results of background service calls, applied on the UI loop.
#[derive(Debug)]
pub enum AppEvent {
    BookingsLoaded {
        ticket: LoadTicket,
        result: Result<Vec<RawBooking>, ApiError>,
    },
    BookingCreated(Result<ApiAck, ApiError>),
    LoginFinished(Result<ApiAck, ApiError>),
    LoggedOut(Result<ApiAck, ApiError>),
}

/// Runs service calls on spawned tasks so the interface keeps drawing and
/// taking keys while a request is in flight.
#[derive(Clone)]
pub struct AppActions {
    service: Arc<dyn BookingService>,
    events: UnboundedSender<AppEvent>,
}

impl std::fmt::Debug for AppActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppActions").finish_non_exhaustive()
    }
}

impl AppActions {
    pub fn new(service: Arc<dyn BookingService>) -> (Self, UnboundedReceiver<AppEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (Self { service, events }, receiver)
    }

    fn send(events: &UnboundedSender<AppEvent>, event: AppEvent) {
        // The receiver only goes away when the app is shutting down.
        if events.send(event).is_err() {
            debug!("app event dropped, receiver closed");
        }
    }

    pub fn spawn_load(&self, ticket: LoadTicket) {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = service.list_bookings().await;
            Self::send(&events, AppEvent::BookingsLoaded { ticket, result });
        });
    }

    pub fn spawn_create(&self, booking: NewBooking) {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = service.create_booking(&booking).await;
            Self::send(&events, AppEvent::BookingCreated(result));
        });
    }

    pub fn spawn_login(&self, credentials: Credentials) {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = service.login(&credentials).await;
            Self::send(&events, AppEvent::LoginFinished(result));
        });
    }

    pub fn spawn_logout(&self) {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = service.logout().await;
            Self::send(&events, AppEvent::LoggedOut(result));
        });
    }
}
