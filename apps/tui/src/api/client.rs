use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::api::models::{ApiAck, Credentials, NewBooking, RawBooking};
use crate::api::BookingService;
use crate::error::ApiError;

/// reqwest-backed client for the bookings backend.
///
/// The client keeps a cookie store so the session cookie set by `/login`
/// travels with later requests. No timeout is configured.
#[derive(Debug, Clone)]
pub struct HttpBookingService {
    client: Client,
    base_url: String,
}

impl HttpBookingService {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Acknowledgements may come back with an error status and a message
    /// body; keep the message when there is one.
    async fn read_ack(response: Response) -> Result<ApiAck, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Self::read_json(response).await;
        }

        match response.json::<ApiAck>().await {
            Ok(ack) if ack.message.is_some() => Ok(ApiAck {
                success: false,
                message: ack.message,
            }),
            _ => Err(ApiError::Status(status)),
        }
    }
}

#[async_trait]
impl BookingService for HttpBookingService {
    async fn list_bookings(&self) -> Result<Vec<RawBooking>, ApiError> {
        let url = self.url("bookings");
        debug!(%url, "fetching bookings");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let bookings: Vec<RawBooking> = Self::read_json(response).await?;
        debug!(count = bookings.len(), "bookings fetched");
        Ok(bookings)
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<ApiAck, ApiError> {
        let url = self.url("bookings");
        debug!(%url, date = %booking.date, slot = %booking.slot, "submitting booking");

        let response = self
            .client
            .post(&url)
            .json(booking)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        Self::read_ack(response).await
    }

    async fn login(&self, credentials: &Credentials) -> Result<ApiAck, ApiError> {
        let url = self.url("login");
        debug!(%url, username = %credentials.username, "logging in");

        let response = self
            .client
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        Self::read_ack(response).await
    }

    async fn logout(&self) -> Result<ApiAck, ApiError> {
        let url = self.url("logout");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        let ack = Self::read_ack(response).await?;
        if !ack.success {
            warn!(message = ?ack.message, "logout rejected by server");
        }
        Ok(ack)
    }
}
