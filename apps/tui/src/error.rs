use thiserror::Error;

/// Failures talking to the bookings backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("server returned {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Conditions surfaced to the user by the bookings view.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Failed to load bookings: {0}")]
    LoadFailed(String),

    #[error("Could not create booking, please try again ({0})")]
    CreateFailed(String),

    #[error("{0}")]
    LoginFailed(String),
}

impl BookingError {
    pub fn load(err: &ApiError) -> Self {
        Self::LoadFailed(err.to_string())
    }

    pub fn create(err: &ApiError) -> Self {
        Self::CreateFailed(err.to_string())
    }
}
