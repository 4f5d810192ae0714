use tracing::warn;

use crate::api::ApiAck;
use crate::error::{ApiError, BookingError};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const SERVER_UNREACHABLE: &str = "Unable to reach the server";

/// Admin session against the bookings backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub username: Option<String>,
}

impl Session {
    pub const fn is_authenticated(&self) -> bool {
        self.username.is_some()
    }
}

/// `success: false` surfaces the server's message, or a generic one. A bare
/// error status is a rejection too; only a failed request is unreachable.
pub fn check_login_ack(result: Result<ApiAck, ApiError>) -> Result<(), BookingError> {
    match result {
        Ok(ack) if ack.success => Ok(()),
        Ok(ack) => Err(BookingError::LoginFailed(
            ack.message
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| INVALID_CREDENTIALS.to_string()),
        )),
        Err(ApiError::Status(status)) => {
            warn!(%status, "login rejected without a message");
            Err(BookingError::LoginFailed(INVALID_CREDENTIALS.to_string()))
        }
        Err(e) => {
            warn!(error = %e, "login request failed");
            Err(BookingError::LoginFailed(SERVER_UNREACHABLE.to_string()))
        }
    }
}
