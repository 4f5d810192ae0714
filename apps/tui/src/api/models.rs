use serde::{Deserialize, Deserializer, Serialize};

/// A booking as returned by `GET /bookings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBooking {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub date: String,
    #[serde(default)]
    pub slot: String,
    #[serde(default, alias = "reminderSent", deserialize_with = "null_as_false")]
    pub reminder_sent: bool,
    #[serde(default, alias = "feedbackSent", deserialize_with = "null_as_false")]
    pub feedback_sent: bool,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// The backend's flag columns are nullable; `null` means not sent.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Body of `POST /bookings`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub date: String,
    pub slot: String,
}

impl NewBooking {
    /// Every field is required by the backend.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.phone, &self.email, &self.date, &self.slot]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

/// Body of `POST /login`
#[derive(Debug, Clone, Default, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// `{success, message?}` acknowledgement shared by the write endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiAck {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}
