use error_location::ErrorLocation;
use serde::Deserialize;
use std::panic::Location;
use thiserror::Error;
use ua_core::ApiFailure;

/// Error body returned by the users API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "errorId")]
    error_id: Option<String>,
    msg: Option<String>,
}

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error {status}: {message} (errorId: {error_id}) {location}")]
    Api {
        status: u16,
        error_id: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected HTTP status {status} {location}")]
    Status { status: u16, location: ErrorLocation },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {message} {location}")]
    InvalidUrl {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Error for a non-success response. A body carrying an `errorId` gives
    /// [`ClientError::Api`]; anything else gives [`ClientError::Status`].
    #[track_caller]
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(ApiErrorBody {
                error_id: Some(error_id),
                msg,
            }) => ClientError::Api {
                status,
                error_id,
                message: msg.unwrap_or_default(),
                location,
            },
            _ => ClientError::Status { status, location },
        }
    }

    #[track_caller]
    pub fn invalid_url<S: Into<String>>(message: S) -> Self {
        ClientError::InvalidUrl {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The part of this error the UI can act on. Only structured API errors
    /// carry an id and message; everything else is an unknown failure.
    pub fn failure(&self) -> ApiFailure {
        match self {
            ClientError::Api {
                error_id, message, ..
            } => ApiFailure {
                error_id: Some(error_id.clone()),
                message: (!message.is_empty()).then(|| message.clone()),
            },
            _ => ApiFailure::transport(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
