//! Server error ids and the failure value the state machine consumes.

pub const USER_NOT_FOUND: &str = "user_not_found";
pub const EMAIL_ALREADY_REGISTERED: &str = "email_already_registered";
pub const NAME_ALREADY_REGISTERED: &str = "name_already_registered";
pub const PHONE_ALREADY_REGISTERED: &str = "phone_already_registered";
pub const ID_NOT_REGISTERED: &str = "id_not_registered";
pub const NO_DATA_MODIFIED: &str = "no_data_modified";

/// Shown when the server gave no usable message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error.";

/// A failed API call reduced to what the UI can act on. Transport failures
/// carry neither an id nor a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiFailure {
    pub error_id: Option<String>,
    pub message: Option<String>,
}

impl ApiFailure {
    pub fn server(error_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_id: Some(error_id.into()),
            message: Some(message.into()),
        }
    }

    pub fn transport() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> ServerErrorKind {
        ServerErrorKind::from_error_id(self.error_id.as_deref())
    }

    /// Message for display, falling back to [`UNKNOWN_ERROR_MESSAGE`].
    pub fn display_message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|message| !message.is_empty())
            .unwrap_or(UNKNOWN_ERROR_MESSAGE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerErrorKind {
    UserNotFound,
    EmailAlreadyRegistered,
    NameAlreadyRegistered,
    PhoneAlreadyRegistered,
    IdNotRegistered,
    NoDataModified,
    /// Unrecognized id, or none at all.
    Other(Option<String>),
}

impl ServerErrorKind {
    pub fn from_error_id(error_id: Option<&str>) -> Self {
        match error_id {
            Some(USER_NOT_FOUND) => Self::UserNotFound,
            Some(EMAIL_ALREADY_REGISTERED) => Self::EmailAlreadyRegistered,
            Some(NAME_ALREADY_REGISTERED) => Self::NameAlreadyRegistered,
            Some(PHONE_ALREADY_REGISTERED) => Self::PhoneAlreadyRegistered,
            Some(ID_NOT_REGISTERED) => Self::IdNotRegistered,
            Some(NO_DATA_MODIFIED) => Self::NoDataModified,
            other => Self::Other(other.map(String::from)),
        }
    }
}
