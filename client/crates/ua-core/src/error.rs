use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown modal action: {action} {location}")]
    UnknownModalAction {
        action: String,
        location: ErrorLocation,
    },

    #[error("Invalid modal action: {message} {location}")]
    InvalidModalAction {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid sort direction: {value} {location}")]
    InvalidSortDirection {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid date: {value} {location}")]
    InvalidDate {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
