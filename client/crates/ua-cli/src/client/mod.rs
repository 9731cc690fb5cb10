pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod users_api;

pub use client::Client;
pub use error::{ClientError, Result as CliClientResult};
pub use users_api::UsersApi;
