//! ua-cli library
//!
//! The users API client, the controller that drives the core state machine
//! against it, and the pieces of the `ua` binary.

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod controller;
pub mod logger;
pub(crate) mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError, UsersApi};
pub use commands::Commands;
pub use controller::UserManager;
pub use runner::{CommandOutcome, run};
