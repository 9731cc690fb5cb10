//! ua - user administration CLI
//!
//! Lists, registers, edits and removes users through the users REST API.
//! Command results are printed as JSON on stdout; logs go to stderr or to
//! the configured log file.
//!
//! # Examples
//!
//! ```bash
//! # Users named like "ana" created during January 2024, newest first
//! ua list --search ana --from 01-01-2024 --to 31-01-2024 --sort desc --pretty
//!
//! # Register a user
//! ua create --name "Ana Lima" --email ana@example.com --phone 11912345678
//!
//! # Change a phone number
//! ua update 7 --phone 11987654321
//! ```

use ua_cli::{Cli, Client, UserManager, logger, run};
use ua_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Explicit flag > UA_API_BASE_URL > config.toml > default
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = init_logging(&config) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    config.log_summary();

    let client = match Client::with_timeout(&config.api.base_url, config.api.timeout()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let manager = UserManager::new(client, config.list.default_sort);
    let outcome = run(&manager, cli.command).await;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&outcome.output)
    } else {
        serde_json::to_string(&outcome.output)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            if outcome.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(config: &Config) -> ua_config::ConfigErrorResult<()> {
    let log_file = config.log_file_path()?;

    if let Some(parent) = log_file.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(parent).map_err(|e| ua_config::ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    logger::initialize(config.logging.level, log_file, config.logging.colored)
}
