use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ua")]
#[command(about = "User administration CLI for the users REST API")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (overrides api.base_url from .ua/config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
