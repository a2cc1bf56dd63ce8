//! CLI interface for intraday-rth
//!
//! Provides subcommands for:
//! - `fetch`: Fetch RTH one-minute bars for one or more symbols
//! - `window`: Show the provider query window for a date
//! - `config`: Show the effective configuration

mod fetch;
mod window;

pub use fetch::FetchArgs;
pub use window::WindowArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "intraday-rth")]
#[command(about = "One-minute intraday bars restricted to US regular trading hours")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch RTH bars and print them as JSON
    Fetch(FetchArgs),
    /// Show the provider query window for a date
    Window(WindowArgs),
    /// Show the effective configuration
    Config,
}
