use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "altview")]
#[command(about = "View apps and news from an AltStore-style source feed", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Feed document to read ("-" for stdin); defaults to `feed` in config.toml
    #[arg(long, global = true)]
    pub feed: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Config file (overrides ALTVIEW_CONFIG and the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reference time for relative dates, as RFC 3339 (defaults to now)
    #[arg(long, global = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the detail page of one app
    App {
        /// Bundle identifier of the listing
        bundle_id: String,
    },

    /// List every app in the feed
    Apps {
        /// Also list apps marked as beta
        #[arg(long)]
        include_beta: bool,

        /// Hide beta apps even when config.toml sets `include_beta`
        #[arg(long, conflicts_with = "include_beta")]
        no_beta: bool,

        /// Screenshots to preview per app
        #[arg(long)]
        screenshots: Option<usize>,
    },

    /// List the feed's news, newest first
    News,

    /// Show the effective configuration
    Config,
}
