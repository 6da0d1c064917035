use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{self, Config};
use crate::logging;
use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;
use altview_engine::ListOptions;
use altview_types::FeedDocument;
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Local};
use std::io::Read;
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let config_path = config::resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;
    let renderer = ConsoleRenderer::new(cli.format == OutputFormat::Json);

    let Cli {
        feed, now, command, ..
    } = cli;

    match command {
        Commands::Config => handlers::config::handle(&config_path, &config, &renderer),

        Commands::App { bundle_id } => {
            let (feed, now) = open_feed(feed.as_deref(), now.as_deref(), &config)?;
            handlers::app::handle(&feed, &bundle_id, &now, &renderer)
        }

        Commands::Apps {
            include_beta,
            no_beta,
            screenshots,
        } => {
            let (feed, _) = open_feed(feed.as_deref(), now.as_deref(), &config)?;
            let options = ListOptions {
                include_beta: !no_beta && (include_beta || config.include_beta),
                preview_screenshots: screenshots.unwrap_or(config.preview_screenshots),
            };
            handlers::apps::handle(&feed, &options, &renderer)
        }

        Commands::News => {
            let (feed, now) = open_feed(feed.as_deref(), now.as_deref(), &config)?;
            handlers::news::handle(&feed, &now, &renderer)
        }
    }
}

/// Load the feed named by `--feed` (or config) and fix the reference clock
fn open_feed(
    feed: Option<&Path>,
    now: Option<&str>,
    config: &Config,
) -> Result<(FeedDocument, DateTime<FixedOffset>)> {
    let feed_path = feed
        .or(config.feed.as_deref())
        .context("No feed given: pass --feed <path> or set `feed` in config.toml")?;

    Ok((load_feed(feed_path)?, resolve_now(now)?))
}

fn load_feed(path: &Path) -> Result<FeedDocument> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read feed from stdin")?;
        buf
    } else {
        let path = config::expand_tilde(&path.to_string_lossy());
        std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read feed {}: {}", path.display(), e))?
    };

    tracing::info!(path = %path.display(), bytes = json.len(), "loading feed");
    Ok(altview_engine::parse_feed(&json)?)
}

fn resolve_now(explicit: Option<&str>) -> Result<DateTime<FixedOffset>> {
    match explicit {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("Invalid --now timestamp '{}': expected RFC 3339", raw)),
        None => Ok(Local::now().fixed_offset()),
    }
}
