// NOTE: altview layering
//
// types   - serde schema of the feed and of the enriched values
// engine  - pure enrichment: no I/O, clock passed in explicitly
// cli     - everything impure: reading the feed, config, logging, terminal
//
// The CLI never formats feed fields itself; it only lays out what the
// engine returns, so the same pages serialize unchanged with --format json.

mod args;
mod commands;
pub mod config;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
