//! Testing infrastructure for altview tests.
//!
//! - `fixtures`: the sample feed and record builders
//! - `world`: isolated temp-dir environment for running the CLI
//! - `assertions`: checks over the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::TestWorld;
