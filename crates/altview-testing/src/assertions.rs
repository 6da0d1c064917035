//! Assertions over the CLI's JSON output.
//!
//! All pages are wrapped as `{"content": {...}}`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that an app list page holds the expected bundle ids, in order.
pub fn assert_app_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let apps = json["content"]["apps"]
        .as_array()
        .context("Expected 'content.apps' array in JSON")?;

    let ids: Vec<&str> = apps
        .iter()
        .filter_map(|app| app["bundle_identifier"].as_str())
        .collect();

    if ids != expected {
        anyhow::bail!("Expected apps {:?}, got {:?}", expected, ids);
    }

    Ok(())
}

/// Assert that a news page lists titles in the expected order.
pub fn assert_news_titles(json: &Value, expected: &[&str]) -> Result<()> {
    let items = json["content"]["items"]
        .as_array()
        .context("Expected 'content.items' array in JSON")?;

    let titles: Vec<&str> = items
        .iter()
        .filter_map(|item| item["title"].as_str())
        .collect();

    if titles != expected {
        anyhow::bail!("Expected news {:?}, got {:?}", expected, titles);
    }

    Ok(())
}

/// Collect every link target in a serialized `FormattedText`.
pub fn link_targets(formatted: &Value) -> Vec<String> {
    formatted
        .as_array()
        .map(|segments| {
            segments
                .iter()
                .filter(|segment| segment["kind"] == "link")
                .filter_map(|segment| segment["url"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
