// Engine module - content enrichment and page assembly
// This layer sits between the raw feed document (types) and CLI presentation

pub mod catalog;
pub mod date;
pub mod detail;
mod error;
pub mod listing;
pub mod permission;
pub mod size;
pub mod text;
pub mod theme;

pub use catalog::{AppListEntry, AppListPage, ListOptions, NewsEntry, NewsPage};
pub use detail::{AppHeader, ListingDetail, SourceInfo, VersionInfo};
pub use error::{Error, Result};

use altview_types::FeedDocument;
use chrono::{DateTime, TimeZone};

// Façade API - Stable public interface for CLI layer
// CLI should use these functions instead of directly accessing internal modules

/// Parse a feed document from its JSON text
pub fn parse_feed(json: &str) -> Result<FeedDocument> {
    let feed = FeedDocument::from_json(json)?;
    tracing::debug!(
        feed = %feed.name,
        apps = feed.apps.len(),
        news = feed.news.len(),
        "parsed feed document"
    );
    Ok(feed)
}

/// Build the detail page for one listing
pub fn listing_detail<Tz: TimeZone>(
    feed: &FeedDocument,
    bundle_identifier: &str,
    now: &DateTime<Tz>,
) -> Result<ListingDetail> {
    detail::build_listing_detail(feed, bundle_identifier, now)
}

/// Build the "all apps" page
pub fn app_list(feed: &FeedDocument, options: &ListOptions) -> AppListPage {
    catalog::build_app_list(feed, options)
}

/// Build the "all news" page
pub fn news_page<Tz: TimeZone>(feed: &FeedDocument, now: &DateTime<Tz>) -> NewsPage {
    catalog::build_news_page(feed, now)
}
