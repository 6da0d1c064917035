use altview_types::{AppRecord, ColorToken, FeedDocument, FormattedText, PermissionDisplay};
use chrono::{DateTime, TimeZone};
use serde::Serialize;

use crate::{Error, Result, date, listing, permission, size, text, theme};

/// Shown under the feed name when the feed has no description
pub const SOURCE_SUBTITLE_FALLBACK: &str = "Tap to get started";

/// Everything the detail page renders for one listing
#[derive(Debug, Clone, Serialize)]
pub struct ListingDetail {
    pub bundle_identifier: String,
    pub page_title: String,
    pub tint: ColorToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    pub header: AppHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub screenshots: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<FormattedText>,
    pub version: VersionInfo,
    /// `None` when the listing declares no permissions at all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<PermissionDisplay>>,
    pub source: SourceInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppHeader {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl From<&AppRecord> for AppHeader {
    fn from(app: &AppRecord) -> Self {
        Self {
            name: app.name.clone(),
            developer_name: app.developer_name.clone(),
            icon_url: app.icon_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    /// e.g. "Version 1.5"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<FormattedText>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceInfo {
    pub title: String,
    pub subtitle: String,
}

impl From<&FeedDocument> for SourceInfo {
    fn from(feed: &FeedDocument) -> Self {
        Self {
            title: feed.name.clone(),
            subtitle: feed
                .description
                .clone()
                .unwrap_or_else(|| SOURCE_SUBTITLE_FALLBACK.to_string()),
        }
    }
}

/// Resolve and enrich one listing into its detail page
///
/// An unknown bundle identifier is the only failure: the page cannot be
/// shown at all, so no enrichment runs.
pub fn build_listing_detail<Tz: TimeZone>(
    feed: &FeedDocument,
    bundle_identifier: &str,
    now: &DateTime<Tz>,
) -> Result<ListingDetail> {
    let app = feed
        .find_app(bundle_identifier)
        .ok_or_else(|| Error::ListingUnavailable(bundle_identifier.to_string()))?;
    let app = listing::resolve_listing(app);

    Ok(ListingDetail {
        bundle_identifier: app.bundle_identifier.clone(),
        page_title: format!("{} - {}", app.name, feed.name),
        tint: theme::resolve_tint(app.tint_color.as_deref()),
        install_url: app.download_url.as_deref().map(install_url),
        download_url: app.download_url.clone(),
        header: AppHeader::from(&app),
        subtitle: app.subtitle.clone(),
        screenshots: app.screenshot_urls.clone(),
        description: app.localized_description.as_deref().and_then(text::enrich_text),
        version: VersionInfo {
            label: app.version.as_ref().map(|v| format!("Version {}", v)),
            date: app
                .version_date
                .as_deref()
                .map(|raw| date::format_version_date(raw, now)),
            size: app.size.map(size::format_size),
            notes: app.version_description.as_deref().and_then(text::enrich_text),
        },
        permissions: app
            .permissions
            .as_ref()
            .map(|tags| tags.iter().map(permission::describe).collect()),
        source: SourceInfo::from(feed),
    })
}

/// AltStore deep link that installs the given package
pub fn install_url(download_url: &str) -> String {
    format!("altstore://install?url={}", download_url)
}
