use altview_types::{ColorToken, FeedDocument, FormattedText, NewsItem};
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::cmp::Ordering;

use crate::detail::AppHeader;
use crate::{date, text, theme};

/// Knobs for the "all apps" page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub include_beta: bool,
    /// Screenshots shown per app card
    pub preview_screenshots: usize,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            include_beta: false,
            preview_screenshots: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AppListPage {
    pub page_title: String,
    pub apps: Vec<AppListEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppListEntry {
    pub bundle_identifier: String,
    pub header: AppHeader,
    pub tint: ColorToken,
    pub subtitle: String,
    pub screenshots: Vec<String>,
    pub beta: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsPage {
    pub page_title: String,
    pub items: Vec<NewsEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<FormattedText>,
    pub tint: ColorToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

/// Build the "all apps" page in feed order
pub fn build_app_list(feed: &FeedDocument, options: &ListOptions) -> AppListPage {
    let apps = feed
        .apps
        .iter()
        .filter(|app| options.include_beta || !app.beta)
        .map(|app| AppListEntry {
            bundle_identifier: app.bundle_identifier.clone(),
            header: AppHeader::from(app),
            tint: theme::resolve_tint(app.tint_color.as_deref()),
            subtitle: app.subtitle.clone().unwrap_or_default(),
            screenshots: app
                .screenshot_urls
                .iter()
                .take(options.preview_screenshots)
                .cloned()
                .collect(),
            beta: app.beta,
        })
        .collect();

    AppListPage {
        page_title: format!("Apps - {}", feed.name),
        apps,
    }
}

/// Build the "all news" page, newest first
///
/// Items whose date is missing or unparseable go after every dated item and
/// keep their feed order.
pub fn build_news_page<Tz: TimeZone>(feed: &FeedDocument, now: &DateTime<Tz>) -> NewsPage {
    let tz = now.timezone();
    let mut dated: Vec<(Option<i64>, &NewsItem)> = feed
        .news
        .iter()
        .map(|item| {
            let ts = item
                .date
                .as_deref()
                .and_then(|raw| date::parse_feed_date(raw, &tz))
                .map(|dt| dt.timestamp_millis());
            (ts, item)
        })
        .collect();

    dated.sort_by(|(a, _), (b, _)| newest_first(*a, *b));

    let items = dated
        .into_iter()
        .map(|(_, item)| NewsEntry {
            title: item.title.clone(),
            date: item
                .date
                .as_deref()
                .map(|raw| date::format_version_date(raw, now)),
            caption: item.caption.as_deref().and_then(text::enrich_text),
            tint: theme::resolve_tint(item.tint_color.as_deref()),
            image_url: item.image_url.clone(),
            url: item.url.clone(),
            app_id: item.app_id.clone(),
        })
        .collect();

    NewsPage {
        page_title: format!("News - {}", feed.name),
        items,
    }
}

fn newest_first(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
