//! Sample data for tests.
//!
//! `sample_feed()` is a small but complete feed covering a versioned app,
//! an unversioned app, a beta app, and news with dated, undated and
//! unparseable entries.

use altview_types::{AppRecord, FeedDocument, PermissionTag, VersionRecord};

/// Raw JSON of the sample feed
pub const SAMPLE_FEED_JSON: &str = include_str!("../samples/feed.json");

pub const DELTA_ID: &str = "com.example.delta";
pub const CLIP_ID: &str = "com.example.clip";
pub const NIGHTLY_ID: &str = "com.example.nightly";

/// The sample feed, parsed
pub fn sample_feed() -> FeedDocument {
    FeedDocument::from_json(SAMPLE_FEED_JSON).expect("sample feed is valid")
}

/// Empty feed with the given name
pub fn empty_feed(name: &str) -> FeedDocument {
    FeedDocument {
        name: name.to_string(),
        identifier: None,
        description: None,
        icon_url: None,
        tint_color: None,
        apps: Vec::new(),
        news: Vec::new(),
    }
}

/// Fluent builder for app records
pub struct AppBuilder {
    app: AppRecord,
}

impl AppBuilder {
    pub fn new(bundle_identifier: &str, name: &str) -> Self {
        Self {
            app: AppRecord::new(bundle_identifier, name),
        }
    }

    pub fn tint(mut self, tint: &str) -> Self {
        self.app.tint_color = Some(tint.to_string());
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.app.localized_description = Some(text.to_string());
        self
    }

    pub fn size(mut self, size: u64) -> Self {
        self.app.size = Some(size);
        self
    }

    pub fn beta(mut self) -> Self {
        self.app.beta = true;
        self
    }

    pub fn screenshots(mut self, count: usize) -> Self {
        let id = self.app.bundle_identifier.clone();
        self.app.screenshot_urls = (1..=count)
            .map(|i| format!("https://example.com/{}/{}.png", id, i))
            .collect();
        self
    }

    pub fn version(mut self, version: &str, date: &str, size: u64) -> Self {
        self.app
            .versions
            .get_or_insert_with(Vec::new)
            .push(VersionRecord {
                version: Some(version.to_string()),
                date: Some(date.to_string()),
                localized_description: Some(format!("Release {}", version)),
                download_url: Some(format!("https://example.com/{}.ipa", version)),
                size: Some(size),
            });
        self
    }

    pub fn permission(mut self, key: &str, usage_description: Option<&str>) -> Self {
        self.app
            .permissions
            .get_or_insert_with(Vec::new)
            .push(PermissionTag {
                key: key.to_string(),
                usage_description: usage_description.map(str::to_string),
            });
        self
    }

    pub fn build(self) -> AppRecord {
        self.app
    }
}
