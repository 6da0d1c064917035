mod app;
mod news;

pub use app::{AppRecord, PermissionTag, VersionRecord};
pub use news::NewsItem;

use serde::{Deserialize, Serialize};

/// A source feed document: catalog metadata, its apps and its news
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedDocument {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, rename = "iconURL", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<String>,

    #[serde(default)]
    pub apps: Vec<AppRecord>,

    #[serde(default)]
    pub news: Vec<NewsItem>,
}

impl FeedDocument {
    /// Parse a feed from its JSON text
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a listing by bundle identifier (first match wins)
    pub fn find_app(&self, bundle_identifier: &str) -> Option<&AppRecord> {
        self.apps
            .iter()
            .find(|app| app.bundle_identifier == bundle_identifier)
    }
}
