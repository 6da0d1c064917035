use serde::{Deserialize, Serialize};

/// One app listing as it appears in the feed
///
/// The top-level `version*`, `download_url` and `size` fields describe the
/// current release for feeds without a `versions` history. When `versions`
/// is present and non-empty its first entry is authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    pub bundle_identifier: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, rename = "iconURL", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_description: Option<String>,

    #[serde(default, rename = "screenshotURLs")]
    pub screenshot_urls: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tint_color: Option<String>,

    #[serde(default, rename = "downloadURL", skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Release history, newest first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<VersionRecord>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<PermissionTag>>,

    #[serde(default)]
    pub beta: bool,
}

impl AppRecord {
    /// Minimal record with only identity fields set
    pub fn new(bundle_identifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            bundle_identifier: bundle_identifier.into(),
            name: name.into(),
            developer_name: None,
            subtitle: None,
            icon_url: None,
            localized_description: None,
            screenshot_urls: Vec::new(),
            tint_color: None,
            download_url: None,
            version: None,
            version_date: None,
            version_description: None,
            size: None,
            versions: None,
            permissions: None,
            beta: false,
        }
    }

    /// The authoritative release entry, if the record carries a history
    pub fn latest_version(&self) -> Option<&VersionRecord> {
        self.versions.as_deref().and_then(<[VersionRecord]>::first)
    }
}

/// One entry of an app's release history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// ISO-8601 release timestamp; not guaranteed to parse
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_description: Option<String>,

    #[serde(default, rename = "downloadURL", skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// A permission the app requests, keyed by its raw tag (e.g. "background-audio")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionTag {
    #[serde(rename = "type")]
    pub key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_description: Option<String>,
}
