use altview_types::AppRecord;

/// Flatten an app's newest release into its top-level version fields
///
/// With a non-empty `versions` history, `version`, `version_date`,
/// `version_description`, `download_url` and `size` are taken from the first
/// entry, including fields that entry leaves out. Identity and media fields
/// never change. Without a history the record is returned as is.
pub fn resolve_listing(app: &AppRecord) -> AppRecord {
    let mut resolved = app.clone();

    if let Some(latest) = app.latest_version() {
        tracing::debug!(
            bundle = %app.bundle_identifier,
            version = latest.version.as_deref().unwrap_or("-"),
            "using newest release from version history"
        );
        resolved.version = latest.version.clone();
        resolved.version_date = latest.date.clone();
        resolved.version_description = latest.localized_description.clone();
        resolved.download_url = latest.download_url.clone();
        resolved.size = latest.size;
    }

    resolved
}
