use altview_engine::{Error, listing_detail};
use altview_testing::fixtures::{AppBuilder, CLIP_ID, DELTA_ID, NIGHTLY_ID, empty_feed, sample_feed};
use altview_types::{ColorToken, PermissionKind};
use chrono::{DateTime, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 4, 2, 9, 0, 0).unwrap()
}

#[test]
fn test_versioned_listing_uses_newest_release() {
    let feed = sample_feed();
    let detail = listing_detail(&feed, DELTA_ID, &now()).expect("listing exists");

    assert_eq!(detail.page_title, "Delta - Example Source");
    assert_eq!(detail.tint.to_string(), "#8A28F7");
    assert_eq!(
        detail.install_url.as_deref(),
        Some("altstore://install?url=https://example.com/delta/1.5.ipa")
    );
    assert_eq!(detail.version.label.as_deref(), Some("Version 1.5"));
    assert_eq!(detail.version.size.as_deref(), Some("44.0 MB"));
    assert_eq!(detail.screenshots.len(), 3);

    let notes = detail.version.notes.expect("release notes");
    assert_eq!(
        notes.links().collect::<Vec<_>>(),
        vec!["https://example.com/delta/1.5"]
    );
}

#[test]
fn test_release_23h_old_on_previous_day_is_yesterday() {
    let feed = sample_feed();
    let detail = listing_detail(&feed, DELTA_ID, &now()).unwrap();

    // 2023-04-01T10:00Z is 23h before `now` but on the 1st, not the 2nd
    assert_eq!(detail.version.date.as_deref(), Some("Yesterday"));
}

#[test]
fn test_description_links_skip_trailing_period() {
    let feed = sample_feed();
    let detail = listing_detail(&feed, DELTA_ID, &now()).unwrap();

    let description = detail.description.expect("description");
    assert_eq!(
        description.links().collect::<Vec<_>>(),
        vec!["https://example.com/faq"]
    );
    assert_eq!(
        description.plain_text(),
        "Delta is an all-in-one emulator.\nRead the FAQ at https://example.com/faq."
    );
}

#[test]
fn test_permissions_are_described() {
    let feed = sample_feed();
    let detail = listing_detail(&feed, DELTA_ID, &now()).unwrap();
    let permissions = detail.permissions.expect("permissions declared");

    let rows: Vec<(&str, &str, &str)> = permissions
        .iter()
        .map(|p| (p.label.as_str(), p.icon.as_str(), p.usage_description.as_str()))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("Camera", "camera-fill", "Scan QR codes for game links."),
            ("Photos", "image-fill", "No description provided."),
            ("local network", "gear-wide-connected", "Find nearby players."),
        ]
    );
    assert_eq!(
        permissions[2].kind,
        PermissionKind::Unknown("local-network".to_string())
    );
}

#[test]
fn test_unversioned_listing_snapshot() {
    let feed = sample_feed();
    let detail = listing_detail(&feed, CLIP_ID, &now()).unwrap();

    insta::assert_json_snapshot!(detail, @r##"
    {
      "bundle_identifier": "com.example.clip",
      "page_title": "Clip - Example Source",
      "tint": "#1A2B3C",
      "install_url": "altstore://install?url=https://example.com/clip/0.9.ipa",
      "download_url": "https://example.com/clip/0.9.ipa",
      "header": {
        "name": "Clip",
        "developer_name": "Example Dev",
        "icon_url": "https://example.com/clip/icon.png"
      },
      "screenshots": [],
      "description": [
        {
          "kind": "text",
          "text": "Clipboard manager."
        }
      ],
      "version": {
        "label": "Version 0.9",
        "date": "Dec 1, 2022",
        "size": "1.5 KB",
        "notes": [
          {
            "kind": "text",
            "text": "First release."
          }
        ]
      },
      "source": {
        "title": "Example Source",
        "subtitle": "Emulators and utilities, signed weekly."
      }
    }
    "##);
}

#[test]
fn test_missing_tint_and_version_fields() {
    let feed = sample_feed();
    let detail = listing_detail(&feed, NIGHTLY_ID, &now()).unwrap();

    assert_eq!(detail.tint, ColorToken::Undefined);
    assert_eq!(detail.tint.to_string(), "#undefined");
    assert_eq!(detail.version.label, None);
    assert_eq!(detail.version.date, None);
    assert_eq!(detail.version.size.as_deref(), Some("1023 B"));
    assert!(detail.description.is_none());
    assert!(detail.permissions.is_none());
}

#[test]
fn test_unknown_listing_is_unavailable() {
    let feed = sample_feed();
    let err = listing_detail(&feed, "com.example.missing", &now()).unwrap_err();

    assert!(matches!(err, Error::ListingUnavailable(ref id) if id == "com.example.missing"));
    assert_eq!(err.to_string(), "Listing unavailable: com.example.missing");
}

#[test]
fn test_source_subtitle_fallback() {
    let mut feed = empty_feed("Bare Source");
    feed.apps.push(
        AppBuilder::new("com.example.a", "A")
            .version("2.0", "2023-04-02T08:00:00Z", 1_073_741_824)
            .version("1.0", "2022-01-01T00:00:00Z", 10)
            .permission("bluetooth", None)
            .build(),
    );

    let detail = listing_detail(&feed, "com.example.a", &now()).unwrap();
    assert_eq!(detail.source.title, "Bare Source");
    assert_eq!(detail.source.subtitle, "Tap to get started");
    assert_eq!(detail.version.label.as_deref(), Some("Version 2.0"));
    assert_eq!(detail.version.date.as_deref(), Some("Today"));
    assert_eq!(detail.version.size.as_deref(), Some("1.0 GB"));
    assert_eq!(detail.download_url.as_deref(), Some("https://example.com/2.0.ipa"));

    let permissions = detail.permissions.unwrap();
    assert_eq!(permissions[0].label, "Bluetooth");
    assert_eq!(permissions[0].icon, "bluetooth");
}
