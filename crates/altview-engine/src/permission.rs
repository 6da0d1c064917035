use altview_types::{PermissionDisplay, PermissionKind, PermissionTag};

/// Icon for permissions with no dedicated artwork
pub const FALLBACK_ICON: &str = "gear-wide-connected";

/// Shown when a permission carries no usage description
pub const MISSING_USAGE_DESCRIPTION: &str = "No description provided.";

/// Map a raw permission tag to its kind
pub fn classify(key: &str) -> PermissionKind {
    match key {
        "background-audio" => PermissionKind::BackgroundAudio,
        "background-fetch" => PermissionKind::BackgroundFetch,
        "photos" => PermissionKind::Photos,
        "camera" => PermissionKind::Camera,
        "music" => PermissionKind::Music,
        "location" => PermissionKind::Location,
        "microphone" => PermissionKind::Microphone,
        "contacts" => PermissionKind::Contacts,
        "bluetooth" => PermissionKind::Bluetooth,
        "faceid" => PermissionKind::FaceId,
        "network" => PermissionKind::Network,
        "calendar" | "calendars" => PermissionKind::Calendar,
        "reminders" => PermissionKind::Reminders,
        "siri" => PermissionKind::Siri,
        "speech-recognition" => PermissionKind::SpeechRecognition,
        other => {
            tracing::debug!(key = other, "unrecognized permission tag");
            PermissionKind::Unknown(other.to_string())
        }
    }
}

/// Display label; unknown tags read as their key with hyphens spaced out
pub fn label(kind: &PermissionKind) -> String {
    let label = match kind {
        PermissionKind::BackgroundAudio => "Background Audio",
        PermissionKind::BackgroundFetch => "Background Fetch",
        PermissionKind::Photos => "Photos",
        PermissionKind::Camera => "Camera",
        PermissionKind::Music => "Music Library",
        PermissionKind::Location => "Location",
        PermissionKind::Microphone => "Microphone",
        PermissionKind::Contacts => "Contacts",
        PermissionKind::Bluetooth => "Bluetooth",
        PermissionKind::FaceId => "Face ID",
        PermissionKind::Network => "Network",
        PermissionKind::Calendar => "Calendar",
        PermissionKind::Reminders => "Reminders",
        PermissionKind::Siri => "Siri",
        PermissionKind::SpeechRecognition => "Speech Recognition",
        PermissionKind::Unknown(key) => return key.replace('-', " "),
    };
    label.to_string()
}

/// Bootstrap icon identifier (without the `bi-` prefix)
pub fn icon(kind: &PermissionKind) -> &'static str {
    match kind {
        PermissionKind::BackgroundAudio => "volume-up-fill",
        PermissionKind::BackgroundFetch => "arrow-repeat",
        PermissionKind::Photos => "image-fill",
        PermissionKind::Camera => "camera-fill",
        PermissionKind::Music => "music-note-list",
        PermissionKind::Location => "geo-alt-fill",
        PermissionKind::Microphone => "mic-fill",
        PermissionKind::Contacts => "people-fill",
        PermissionKind::Bluetooth => "bluetooth",
        PermissionKind::FaceId => "person-bounding-box",
        PermissionKind::Network => "wifi",
        PermissionKind::Calendar => "calendar-date",
        PermissionKind::Reminders => "list-ul",
        PermissionKind::SpeechRecognition => "soundwave",
        PermissionKind::Siri | PermissionKind::Unknown(_) => FALLBACK_ICON,
    }
}

/// (label, icon) pair for a raw tag
pub fn label_and_icon(key: &str) -> (String, &'static str) {
    let kind = classify(key);
    (label(&kind), icon(&kind))
}

/// Everything the view needs to show one permission row
pub fn describe(tag: &PermissionTag) -> PermissionDisplay {
    let kind = classify(&tag.key);
    PermissionDisplay {
        label: label(&kind),
        icon: icon(&kind).to_string(),
        usage_description: tag
            .usage_description
            .clone()
            .unwrap_or_else(|| MISSING_USAGE_DESCRIPTION.to_string()),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_permissions() {
        assert_eq!(
            label_and_icon("bluetooth"),
            ("Bluetooth".to_string(), "bluetooth")
        );
        assert_eq!(
            label_and_icon("music"),
            ("Music Library".to_string(), "music-note-list")
        );
        assert_eq!(
            label_and_icon("faceid"),
            ("Face ID".to_string(), "person-bounding-box")
        );
        assert_eq!(label_and_icon("siri").1, FALLBACK_ICON);
    }

    #[test]
    fn test_calendar_synonyms() {
        assert_eq!(classify("calendar"), PermissionKind::Calendar);
        assert_eq!(classify("calendars"), PermissionKind::Calendar);
    }

    #[test]
    fn test_unknown_fallback() {
        assert_eq!(
            label_and_icon("unknown-thing"),
            ("unknown thing".to_string(), FALLBACK_ICON)
        );
        // Lookup is exact; case variants are not folded
        assert_eq!(
            classify("Camera"),
            PermissionKind::Unknown("Camera".to_string())
        );
    }

    #[test]
    fn test_describe_usage_description() {
        let with_text = PermissionTag {
            key: "camera".to_string(),
            usage_description: Some("Scan QR codes".to_string()),
        };
        let display = describe(&with_text);
        assert_eq!(display.kind, PermissionKind::Camera);
        assert_eq!(display.label, "Camera");
        assert_eq!(display.icon, "camera-fill");
        assert_eq!(display.usage_description, "Scan QR codes");

        let without_text = PermissionTag {
            key: "local-network".to_string(),
            usage_description: None,
        };
        let display = describe(&without_text);
        assert_eq!(display.label, "local network");
        assert_eq!(display.usage_description, MISSING_USAGE_DESCRIPTION);
    }
}
