use serde::{Deserialize, Serialize};

/// Permission categories the viewer knows how to label
///
/// `Unknown` keeps the raw tag so a label can still be derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionKind {
    BackgroundAudio,
    BackgroundFetch,
    Photos,
    Camera,
    Music,
    Location,
    Microphone,
    Contacts,
    Bluetooth,
    FaceId,
    Network,
    Calendar,
    Reminders,
    Siri,
    SpeechRecognition,
    Unknown(String),
}

/// A permission ready for display: label, icon identifier and usage text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDisplay {
    pub kind: PermissionKind,
    pub label: String,
    pub icon: String,
    pub usage_description: String,
}
