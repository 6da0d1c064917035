use serde::{Serialize, Serializer};
use std::fmt;

/// Accent color token derived from a listing's tint field
///
/// `Undefined` is what an absent tint field resolves to. It renders as the
/// literal `#undefined`, which CSS consumers treat as an invalid color and
/// ignore, so themed elements fall back to their default styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorToken {
    /// Hex digits with every `#` already stripped
    Hex(String),
    Undefined,
}

impl ColorToken {
    /// Parse the token as a 6-digit RGB triple
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let ColorToken::Hex(hex) = self else {
            return None;
        };
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorToken::Hex(hex) => write!(f, "#{}", hex),
            ColorToken::Undefined => f.write_str("#undefined"),
        }
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
