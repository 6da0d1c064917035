use altview_types::ColorToken;

/// Normalize a tint field: drop every `#`, the token adds exactly one back
pub fn resolve_tint(field: Option<&str>) -> ColorToken {
    match field {
        Some(raw) => ColorToken::Hex(raw.replace('#', "")),
        None => ColorToken::Undefined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markers() {
        assert_eq!(resolve_tint(Some("##1A2B3C")).to_string(), "#1A2B3C");
        assert_eq!(resolve_tint(Some("1A2B3C")).to_string(), "#1A2B3C");
        assert_eq!(resolve_tint(Some("#1A#2B3C#")).to_string(), "#1A2B3C");
    }

    #[test]
    fn test_absent_is_undefined() {
        let token = resolve_tint(None);
        assert_eq!(token, ColorToken::Undefined);
        assert_eq!(token.to_string(), "#undefined");
    }
}
