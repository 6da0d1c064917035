use altview_types::{FormattedText, TextSegment};
use regex::Regex;
use std::sync::LazyLock;

/// URLs with an http, https, ftp or file scheme. The final character must
/// not be sentence punctuation, so "see https://a.io." links "https://a.io".
/// The word boundary is ASCII-only: a scheme glued to CJK or accented text
/// still starts a link.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)(?i:https?|ftp|file)://[-A-Za-z0-9+&@#/%?=~_|!:,.;]*[-A-Za-z0-9+&@#/%=~_|]")
        .unwrap()
});

/// Mark URLs as link spans and newlines as breaks
///
/// Matches are taken in a single left-to-right pass and each one consumes
/// its span, so link spans never overlap and no text is dropped or repeated.
/// Returns `None` for empty input.
pub fn enrich_text(input: &str) -> Option<FormattedText> {
    if input.is_empty() {
        return None;
    }

    let mut segments = Vec::new();
    let mut cursor = 0;

    for url in URL_REGEX.find_iter(input) {
        push_plain(&mut segments, &input[cursor..url.start()]);
        segments.push(TextSegment::link(url.as_str()));
        cursor = url.end();
    }
    push_plain(&mut segments, &input[cursor..]);

    Some(FormattedText::new(segments))
}

fn push_plain(segments: &mut Vec<TextSegment>, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            segments.push(TextSegment::Break);
        }
        if !line.is_empty() {
            segments.push(TextSegment::text(line));
        }
    }
}
