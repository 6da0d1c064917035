use serde::{Deserialize, Serialize};
use std::fmt;

/// One run of enriched text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextSegment {
    /// Plain text with no line breaks
    Text { text: String },
    /// Hyperlink whose visible text is the URL itself
    Link { url: String },
    /// Explicit line break (replaces a literal newline)
    Break,
}

impl TextSegment {
    pub fn text(text: impl Into<String>) -> Self {
        TextSegment::Text { text: text.into() }
    }

    pub fn link(url: impl Into<String>) -> Self {
        TextSegment::Link { url: url.into() }
    }

    /// Source text this segment was produced from
    pub fn source_text(&self) -> &str {
        match self {
            TextSegment::Text { text } => text,
            TextSegment::Link { url } => url,
            TextSegment::Break => "\n",
        }
    }
}

/// Free text with its URLs marked as link spans and newlines as breaks
///
/// Link spans never overlap or nest, and the concatenated source text of
/// all segments equals the text that was enriched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormattedText {
    segments: Vec<TextSegment>,
}

impl FormattedText {
    pub fn new(segments: Vec<TextSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[TextSegment] {
        &self.segments
    }

    /// Link targets in reading order
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            TextSegment::Link { url } => Some(url.as_str()),
            _ => None,
        })
    }

    /// Reassemble the original text (breaks become `\n`)
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(TextSegment::source_text).collect()
    }
}

impl fmt::Display for FormattedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.source_text())?;
        }
        Ok(())
    }
}
