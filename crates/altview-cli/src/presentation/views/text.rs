use altview_types::{FormattedText, TextSegment};
use std::fmt;

use crate::presentation::Style;

/// Write enriched text, indenting every line and styling links
pub fn write_formatted(
    f: &mut fmt::Formatter<'_>,
    text: &FormattedText,
    indent: &str,
    style: Style,
) -> fmt::Result {
    let mut line_start = true;

    for segment in text.segments() {
        if line_start && !matches!(segment, TextSegment::Break) {
            f.write_str(indent)?;
            line_start = false;
        }
        match segment {
            TextSegment::Text { text } => f.write_str(text)?,
            TextSegment::Link { url } => f.write_str(&style.link(url))?,
            TextSegment::Break => {
                writeln!(f)?;
                line_start = true;
            }
        }
    }

    if !line_start {
        writeln!(f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use altview_engine::text::enrich_text;

    struct Quoted(FormattedText);

    impl fmt::Display for Quoted {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_formatted(f, &self.0, "> ", Style::plain())
        }
    }

    #[test]
    fn test_blank_lines_have_no_indent() {
        let text = enrich_text("a\n\nhttps://x.io b").unwrap();
        assert_eq!(Quoted(text).to_string(), "> a\n\n> https://x.io b\n");
    }

    #[test]
    fn test_trailing_break_ends_output() {
        let text = enrich_text("done\n").unwrap();
        assert_eq!(Quoted(text).to_string(), "> done\n");
    }
}
