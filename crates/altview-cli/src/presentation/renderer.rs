use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;

use super::style::Style;
use super::view_models::CommandResultViewModel;

/// Content that knows its plain-text layout
pub trait CreateView {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a>;
}

pub struct ConsoleRenderer {
    json_mode: bool,
    style: Style,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            style: Style::detect(),
        }
    }

    pub fn with_style(json_mode: bool, style: Style) -> Self {
        Self { json_mode, style }
    }

    pub fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        print!("{}", self.render_to_string(&result)?);
        Ok(())
    }

    pub fn render_to_string<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let mut out = result.content.create_view(self.style).to_string();

        if !result.suggestions.is_empty() {
            let header = if self.style.color {
                "Tips:".yellow().bold().to_string()
            } else {
                "Tips:".to_string()
            };
            out.push_str(&format!("\n{}\n", header));
            for tip in &result.suggestions {
                out.push_str(&format!("  • {}", tip.description));
                if let Some(cmd) = &tip.command {
                    out.push_str(": ");
                    out.push_str(&self.style.link(cmd));
                }
                out.push('\n');
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::Guidance;

    #[derive(Serialize)]
    struct Greeting {
        name: String,
    }

    impl CreateView for Greeting {
        fn create_view<'a>(&'a self, _style: Style) -> Box<dyn fmt::Display + 'a> {
            Box::new(format!("Hello {}\n", self.name))
        }
    }

    fn greeting() -> CommandResultViewModel<Greeting> {
        CommandResultViewModel::new(Greeting {
            name: "Delta".to_string(),
        })
        .with_suggestion(Guidance::new("Try the news page").with_command("altview news"))
    }

    #[test]
    fn test_plain_render_appends_tips() {
        let renderer = ConsoleRenderer::with_style(false, Style::plain());
        let out = renderer.render_to_string(&greeting()).unwrap();
        assert_eq!(out, "Hello Delta\n\nTips:\n  • Try the news page: altview news\n");
    }

    #[test]
    fn test_json_render_wraps_content() {
        let renderer = ConsoleRenderer::with_style(true, Style::plain());
        let out = renderer.render_to_string(&greeting()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["content"]["name"], "Delta");
        assert_eq!(json["suggestions"][0]["command"], "altview news");
    }
}
