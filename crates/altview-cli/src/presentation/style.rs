use altview_types::ColorToken;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

/// Terminal styling switch; every helper is a no-op when color is off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Color only when stdout is a terminal and NO_COLOR is unset
    pub fn detect() -> Self {
        Self {
            color: std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Bold text in the listing's tint (bold only if the tint is not an RGB triple)
    pub fn tinted(&self, text: &str, tint: &ColorToken) -> String {
        if !self.color {
            return text.to_string();
        }
        match tint.rgb() {
            Some((r, g, b)) => text.truecolor(r, g, b).bold().to_string(),
            None => text.bold().to_string(),
        }
    }

    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn link(&self, url: &str) -> String {
        if self.color {
            url.underline().cyan().to_string()
        } else {
            url.to_string()
        }
    }
}
