use std::fmt;

use crate::presentation::{ConfigViewModel, CreateView, Style};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    style: Style,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel, style: Style) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Config file: {}", self.data.path)?;
        if !self.data.exists {
            write!(f, " {}", self.style.dim("(not found, using defaults)"))?;
        }
        writeln!(f)?;
        writeln!(f)?;

        match self.data.config.to_toml() {
            Ok(text) => write!(f, "{}", text),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView::new(self, style))
    }
}
