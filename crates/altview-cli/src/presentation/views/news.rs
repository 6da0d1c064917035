use altview_engine::NewsPage;
use std::fmt;

use super::text::write_formatted;
use crate::presentation::{CreateView, Style};

pub struct NewsView<'a> {
    data: &'a NewsPage,
    style: Style,
}

impl<'a> NewsView<'a> {
    pub fn new(data: &'a NewsPage, style: Style) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for NewsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.style.heading(&self.data.page_title))?;
        writeln!(f)?;

        if self.data.items.is_empty() {
            return writeln!(f, "No news yet.");
        }

        for item in &self.data.items {
            let title = item.title.as_deref().unwrap_or("(untitled)");
            write!(f, "{}", self.style.tinted(title, &item.tint))?;
            if let Some(date) = &item.date {
                write!(f, "  {}", self.style.dim(date))?;
            }
            writeln!(f)?;

            if let Some(caption) = &item.caption {
                write_formatted(f, caption, "  ", self.style)?;
            }
            if let Some(url) = &item.url {
                writeln!(f, "  {}", self.style.link(url))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl CreateView for NewsPage {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(NewsView::new(self, style))
    }
}
