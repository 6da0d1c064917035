use altview_engine::AppListPage;
use std::fmt;

use crate::presentation::{CreateView, Style};

pub struct AppListView<'a> {
    data: &'a AppListPage,
    style: Style,
}

impl<'a> AppListView<'a> {
    pub fn new(data: &'a AppListPage, style: Style) -> Self {
        Self { data, style }
    }
}

impl<'a> fmt::Display for AppListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.style.heading(&self.data.page_title))?;
        writeln!(f)?;

        if self.data.apps.is_empty() {
            return writeln!(f, "No apps in this source.");
        }

        for app in &self.data.apps {
            write!(
                f,
                "{}  {}",
                self.style.tinted(&app.header.name, &app.tint),
                self.style.dim(&app.bundle_identifier)
            )?;
            if app.beta {
                write!(f, "  [beta]")?;
            }
            writeln!(f)?;

            if let Some(developer) = &app.header.developer_name {
                writeln!(f, "  {}", developer)?;
            }
            if !app.subtitle.is_empty() {
                writeln!(f, "  {}", app.subtitle)?;
            }
            for url in &app.screenshots {
                writeln!(f, "  {}", self.style.link(url))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl CreateView for AppListPage {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(AppListView::new(self, style))
    }
}
