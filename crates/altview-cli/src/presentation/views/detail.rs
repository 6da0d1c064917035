use altview_engine::ListingDetail;
use std::fmt;

use super::text::write_formatted;
use crate::presentation::{CreateView, Style};

pub struct ListingDetailView<'a> {
    data: &'a ListingDetail,
    style: Style,
}

impl<'a> ListingDetailView<'a> {
    pub fn new(data: &'a ListingDetail, style: Style) -> Self {
        Self { data, style }
    }

    fn write_version(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version = &self.data.version;
        let meta: Vec<&str> = [&version.label, &version.date, &version.size]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();

        if meta.is_empty() && version.notes.is_none() {
            return Ok(());
        }

        writeln!(f, "{}", self.style.heading("What's New"))?;
        if !meta.is_empty() {
            writeln!(f, "  {}", self.style.dim(&meta.join(" · ")))?;
        }
        if let Some(notes) = &version.notes {
            write_formatted(f, notes, "  ", self.style)?;
        }
        writeln!(f)
    }

    fn write_permissions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.style.heading("Permissions"))?;

        let Some(permissions) = &self.data.permissions else {
            writeln!(f, "  No permissions declared.")?;
            return writeln!(f);
        };

        for permission in permissions {
            writeln!(
                f,
                "  {} {}",
                self.style.tinted(&permission.label, &self.data.tint),
                self.style.dim(&format!("({})", permission.icon))
            )?;
            writeln!(f, "    {}", permission.usage_description)?;
        }
        writeln!(f)
    }
}

impl<'a> fmt::Display for ListingDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;

        writeln!(f, "{}", self.style.tinted(&data.header.name, &data.tint))?;
        if let Some(developer) = &data.header.developer_name {
            writeln!(f, "{}", self.style.dim(developer))?;
        }
        if let Some(subtitle) = &data.subtitle {
            writeln!(f, "{}", subtitle)?;
        }
        writeln!(f)?;

        if let Some(install) = &data.install_url {
            writeln!(f, "Install:  {}", self.style.link(install))?;
        }
        if let Some(download) = &data.download_url {
            writeln!(f, "Download: {}", self.style.link(download))?;
        }
        if data.install_url.is_some() || data.download_url.is_some() {
            writeln!(f)?;
        }

        if let Some(description) = &data.description {
            writeln!(f, "{}", self.style.heading("Description"))?;
            write_formatted(f, description, "  ", self.style)?;
            writeln!(f)?;
        }

        self.write_version(f)?;

        if !data.screenshots.is_empty() {
            writeln!(f, "{}", self.style.heading("Screenshots"))?;
            for url in &data.screenshots {
                writeln!(f, "  {}", self.style.link(url))?;
            }
            writeln!(f)?;
        }

        self.write_permissions(f)?;

        writeln!(f, "{}", self.style.heading("Source"))?;
        writeln!(f, "  {}", data.source.title)?;
        writeln!(f, "  {}", self.style.dim(&data.source.subtitle))
    }
}

impl CreateView for ListingDetail {
    fn create_view<'a>(&'a self, style: Style) -> Box<dyn fmt::Display + 'a> {
        Box::new(ListingDetailView::new(self, style))
    }
}
