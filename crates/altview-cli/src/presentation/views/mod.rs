mod apps;
mod config;
mod detail;
mod news;
mod text;

pub use apps::AppListView;
pub use config::ConfigView;
pub use detail::ListingDetailView;
pub use news::NewsView;
pub use text::write_formatted;
