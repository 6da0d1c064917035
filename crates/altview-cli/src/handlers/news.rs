use crate::presentation::{CommandResultViewModel, ConsoleRenderer};
use altview_types::FeedDocument;
use anyhow::Result;
use chrono::{DateTime, FixedOffset};

pub fn handle(
    feed: &FeedDocument,
    now: &DateTime<FixedOffset>,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let page = altview_engine::news_page(feed, now);
    renderer.render(CommandResultViewModel::new(page))
}
