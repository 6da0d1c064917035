use crate::presentation::{CommandResultViewModel, ConsoleRenderer};
use altview_types::FeedDocument;
use anyhow::Result;
use chrono::{DateTime, FixedOffset};

pub fn handle(
    feed: &FeedDocument,
    bundle_id: &str,
    now: &DateTime<FixedOffset>,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let detail = altview_engine::listing_detail(feed, bundle_id, now)?;
    tracing::debug!(bundle = bundle_id, title = %detail.page_title, "built listing detail");

    renderer.render(CommandResultViewModel::new(detail))
}
