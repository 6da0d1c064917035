use crate::presentation::{CommandResultViewModel, ConsoleRenderer, Guidance};
use altview_engine::ListOptions;
use altview_types::FeedDocument;
use anyhow::Result;

pub fn handle(
    feed: &FeedDocument,
    options: &ListOptions,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let page = altview_engine::app_list(feed, options);
    let hidden = feed.apps.len() - page.apps.len();

    let mut result = CommandResultViewModel::new(page);
    if hidden > 0 {
        result = result.with_suggestion(
            Guidance::new(format!("{} beta app(s) hidden", hidden))
                .with_command("altview apps --include-beta"),
        );
    }

    renderer.render(result)
}
