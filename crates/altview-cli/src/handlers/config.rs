use crate::config::Config;
use crate::presentation::{CommandResultViewModel, ConfigViewModel, ConsoleRenderer};
use anyhow::Result;
use std::path::Path;

pub fn handle(config_path: &Path, config: &Config, renderer: &ConsoleRenderer) -> Result<()> {
    let view_model = ConfigViewModel {
        path: config_path.display().to_string(),
        exists: config_path.exists(),
        config: config.clone(),
    };

    renderer.render(CommandResultViewModel::new(view_model))
}
