use anyhow::Result;
use log::info;
use std::path::Path;

use listings::{ demo, Console, ScenarioConfig };

/// Run the showcase, optionally from a scenario file
pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            info!("Loading scenario from {}", path.display());
            ScenarioConfig::from_file(path)?
        }
        None => ScenarioConfig::default(),
    };

    demo::run(&config, &Console::stdout())?;
    Ok(())
}
