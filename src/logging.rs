use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Logs go to a file: stdout belongs to the game screen.
pub fn init_logger(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), file).context("Logger already initialized")
}
