use anyhow::{anyhow, Result};
use log::LevelFilter;
use std::str::FromStr;

use crate::config::LoggingConfig;

pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level).map_err(|_| anyhow!("Invalid log level: {}", level))
}

/// Stdout belongs to the board, so diagnostics go to stderr and the optional file.
pub fn setup_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_level(&config.level)?;

    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d][%H:%M:%S"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .level_for("hyper", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(std::io::stderr());

    if let Some(ref path) = config.output {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }

    dispatch.apply()?;
    Ok(())
}
