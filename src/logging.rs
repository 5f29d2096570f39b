use fern::colors::{Color, ColoredLevelConfig};
use log::{info, LevelFilter};
use crate::config::structs::configuration::Configuration;

pub fn log_level_filter(level: &str) -> Option<LevelFilter> {
    match level {
        "off" => Some(LevelFilter::Off),
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        _ => None,
    }
}

/// Installs the global logger. Fails if the level is unknown or a logger was
/// already installed.
pub fn setup_logging(config: &Configuration) -> Result<(), String>
{
    let level = log_level_filter(config.log_level.as_str())
        .ok_or_else(|| format!("Unknown log level encountered: '{}'", config.log_level))?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|error| format!("Failed to initialize logging: {}", error))?;
    info!("logging initialized.");
    Ok(())
}
