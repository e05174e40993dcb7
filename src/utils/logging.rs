use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use crate::error::Result;

/// Initialize the global logger with the given level, optionally mirroring
/// every line into an append-mode log file.
pub fn initialize_logger(log_path: Option<&Path>, log_level_str: &str) -> Result<()> {
    let log_level = match log_level_str.parse::<log::LevelFilter>() {
        Ok(level) => level,
        Err(_) => log::LevelFilter::Debug, // Default to Debug if invalid
    };

    let log_file = match log_path {
        Some(path) => Some(Mutex::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        )),
        None => None,
    };

    let logger = env_logger::Builder::new()
        .format(move |buf, record| {
            let timestamp = Utc::now().to_rfc3339();
            let line = format!("{} [{}] - {}", timestamp, record.level(), record.args());

            if let Some(file) = &log_file
                && let Ok(mut file) = file.lock()
            {
                let _ = writeln!(file, "{line}");
            }

            writeln!(buf, "{line}")
        })
        .filter_level(log_level)
        .build();

    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(log_level);

    Ok(())
}
