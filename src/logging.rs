use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::error::{AppError, AppResult};

/// Overrides the configured filter when set, e.g. `TVW_LOG=tvw=debug`.
pub const LOG_FILTER_ENV: &str = "TVW_LOG";

/// Installs the global subscriber when a log file is configured.
///
/// The terminal is owned by the UI, so logs only ever go to a file. Returns
/// `false` without installing anything when no file is set.
pub fn init(config: &LogConfig, override_file: Option<&Path>) -> AppResult<bool> {
    let Some(path) = override_file.or(config.file.as_deref()) else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(source, format!("failed to open log file: {}", path.display()))
        })?;

    let filter = build_filter(&config.filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| AppError::logging(err.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(true)
}

fn build_filter(configured: &str) -> AppResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_FILTER_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(configured)
        .map_err(|err| AppError::logging(format!("bad filter {configured:?}: {err}")))
}

#[cfg(test)]
mod tests {
    use super::{build_filter, init};
    use crate::config::LogConfig;

    #[test]
    fn init_without_file_installs_nothing() {
        let installed = init(&LogConfig::default(), None).expect("no-op init should succeed");
        assert!(!installed);
    }

    #[test]
    fn configured_filter_is_parsed() {
        if std::env::var_os(super::LOG_FILTER_ENV).is_some() {
            return;
        }
        assert!(build_filter("tvw=debug,info").is_ok());
    }
}
