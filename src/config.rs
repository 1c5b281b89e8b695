use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AppError, AppResult};

const MAX_TRANSITION_DELAY_MS: u64 = 5_000;

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub transition: TransitionConfig,
    pub keymap: KeymapConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TransitionConfig {
    /// Time between accepting a switch and committing it.
    pub delay_ms: u64,
    pub smooth_scroll: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 400,
            smooth_scroll: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeymapConfig {
    pub preset: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            preset: "default".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    pub site_name: String,
    pub redraw_interval_ms: u64,
    pub show_scroll_dots: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_name: "zhengzhou".to_string(),
            redraw_interval_ms: 33,
            show_scroll_dots: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> AppResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(AppError::config(
                path.display().to_string(),
                "not a regular file",
            ));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            AppError::io_with_context(source, format!("failed to read config: {}", path.display()))
        })?;
        let parsed = toml::from_str::<Self>(&raw)
            .map_err(|source| AppError::config(path.display().to_string(), source.to_string()))?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.transition.delay_ms = self.transition.delay_ms.clamp(1, MAX_TRANSITION_DELAY_MS);
        self.ui.redraw_interval_ms = self.ui.redraw_interval_ms.max(1);
        if self.ui.site_name.trim().is_empty() {
            self.ui.site_name = UiConfig::default().site_name;
        }
        if self.log.filter.trim().is_empty() {
            self.log.filter = LogConfig::default().filter;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("TVW_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("tvw").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("tvw")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("tvw").join("config.toml"));
    }
    None
}
