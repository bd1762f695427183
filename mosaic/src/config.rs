mod checks;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use xdg::BaseDirectories;

/// User settings, read from `$XDG_CONFIG_HOME/mosaic/config.toml`.
///
/// Every field is optional in the file; missing ones take the stock value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    pub log_level: String,
    pub window_spacing: i32,
    pub drag_tick_ms: u64,
    pub settle_delay_ms: u64,
    pub startup_delay_ms: u64,
    pub sweep_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            window_spacing: 8,
            drag_tick_ms: 50,
            settle_delay_ms: 50,
            startup_delay_ms: 300,
            sweep_interval_secs: 5 * 60,
        }
    }
}

impl mosaic_core::Config for Config {
    fn window_spacing(&self) -> i32 {
        self.window_spacing
    }

    fn drag_tick(&self) -> Duration {
        Duration::from_millis(self.drag_tick_ms)
    }

    fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

/// Loads the user's config, falling back to the defaults when it cannot be read.
#[must_use]
pub fn load() -> Config {
    default_path()
        .and_then(|path| load_from_path(&path))
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

/// Where the config file lives, creating the directory if needed.
///
/// # Errors
///
/// Errors if the XDG base directories cannot be determined or the config directory cannot be
/// created.
pub fn default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("mosaic")?;
    Ok(path.place_config_file("config.toml")?)
}

/// Reads the config at `path`. A missing file is created with the defaults, which are returned.
///
/// # Errors
///
/// Errors if the file cannot be read or written, or is not valid TOML for a [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    if path.exists() {
        tracing::debug!("Config file '{}' found.", path.display());
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        tracing::debug!("No config at '{}', writing defaults.", path.display());
        let config = Config::default();
        fs::write(path, toml::to_string(&config)?)?;
        Ok(config)
    }
}
