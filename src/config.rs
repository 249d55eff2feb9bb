use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::age::AVERAGE_LIFESPAN_YEARS;

/// Default file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "datewise.toml";

/// Top-level datewise configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Denominator for the life-progress percentage.
    #[serde(default = "default_lifespan_years")]
    pub lifespan_years: u32,

    /// Emit JSON instead of text cards.
    #[serde(default)]
    pub json: bool,

    /// Live counter settings.
    #[serde(default)]
    pub live: LiveConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiveConfig {
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

fn default_lifespan_years() -> u32 {
    AVERAGE_LIFESPAN_YEARS
}
fn default_tick_millis() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lifespan_years: default_lifespan_years(),
            json: false,
            live: LiveConfig::default(),
        }
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).context("Failed to parse configuration")?;
        if config.live.tick_millis == 0 {
            anyhow::bail!("live.tick_millis must be greater than zero");
        }
        Ok(config)
    }

    /// Loads `explicit` if given (it must exist), otherwise
    /// [`DEFAULT_CONFIG_FILE`] when present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}
