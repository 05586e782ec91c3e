use std::{path::Path, time::Duration};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Prefix of environment variable overrides, e.g. `DRAFTORDER_REVEAL__STEP_MS`.
pub const ENV_PREFIX: &str = "DRAFTORDER_";

/// Largest accepted `reveal.countdown_from`.
pub const MAX_COUNTDOWN_FROM: u32 = 60;

/// Configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reveal: RevealConfig,
    pub share: ShareConfig,
}

impl Config {
    /// Defaults, then the TOML file at `path` (if given), then the environment.
    ///
    /// An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            if !path.is_file() {
                return Err(Error::MissingConfigFile(path.to_path_buf()));
            }
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Toml::file(path));
        }
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        config.reveal.validate()?;
        Ok(config)
    }
}

/// Reveal timings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Countdown starts here and ticks down to 1. `0` disables it.
    pub countdown_from: u32,
    pub countdown_tick_ms: u64,
    /// Time between two reveals.
    pub step_ms: u64,
    /// Pause between the last reveal and completion.
    pub finish_delay_ms: u64,
    /// Fast forward is offered once this many picks are shown.
    pub fast_forward_after: usize,
}

impl RevealConfig {
    /// Reject values no reveal can sensibly use.
    pub fn validate(&self) -> Result<()> {
        if self.countdown_from > MAX_COUNTDOWN_FROM {
            return Err(Error::InvalidConfig(format!(
                "reveal.countdown_from must be at most {MAX_COUNTDOWN_FROM}, got {}",
                self.countdown_from
            )));
        }
        Ok(())
    }

    pub fn countdown_tick(&self) -> Duration {
        Duration::from_millis(self.countdown_tick_ms)
    }

    pub fn step(&self) -> Duration {
        Duration::from_millis(self.step_ms)
    }

    pub fn finish_delay(&self) -> Duration {
        Duration::from_millis(self.finish_delay_ms)
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            countdown_from: 3,
            countdown_tick_ms: 1_000,
            step_ms: 3_000,
            finish_delay_ms: 500,
            fast_forward_after: 3,
        }
    }
}

/// Share link settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// Page the share links point to.
    pub base_url: String,
}

impl ShareConfig {
    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/".to_string(),
        }
    }
}
