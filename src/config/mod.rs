mod basic;

pub use basic::BasicConfig;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Storage and logging settings (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

impl Config {
    /// Builds a Figment that merges defaults and the TOML file at `path`, if it exists.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        let path = path.as_ref();
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if path.is_file() {
            figment.merge(Toml::file(path))
        } else {
            figment
        }
    }

    /// Loads configuration by merging defaults and `config.toml` if present.
    ///
    /// A file that exists but does not parse is an error, never a silent fallback to defaults.
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, figment::Error> {
        Self::figment(path).extract()
    }
}
