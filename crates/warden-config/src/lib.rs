//! # warden-config
//!
//! Layered configuration loading for Warden using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WARDEN_*` prefix, `__` as separator)
//! 2. Project-level `.warden/config.toml`
//! 3. User-level `~/.config/warden/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WARDEN_USAGE__MAX_PAGES` -> `usage.max_pages`,
//! `WARDEN_LOG__FILTER` -> `log.filter`, etc. The bare `WARDEN_LOG` is not a
//! config key; it overrides the tracing filter at [`init_tracing`].
//!
//! # Usage
//!
//! ```no_run
//! use warden_config::{WardenConfig, init_tracing};
//!
//! let config = WardenConfig::load_with_dotenv().expect("config");
//! init_tracing(&config.log).expect("tracing");
//! ```

mod error;
mod log;
mod usage;

pub use error::ConfigError;
pub use log::{LOG_ENV_VAR, LogConfig, init_tracing};
pub use usage::UsageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct WardenConfig {
    #[serde(default)]
    pub usage: UsageConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl WardenConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.usage.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let files = user_config_file()
            .into_iter()
            .chain(std::iter::once(PathBuf::from(PROJECT_CONFIG)))
            .filter(|path| path.is_file());

        files
            .fold(Figment::from(Serialized::defaults(Self::default())), |figment, path| {
                figment.merge(Toml::file(path))
            })
            .merge(env_overrides())
    }

    /// Load the nearest `.env` above the crate manifest, else the one
    /// `dotenvy` finds from the working directory. A missing file is not an
    /// error.
    fn load_dotenv_from_workspace() {
        let nearest = std::env::var_os("CARGO_MANIFEST_DIR")
            .and_then(|dir| find_dotenv(Path::new(&dir), DOTENV_SEARCH_DEPTH));

        let _ = match nearest {
            Some(path) => dotenvy::from_path(path),
            None => dotenvy::dotenv().map(drop),
        };
    }
}

/// Project-level config, relative to the working directory.
const PROJECT_CONFIG: &str = ".warden/config.toml";

/// crate dir, `crates/`, workspace root.
const DOTENV_SEARCH_DEPTH: usize = 3;

/// `WARDEN_*` overrides. The bare `WARDEN_LOG` belongs to the subscriber
/// filter (see [`LOG_ENV_VAR`]) and would otherwise land on the `log` table.
fn env_overrides() -> Env {
    Env::prefixed("WARDEN_").ignore(&["log"]).split("__")
}

fn user_config_file() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.extend(["warden", "config.toml"]);
    Some(path)
}

fn find_dotenv(start: &Path, depth: usize) -> Option<PathBuf> {
    start
        .ancestors()
        .take(depth)
        .map(|dir| dir.join(".env"))
        .find(|path| path.is_file())
}
