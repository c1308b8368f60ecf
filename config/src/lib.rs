//! Configuration for dovetail sessions.
//!
//! Raw TOML structs (all `Option`) stay private to this crate. [`Settings`]
//! is the resolved form: every field present and validated.
//!
//! ```toml
//! [evaluation]
//! on_undefined = "abort"   # or "continue"
//!
//! [window]
//! start = 0
//! offset = 10
//!
//! [search]
//! max_rounds = 64          # omit for an unbounded search
//! schedule = "diagonal"    # or "pairing"
//! ```

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;
use toml::de;

use dovetail_engine::{Schedule, SearchLimit};
use dovetail_types::{UndefinedPolicy, Window};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "DOVETAIL_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: de::Error,
    },
    #[error("invalid config at {}: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    evaluation: Option<RawEvaluation>,
    window: Option<RawWindow>,
    search: Option<RawSearch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawEvaluation {
    on_undefined: Option<UndefinedPolicy>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWindow {
    start: Option<u64>,
    offset: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSearch {
    max_rounds: Option<u64>,
    schedule: Option<Schedule>,
}

/// Resolved session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub on_undefined: UndefinedPolicy,
    pub window: Window,
    pub limit: SearchLimit,
    pub schedule: Schedule,
}

impl Settings {
    /// Load settings from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(config_path().as_deref())
    }

    /// Defaults when `path` is absent or names no file. A file that exists
    /// but cannot be read or parsed is an error, never a silent fallback.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, source);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let settings = Self::parse(&content, path)?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded config");
        Ok(settings)
    }

    /// Parse and resolve TOML text. `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig = match toml::from_str(content) {
            Ok(raw) => raw,
            Err(source) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, source);
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        raw.resolve(path)
    }
}

impl RawConfig {
    fn resolve(self, path: &Path) -> Result<Settings, ConfigError> {
        let invalid = |reason: String| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason,
        };

        let on_undefined = self
            .evaluation
            .and_then(|e| e.on_undefined)
            .unwrap_or_default();

        let raw_window = self.window.unwrap_or_default();
        let offset = raw_window.offset.unwrap_or(Window::DEFAULT_OFFSET);
        if offset == 0 {
            return Err(invalid("window.offset must be at least 1".to_string()));
        }
        let window = Window::new(raw_window.start.unwrap_or(0), offset)
            .map_err(|e| invalid(e.to_string()))?;

        let raw_search = self.search.unwrap_or_default();
        let limit = match raw_search.max_rounds {
            None => SearchLimit::Unbounded,
            Some(0) => {
                return Err(invalid("search.max_rounds must be at least 1".to_string()));
            }
            Some(rounds) => SearchLimit::Rounds(rounds),
        };

        Ok(Settings {
            on_undefined,
            window,
            limit,
            schedule: raw_search.schedule.unwrap_or_default(),
        })
    }
}

/// `$DOVETAIL_CONFIG`, else `~/.dovetail/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".dovetail").join("config.toml"))
}
