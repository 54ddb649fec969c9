//! Settings resolution.
//!
//! Each setting is resolved through a chain, first value wins:
//!
//! 1. Command-line flag (`--memory-path`, `--format`)
//! 2. Environment (`DAILY_REVIEW_MEMORY_PATH`, `DAILY_REVIEW_FORMAT`)
//! 3. `~/.daily-review/config.toml` (`memory-path`, `format`)
//! 4. Built-in default: `~/.daily-review/journal`, markdown
//!
//! Resolution itself is pure. Only [`Settings::load`] touches the process
//! environment and the filesystem, so components receive a plain
//! [`Settings`] and never read ambient state themselves.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use tracing::debug;

use crate::journal::{Format, UnknownFormat};

pub const MEMORY_PATH_VAR: &str = "DAILY_REVIEW_MEMORY_PATH";
pub const FORMAT_VAR: &str = "DAILY_REVIEW_FORMAT";

/// Errors that can occur while resolving settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid {var}: {source}")]
    InvalidFormat {
        var: &'static str,
        source: UnknownFormat,
    },

    #[error("could not determine home directory; pass --memory-path or set {MEMORY_PATH_VAR}")]
    NoHome,
}

/// One source of settings. Unset fields defer to the next layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Layer {
    pub memory_path: Option<PathBuf>,
    pub format: Option<Format>,
}

impl Layer {
    /// Builds a layer from raw environment values. Empty values count as unset.
    pub fn from_env_values(
        memory_path: Option<String>,
        format: Option<String>,
    ) -> Result<Self, ConfigError> {
        let memory_path = memory_path.filter(|s| !s.is_empty()).map(PathBuf::from);
        let format = format
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Format>())
            .transpose()
            .map_err(|source| ConfigError::InvalidFormat {
                var: FORMAT_VAR,
                source,
            })?;
        Ok(Self {
            memory_path,
            format,
        })
    }

    /// Reads a config file layer. A missing file is an empty layer.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the dated journal files.
    pub memory_path: PathBuf,
    pub format: Format,
}

impl Settings {
    /// Resolves settings from `flags`, the process environment, and the
    /// config file under the home directory.
    pub fn load(flags: Layer) -> Result<Self, ConfigError> {
        let home = dirs::home_dir();
        let env =
            Layer::from_env_values(env::var(MEMORY_PATH_VAR).ok(), env::var(FORMAT_VAR).ok())?;
        let file = match home.as_deref() {
            Some(home) => Layer::from_file(&config_path(home))?,
            None => Layer::default(),
        };
        Self::resolve(&[flags, env, file], home.as_deref())
    }

    /// Picks the first set value per field across `layers`, highest priority
    /// first, falling back to defaults under `home`.
    pub fn resolve(layers: &[Layer], home: Option<&Path>) -> Result<Self, ConfigError> {
        let format = layers
            .iter()
            .find_map(|l| l.format)
            .unwrap_or_default();

        let memory_path = match layers.iter().find_map(|l| l.memory_path.clone()) {
            Some(path) => path,
            None => home.map(default_memory_path).ok_or(ConfigError::NoHome)?,
        };

        debug!(memory_path = %memory_path.display(), ?format, "settings resolved");
        Ok(Self {
            memory_path,
            format,
        })
    }
}

/// The config file path: `<home>/.daily-review/config.toml`.
pub fn config_path(home: &Path) -> PathBuf {
    home.join(".daily-review").join("config.toml")
}

/// The default journal root: `<home>/.daily-review/journal`.
pub fn default_memory_path(home: &Path) -> PathBuf {
    home.join(".daily-review").join("journal")
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn layer(memory_path: Option<&str>, format: Option<Format>) -> Layer {
        Layer {
            memory_path: memory_path.map(PathBuf::from),
            format,
        }
    }

    #[test]
    fn defaults_under_home() {
        let home = Path::new("/home/me");
        let settings = Settings::resolve(&[Layer::default()], Some(home)).unwrap();

        assert_eq!(
            settings.memory_path,
            PathBuf::from("/home/me/.daily-review/journal")
        );
        assert_eq!(settings.format, Format::Markdown);
    }

    #[test]
    fn earlier_layers_win() {
        let flags = layer(Some("/flag"), None);
        let env = layer(Some("/env"), Some(Format::Structured));
        let file = layer(Some("/file"), Some(Format::Markdown));

        let settings = Settings::resolve(&[flags, env, file], None).unwrap();

        assert_eq!(settings.memory_path, PathBuf::from("/flag"));
        assert_eq!(settings.format, Format::Structured);
    }

    #[test]
    fn file_fills_what_others_leave_unset() {
        let file = layer(Some("/file"), Some(Format::Structured));

        let settings =
            Settings::resolve(&[Layer::default(), Layer::default(), file], None).unwrap();

        assert_eq!(settings.memory_path, PathBuf::from("/file"));
        assert_eq!(settings.format, Format::Structured);
    }

    #[test]
    fn missing_home_without_path_fails() {
        let err = Settings::resolve(&[Layer::default()], None).unwrap_err();
        assert!(matches!(err, ConfigError::NoHome));
    }

    #[test]
    fn env_values_ignore_empty_strings() {
        let env = Layer::from_env_values(Some(String::new()), Some(String::new())).unwrap();
        assert_eq!(env, Layer::default());
    }

    #[test]
    fn env_values_parse_format() {
        let env = Layer::from_env_values(Some("/tmp/j".into()), Some("json".into())).unwrap();
        assert_eq!(env, layer(Some("/tmp/j"), Some(Format::Structured)));
    }

    #[test]
    fn env_values_reject_unknown_format() {
        let err = Layer::from_env_values(None, Some("xml".into())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat { var: FORMAT_VAR, .. }));
    }

    #[test]
    fn missing_config_file_is_empty_layer() {
        let dir = TempDir::new().unwrap();
        let file = Layer::from_file(&config_path(dir.path())).unwrap();
        assert_eq!(file, Layer::default());
    }

    #[test]
    fn config_file_uses_kebab_case_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "memory-path = \"/data/journal\"\nformat = \"json\"\n").unwrap();

        let file = Layer::from_file(&path).unwrap();

        assert_eq!(file, layer(Some("/data/journal"), Some(Format::Structured)));
    }

    #[test]
    fn invalid_config_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = 42\n").unwrap();

        let err = Layer::from_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
