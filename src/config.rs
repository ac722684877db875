//! Application configuration.
//!
//! Settings come from an optional JSON file and from the command line, with the
//! command line taking precedence. The file is looked up at `--config <FILE>` or,
//! by default, `<config dir>/timeless/config.json`. A missing default file is not
//! an error; a malformed one is logged and ignored.
//!
//! Nothing is ever written back: the display keeps no state between runs.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::presenter::{DEFAULT_CLOCK_PERIOD, DEFAULT_QUOTE_PERIOD};
use crate::theme::ThemeMode;

const CONFIG_DIR_NAME: &str = "timeless";
const CONFIG_FILE_NAME: &str = "config.json";

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} requires an argument")]
    MissingValue(&'static str),
    #[error("invalid value `{value}` for {flag}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("failed to read config file `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON file replacing the built-in quote catalog
    pub quotes_path: Option<PathBuf>,
    /// Directory holding `MonainnRegular.otf` and `BadUnicorn.ttf`
    pub font_dir: Option<PathBuf>,
    pub clock_interval_secs: u64,
    pub quote_interval_secs: u64,
    /// Startup theme; `None` follows the host appearance
    pub initial_theme: Option<ThemeMode>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            quotes_path: None,
            font_dir: None,
            clock_interval_secs: DEFAULT_CLOCK_PERIOD.as_secs(),
            quote_interval_secs: DEFAULT_QUOTE_PERIOD.as_secs(),
            initial_theme: None,
        }
    }
}

impl AppConfig {
    pub fn clock_period(&self) -> Duration {
        Duration::from_secs(self.clock_interval_secs.max(1))
    }

    pub fn quote_period(&self) -> Duration {
        Duration::from_secs(self.quote_interval_secs.max(1))
    }

    /// Parses a config file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the file named on the command line (or the default one) and applies
    /// command-line overrides on top.
    pub fn resolve(args: &CommandLine) -> Self {
        let mut config = match (&args.config_path, Self::default_path()) {
            (Some(path), _) => Self::load_logged(path, true),
            (None, Some(path)) => Self::load_logged(&path, false),
            (None, None) => Self::default(),
        };
        args.apply_to(&mut config);
        config
    }

    fn load_logged(path: &Path, explicit: bool) -> Self {
        match Self::from_path(path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded configuration");
                config
            }
            Err(ConfigError::Io { source, .. })
                if !explicit && source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(err) => {
                tracing::warn!(error = %err, "using default configuration");
                Self::default()
            }
        }
    }
}

/// Parsed command-line arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandLine {
    pub config_path: Option<PathBuf>,
    pub quotes_path: Option<PathBuf>,
    pub font_dir: Option<PathBuf>,
    pub theme: Option<ThemeMode>,
    pub help: bool,
}

impl CommandLine {
    /// Parses arguments, excluding the program name.
    ///
    /// Unknown arguments are logged and skipped.
    pub fn parse<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CommandLine::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    parsed.config_path = Some(PathBuf::from(args.next().ok_or(ConfigError::MissingValue("--config"))?));
                }
                "--quotes" => {
                    parsed.quotes_path = Some(PathBuf::from(args.next().ok_or(ConfigError::MissingValue("--quotes"))?));
                }
                "--fonts" => {
                    parsed.font_dir = Some(PathBuf::from(args.next().ok_or(ConfigError::MissingValue("--fonts"))?));
                }
                "--theme" => {
                    let value = args.next().ok_or(ConfigError::MissingValue("--theme"))?;
                    parsed.theme = Some(match value.as_str() {
                        "dark" => ThemeMode::Dark,
                        "light" => ThemeMode::Light,
                        _ => return Err(ConfigError::InvalidValue { flag: "--theme", value }),
                    });
                }
                "--dark" => parsed.theme = Some(ThemeMode::Dark),
                "--light" => parsed.theme = Some(ThemeMode::Light),
                "-h" | "--help" => parsed.help = true,
                _ => {
                    tracing::warn!(argument = %arg, "unknown argument");
                }
            }
        }

        Ok(parsed)
    }

    fn apply_to(&self, config: &mut AppConfig) {
        if let Some(path) = &self.quotes_path {
            config.quotes_path = Some(path.clone());
        }
        if let Some(dir) = &self.font_dir {
            config.font_dir = Some(dir.clone());
        }
        if let Some(theme) = self.theme {
            config.initial_theme = Some(theme);
        }
    }

    pub fn usage() -> &'static str {
        "Timeless - how much of today is left\n\
         Usage: timeless-gui [OPTIONS]\n\
         \n\
         OPTIONS:\n\
         \x20 --config <FILE>        Configuration file (default: <config dir>/timeless/config.json)\n\
         \x20 --quotes <FILE>        JSON quote catalog replacing the built-in quotes\n\
         \x20 --fonts <DIR>          Directory with MonainnRegular.otf and BadUnicorn.ttf\n\
         \x20 --theme <dark|light>   Startup theme (default: follow the system)\n\
         \x20 --dark, --light        Shorthands for --theme\n\
         \x20 -h, --help             Show this help message\n"
    }
}
