//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/usbtint/config.toml` or
//!    `$XDG_CONFIG_HOME/usbtint/config.toml`)
//! 3. Built-in defaults

use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::dialect::Dialect;
use crate::error::TintError;

/// Which log dialect drives the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialectKind {
    /// beagle capture board, 50-column prefix.
    #[default]
    Beagle,
    /// igep capture board, 48-column prefix.
    Igep,
    /// Kernel netconsole, 15-column timestamp prefix.
    Netconsole,
    /// usbmon trace, tag-keyed coloring.
    UsbMon,
    /// Proxy gadget filter, passthrough.
    Proxy,
}

impl DialectKind {
    /// Parse a config-file dialect name, case-insensitive.
    fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "beagle" => Some(Self::Beagle),
            "igep" => Some(Self::Igep),
            "netconsole" => Some(Self::Netconsole),
            "usbmon" => Some(Self::UsbMon),
            "proxy" => Some(Self::Proxy),
            _ => None,
        }
    }

    /// Build the dialect instance held for the process lifetime.
    pub fn dialect(self) -> Dialect {
        match self {
            Self::Beagle => Dialect::beagle(),
            Self::Igep => Dialect::igep(),
            Self::Netconsole => Dialect::netconsole(),
            Self::UsbMon => Dialect::usbmon(),
            Self::Proxy => Dialect::proxy(),
        }
    }
}

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Use [`Config::from_cli`] to build from parsed CLI arguments, or
/// [`Config::default`] for built-in defaults (useful in tests and benchmarks).
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Selected log dialect.
    pub dialect: DialectKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            dialect: DialectKind::Beagle,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, TintError> {
        // Start with defaults
        let mut config = Self::default();

        // Load config file if it exists
        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(&file_config)?;
        }

        // CLI overrides
        config.color_mode = cli.color;

        // The dialect flags are mutually exclusive (clap group).
        if cli.proxy {
            config.dialect = DialectKind::Proxy;
        } else if cli.usbmon {
            config.dialect = DialectKind::UsbMon;
        } else if cli.igep {
            config.dialect = DialectKind::Igep;
        } else if cli.netconsole {
            config.dialect = DialectKind::Netconsole;
        }

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/usbtint/config.toml` or
    /// `~/.config/usbtint/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("usbtint").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("usbtint")
                .join("config.toml")
        } else {
            PathBuf::from(".config/usbtint/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: &FileConfig) -> Result<(), TintError> {
        if let Some(ref color) = file.color {
            self.color_mode = match color.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        if let Some(ref name) = file.dialect {
            // A typo here would silently fall back to the default dialect
            // and drop every line; reject it instead.
            self.dialect = DialectKind::from_name(name).ok_or_else(|| {
                TintError::Config(format!("unknown dialect '{name}' in config file"))
            })?;
        }

        Ok(())
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    color: Option<String>,
    dialect: Option<String>,
}

impl FileConfig {
    fn load(path: &PathBuf) -> Result<Self, TintError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TintError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
