//! Configuration for the pitstop daemon.
//!
//! Config file: ~/.config/pitstop/config.toml or /etc/pitstop/config.toml.
//! Every field has a default, so a missing file is not an error.

use crate::assessment::RiskThresholds;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the daemon binds to.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    // Localhost only; put a reverse proxy in front for anything else
    "127.0.0.1:8530".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Risk-tier cutoff overrides.
///
/// Unset values fall back to the percentage-derived defaults for the
/// active catalog size. Deployments have historically disagreed on these
/// cutoffs, so both are explicit policy rather than constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Minimum score for the LOW tier.
    #[serde(default)]
    pub high_threshold: Option<usize>,

    /// Minimum score for the MODERATE tier.
    #[serde(default)]
    pub mid_threshold: Option<usize>,
}

impl ScoringConfig {
    /// Resolve configured cutoffs against the defaults for a catalog of
    /// `total` questions.
    pub fn thresholds_for(&self, total: usize) -> RiskThresholds {
        let defaults = RiskThresholds::for_total(total);
        RiskThresholds {
            high: self.high_threshold.unwrap_or(defaults.high),
            mid: self.mid_threshold.unwrap_or(defaults.mid),
        }
    }
}

/// Main pitstop configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PitstopConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl PitstopConfig {
    /// Default user config path: ~/.config/pitstop/config.toml
    pub fn user_config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("XDG_CONFIG_HOME"))
            .context("Cannot determine home directory")?;

        let config_dir = if home.contains("/.config") {
            PathBuf::from(home)
        } else {
            Path::new(&home).join(".config")
        };

        Ok(config_dir.join("pitstop").join("config.toml"))
    }

    /// System config path: /etc/pitstop/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/pitstop/config.toml")
    }

    /// Load configuration from file.
    ///
    /// Priority:
    /// 1. User config (~/.config/pitstop/config.toml)
    /// 2. System config (/etc/pitstop/config.toml)
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        if let Ok(user_path) = Self::user_config_path() {
            if user_path.exists() {
                return Self::load_from(&user_path);
            }
        }

        let system_path = Self::system_config_path();
        if system_path.exists() {
            return Self::load_from(&system_path);
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
