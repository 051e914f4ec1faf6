// kspdev-rs: KSP Mod Development Environment Setup Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 kspdev-rs contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. kspdev.toml (cwd, optional)
//! 3. --ini files
//! 4. KSPDEV_* env vars
//! 5. --set overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! KSPDEV_GLOBAL_DRY=true         → global.dry = true
//! KSPDEV_TOOLS_CKAN=/opt/ckan    → tools.ckan = "/opt/ckan"
//! KSPDEV_PATHS_GAME_DIR=/ksp    → paths.game_dir = "/ksp"
//! ```
//!
//! The `KSPDEVPATH` variable is not part of this hierarchy; it is read
//! directly by install resolution, matching the original tool.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

use loader::ConfigLoader;
pub use types::{GlobalConfig, PathsConfig, ToolsConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// External tool binaries.
    pub tools: ToolsConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use kspdev_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("kspdev.toml")
    ///     .with_env_prefix("KSPDEV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolves the directory fresh clones are placed under: the configured
    /// `paths.clone_root`, or the directory containing the running executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path cannot be determined.
    pub fn clone_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.paths.clone_root {
            return Ok(root.clone());
        }
        let exe = std::env::current_exe()?;
        exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            anyhow::anyhow!("executable path '{}' has no parent directory", exe.display())
        })
    }

    /// Formats all options as `section/key=value` lines for the `options`
    /// command.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let value = serde_json::to_value(self).unwrap_or_default();
        let mut lines = Vec::new();
        if let Some(sections) = value.as_object() {
            for (section, entries) in sections {
                if let Some(entries) = entries.as_object() {
                    for (key, v) in entries {
                        let rendered = match v {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        };
                        lines.push(format!("{section}/{key}={rendered}"));
                    }
                }
            }
        }
        lines
    }
}
