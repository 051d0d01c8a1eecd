//! # Tool Configuration
//!
//! Paths and conventions used by both the menu resolver and the scaffolder.
//! Nothing in the core hard-codes `app/admin`; it all flows from [`ToolConfig`].
//!
//! ## Sources
//!
//! Later sources win:
//!
//! 1. Built-in defaults
//! 2. `trestlekit.yml` in the working directory, or the file named by `--config`
//! 3. Environment variables
//! 4. Command-line flags (applied by the CLI)
//!
//! ## Environment Variables
//!
//! | Variable                | Field        | Default              |
//! |-------------------------|--------------|----------------------|
//! | `TRESTLEKIT_ADMIN_ROOT` | `admin_root` | `app/admin`          |
//! | `TRESTLEKIT_MENU_FILE`  | `menu_file`  | `app/admin/menu.yml` |
//! | `TRESTLEKIT_EXTENSION`  | `extension`  | `rb`                 |
//! | `TRESTLEKIT_COMPAT`     | `compat`     | `strict`             |
//!
//! ## Example
//!
//! ```yaml
//! admin_root: app/admin
//! menu_file: config/admin_menu.yml
//! extension: rb
//! compat: legacy
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::menu::{CompatMode, MenuSource};
use crate::scaffold::{AdminLayout, Scaffolder};

/// Config file looked up in the working directory when none is named
pub const DEFAULT_CONFIG_FILE: &str = "trestlekit.yml";

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Directory generated admin files go under
    pub admin_root: PathBuf,
    /// Menu YAML file
    pub menu_file: PathBuf,
    /// Extension of generated files
    pub extension: String,
    /// How absent icon/badge values reach the host menu builder
    pub compat: CompatMode,
}

impl Default for ToolConfig {
    fn default() -> Self {
        let layout = AdminLayout::default();
        Self {
            menu_file: layout.admin_root.join("menu.yml"),
            admin_root: layout.admin_root,
            extension: layout.extension,
            compat: CompatMode::default(),
        }
    }
}

impl ToolConfig {
    /// Load defaults, then the config file, then the environment
    ///
    /// With `explicit_path` the file must exist. Without it,
    /// [`DEFAULT_CONFIG_FILE`] in the working directory is used if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a named file is missing, a file cannot be read or
    /// parsed, or an environment variable holds an invalid value.
    pub fn load(explicit_path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse a YAML config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid config.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply `TRESTLEKIT_*` overrides read through `lookup`
    ///
    /// # Errors
    ///
    /// Returns an error if `TRESTLEKIT_COMPAT` is not `strict` or `legacy`.
    pub fn apply_env<F>(&mut self, lookup: F) -> anyhow::Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = lookup("TRESTLEKIT_ADMIN_ROOT") {
            self.admin_root = PathBuf::from(root);
        }
        if let Some(file) = lookup("TRESTLEKIT_MENU_FILE") {
            self.menu_file = PathBuf::from(file);
        }
        if let Some(ext) = lookup("TRESTLEKIT_EXTENSION") {
            self.extension = ext;
        }
        if let Some(compat) = lookup("TRESTLEKIT_COMPAT") {
            self.compat = compat
                .parse::<CompatMode>()
                .map_err(anyhow::Error::msg)
                .context("Invalid TRESTLEKIT_COMPAT")?;
        }
        Ok(())
    }

    pub fn layout(&self) -> AdminLayout {
        AdminLayout {
            admin_root: self.admin_root.clone(),
            extension: self.extension.clone(),
        }
    }

    pub fn scaffolder(&self) -> Scaffolder {
        Scaffolder::new(self.layout())
    }

    pub fn menu_source(&self) -> MenuSource {
        MenuSource::new(self.menu_file.clone())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ToolConfig::default();
        assert_eq!(config.admin_root, PathBuf::from("app/admin"));
        assert_eq!(config.menu_file, PathBuf::from("app/admin/menu.yml"));
        assert_eq!(config.extension, "rb");
        assert_eq!(config.compat, CompatMode::Strict);
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = NamedTempFile::with_suffix(".yml").unwrap();
        writeln!(file, "menu_file: config/menu.yml\ncompat: legacy").unwrap();
        let config = ToolConfig::from_file(file.path()).unwrap();
        assert_eq!(config.menu_file, PathBuf::from("config/menu.yml"));
        assert_eq!(config.compat, CompatMode::Legacy);
        assert_eq!(config.admin_root, PathBuf::from("app/admin"));
    }

    #[test]
    fn test_from_file_rejects_unknown_keys() {
        let mut file = NamedTempFile::with_suffix(".yml").unwrap();
        writeln!(file, "admin_rot: typo").unwrap();
        let err = ToolConfig::from_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_named_file_must_exist() {
        let err = ToolConfig::load(Some(Path::new("/nonexistent/trestlekit.yml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("TRESTLEKIT_ADMIN_ROOT", "admin"),
            ("TRESTLEKIT_EXTENSION", "rbx"),
            ("TRESTLEKIT_COMPAT", "legacy"),
        ]
        .into_iter()
        .collect();
        let mut config = ToolConfig::default();
        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.admin_root, PathBuf::from("admin"));
        assert_eq!(config.extension, "rbx");
        assert_eq!(config.compat, CompatMode::Legacy);
        assert_eq!(config.menu_file, PathBuf::from("app/admin/menu.yml"));
        assert_eq!(config.layout().admin_root, PathBuf::from("admin"));
    }

    #[test]
    fn test_env_rejects_bad_compat() {
        let mut config = ToolConfig::default();
        let err = config
            .apply_env(|key| (key == "TRESTLEKIT_COMPAT").then(|| "loose".to_string()))
            .unwrap_err();
        assert!(format!("{err:#}").contains("unknown compat mode"));
    }
}
