//! # Error Types
//!
//! Errors raised by menu resolution and resource scaffolding.
//!
//! All of them are terminal: the caller surfaces them to the operator, who
//! fixes the YAML or the command line and tries again.

use std::path::PathBuf;
use thiserror::Error;

/// A menu configuration tree that violates the expected shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("menu config root is not a mapping")]
    RootNotMapping,

    #[error("menu group '{group}' not found (available groups: {})", list(.available))]
    GroupNotFound { group: String, available: Vec<String> },

    #[error("menu group '{group}' has no 'items' mapping")]
    ItemsMissing { group: String },

    #[error(
        "menu item '{item}' not found in group '{group}' (available items: {})",
        list(.available)
    )]
    ItemNotFound {
        group: String,
        item: String,
        available: Vec<String>,
    },

    #[error("menu item '{item}' in group '{group}' has no 'url'")]
    UrlMissing { group: String, item: String },

    #[error("badge of menu item '{item}' in group '{group}' is missing '{field}'")]
    BadgeFieldMissing {
        group: String,
        item: String,
        field: &'static str,
    },

    #[error("'{path}' must be {expected}")]
    InvalidField { path: String, expected: &'static str },
}

fn list(keys: &[String]) -> String {
    if keys.is_empty() {
        "none".to_string()
    } else {
        keys.join(", ")
    }
}

/// Failure to load or resolve a menu entry from a file
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("menu config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read menu config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse menu config {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid menu config {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

impl MenuError {
    /// The configuration error, when the file loaded but its content was wrong
    pub fn config_error(&self) -> Option<&ConfigError> {
        match self {
            MenuError::Config { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Invalid scaffolder invocation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("required argument 'name' is missing")]
    MissingResourceName,
}

/// Failure while scaffolding a resource
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error("failed to render template '{template}'")]
    Render {
        template: &'static str,
        #[source]
        source: askama::Error,
    },

    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
