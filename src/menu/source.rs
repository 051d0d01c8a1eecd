use serde_yaml::Value;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::descriptor::{CompatMode, ItemOptions, MenuItemDescriptor};
use super::resolve::resolve;
use crate::error::{ConfigError, MenuError};

/// A menu configuration file, re-read on every call
///
/// Nothing is cached: an edit to the YAML is visible to the very next
/// resolution.
#[derive(Debug, Clone)]
pub struct MenuSource {
    path: PathBuf,
}

impl MenuSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file
    ///
    /// # Errors
    ///
    /// [`MenuError::NotFound`] when the file does not exist,
    /// [`MenuError::Io`] when it cannot be read, and [`MenuError::Parse`] when
    /// it is not valid YAML. The shape of the tree is not checked here.
    pub fn load(&self) -> Result<Value, MenuError> {
        debug!(path = %self.path.display(), "loading menu config");
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                MenuError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                MenuError::Io {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        serde_yaml::from_str(&content).map_err(|source| MenuError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Load the file and resolve one entry
    ///
    /// # Errors
    ///
    /// Any [`MenuError`]; shape violations arrive as [`MenuError::Config`].
    pub fn resolve(&self, group: &str, item: &str) -> Result<MenuItemDescriptor, MenuError> {
        let config = self.load()?;
        resolve(&config, group, item).map_err(|source| self.config_error(source))
    }

    pub(crate) fn config_error(&self, source: ConfigError) -> MenuError {
        MenuError::Config {
            path: self.path.clone(),
            source,
        }
    }
}

/// The host framework's menu-building API
pub trait MenuBuilder {
    /// Register one menu item
    fn item(&mut self, key: &str, url: &str, options: ItemOptions);
}

/// Renders a single configured item into a [`MenuBuilder`]
#[derive(Debug, Clone)]
pub struct MenuHelper {
    source: MenuSource,
    group: String,
    item: String,
    compat: CompatMode,
}

impl MenuHelper {
    pub fn new(source: MenuSource, group: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            source,
            group: group.into(),
            item: item.into(),
            compat: CompatMode::default(),
        }
    }

    /// Choose how absent icon/badge values are presented to the builder
    pub fn with_compat(mut self, compat: CompatMode) -> Self {
        self.compat = compat;
        self
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    /// Resolve the entry from a fresh read of the file and hand it to `builder`
    ///
    /// The builder is not called when resolution fails.
    ///
    /// # Errors
    ///
    /// Any [`MenuError`] raised while loading or resolving.
    pub fn render_menu<B: MenuBuilder + ?Sized>(&self, builder: &mut B) -> Result<(), MenuError> {
        let descriptor = self.source.resolve(&self.group, &self.item)?;
        let options = descriptor.to_options(self.compat);
        builder.item(&descriptor.key, &descriptor.url, options);
        Ok(())
    }
}
