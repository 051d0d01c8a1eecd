use serde_yaml::{Mapping, Value};
use std::fmt;

use super::descriptor::MenuItemDescriptor;
use super::lookup::{self, join};
use super::resolve::resolve;
use crate::error::ConfigError;

/// A problem found while checking a whole menu file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuIssue {
    /// Where the problem is (`menu`, `admin`, `admin.dashboard`)
    pub location: String,
    /// What is wrong
    pub error: ConfigError,
}

impl fmt::Display for MenuIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.error)
    }
}

/// Resolve every entry in `config` and collect all failures
///
/// Unlike [`resolve`], this does not stop at the first problem. Problems with
/// a group itself (not a mapping, `items` missing, a bad `priority` or
/// `label`) are reported once for the group, not once per item.
pub fn check_menu(config: &Value) -> Vec<MenuIssue> {
    let Some(root) = config.as_mapping() else {
        return vec![MenuIssue {
            location: "menu".to_string(),
            error: ConfigError::RootNotMapping,
        }];
    };

    let mut issues = Vec::new();
    for (group_key, group_value) in root {
        let group_key = lookup::key_name(group_key);
        let group = match lookup::mapping(group_value, &group_key) {
            Ok(group) => group,
            Err(error) => {
                issues.push(MenuIssue {
                    location: group_key,
                    error,
                });
                continue;
            }
        };

        let group_errors = group_field_errors(group, &group_key);
        issues.extend(group_errors.iter().map(|error| MenuIssue {
            location: group_key.clone(),
            error: error.clone(),
        }));

        let items = lookup::optional_mapping(group, "items", &group_key).and_then(|items| {
            items.ok_or_else(|| ConfigError::ItemsMissing {
                group: group_key.clone(),
            })
        });
        let items = match items {
            Ok(items) => items,
            Err(error) => {
                issues.push(MenuIssue {
                    location: group_key,
                    error,
                });
                continue;
            }
        };

        for item_key in lookup::keys(items) {
            match resolve(config, &group_key, &item_key) {
                Err(error) if !group_errors.contains(&error) => issues.push(MenuIssue {
                    location: join(&group_key, &item_key),
                    error,
                }),
                _ => {}
            }
        }
    }
    issues
}

/// Type errors in the group's own `priority` and `label`
fn group_field_errors(group: &Mapping, group_key: &str) -> Vec<ConfigError> {
    [
        lookup::optional_int(group, "priority", group_key).err(),
        lookup::optional_str(group, "label", group_key).err(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Resolve every entry, ordered the way the host menu shows them
///
/// Entries sort by composite priority, then group key, then item key.
///
/// # Errors
///
/// The first [`ConfigError`] met, in document order.
pub fn list_menu(config: &Value) -> Result<Vec<MenuItemDescriptor>, ConfigError> {
    let root = config.as_mapping().ok_or(ConfigError::RootNotMapping)?;

    let mut entries = Vec::new();
    for (group_key, group_value) in root {
        let group_key = lookup::key_name(group_key);
        let group = lookup::mapping(group_value, &group_key)?;
        let items = lookup::optional_mapping(group, "items", &group_key)?.ok_or_else(|| {
            ConfigError::ItemsMissing {
                group: group_key.clone(),
            }
        })?;
        for item_key in lookup::keys(items) {
            let descriptor = resolve(config, &group_key, &item_key)?;
            entries.push((group_key.clone(), descriptor));
        }
    }

    entries.sort_by(|(group_a, a), (group_b, b)| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| group_a.cmp(group_b))
            .then_with(|| a.key.cmp(&b.key))
    });
    Ok(entries.into_iter().map(|(_, descriptor)| descriptor).collect())
}
