use serde_yaml::Value;
use tracing::debug;

use super::descriptor::{Badge, MenuItemDescriptor};
use super::lookup::{self, join};
use crate::error::ConfigError;
use crate::naming::humanize;
use crate::text::DisplayText;

/// Weight of the group priority in the composite ordering key
pub const GROUP_PRIORITY_WEIGHT: i64 = 100;
/// Group priority when none is configured
pub const DEFAULT_GROUP_PRIORITY: i64 = 0;
/// Item priority when none is configured
pub const DEFAULT_ITEM_PRIORITY: i64 = 1;
/// Link target when none is configured
pub const DEFAULT_TARGET: &str = "_self";
/// CSS prefix applied to configured icon names
pub const ICON_PREFIX: &str = "fa";

/// Resolve and validate one menu entry from a parsed configuration tree
///
/// Checks run in a fixed order and the first violation is returned; no partial
/// descriptor is ever produced.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the root is not a mapping, the group or item
/// is missing, the group has no `items`, the item has no `url`, a configured
/// badge lacks `text` or `type`, or a present field has an unusable type.
///
/// # Example
///
/// ```rust
/// use trestlekit::menu::resolve;
///
/// let config: serde_yaml::Value = serde_yaml::from_str(r#"
/// admin:
///   label: Admin
///   priority: 1
///   items:
///     dashboard:
///       url: /admin/dashboard
///       icon: fa-dashboard
/// "#).unwrap();
///
/// let item = resolve(&config, "admin", "dashboard").unwrap();
/// assert_eq!(item.priority, 101);
/// assert_eq!(item.icon.as_deref(), Some("fa fa-dashboard"));
/// ```
pub fn resolve(
    config: &Value,
    group_key: &str,
    item_key: &str,
) -> Result<MenuItemDescriptor, ConfigError> {
    let root = config.as_mapping().ok_or(ConfigError::RootNotMapping)?;

    let group_value =
        lookup::find(root, group_key).ok_or_else(|| ConfigError::GroupNotFound {
            group: group_key.to_string(),
            available: lookup::keys(root),
        })?;
    let group = lookup::mapping(group_value, group_key)?;

    let items = lookup::optional_mapping(group, "items", group_key)?.ok_or_else(|| {
        ConfigError::ItemsMissing {
            group: group_key.to_string(),
        }
    })?;

    let items_path = join(group_key, "items");
    let item_value =
        lookup::find(items, item_key).ok_or_else(|| ConfigError::ItemNotFound {
            group: group_key.to_string(),
            item: item_key.to_string(),
            available: lookup::keys(items),
        })?;
    let item_path = join(&items_path, item_key);
    let item = lookup::mapping(item_value, &item_path)?;

    let url = lookup::optional_str(item, "url", &item_path)?.ok_or_else(|| {
        ConfigError::UrlMissing {
            group: group_key.to_string(),
            item: item_key.to_string(),
        }
    })?;

    let group_priority =
        lookup::optional_int(group, "priority", group_key)?.unwrap_or(DEFAULT_GROUP_PRIORITY);
    let item_priority =
        lookup::optional_int(item, "priority", &item_path)?.unwrap_or(DEFAULT_ITEM_PRIORITY);
    let priority = group_priority
        .saturating_mul(GROUP_PRIORITY_WEIGHT)
        .saturating_add(item_priority);

    let label = match lookup::optional_str(item, "label", &item_path)? {
        Some(label) => DisplayText::PreEscaped(label),
        None => DisplayText::Raw(humanize(item_key)),
    };

    let icon = lookup::optional_str(item, "icon", &item_path)?
        .map(|name| format!("{ICON_PREFIX} {name}"));

    let target = lookup::optional_str(item, "target", &item_path)?
        .unwrap_or_else(|| DEFAULT_TARGET.to_string());

    let badge = match lookup::optional_mapping(item, "badge", &item_path)? {
        Some(badge) => {
            let badge_path = join(&item_path, "badge");
            let missing = |field| ConfigError::BadgeFieldMissing {
                group: group_key.to_string(),
                item: item_key.to_string(),
                field,
            };
            let text = lookup::optional_str(badge, "text", &badge_path)?
                .ok_or_else(|| missing("text"))?;
            let kind = lookup::optional_str(badge, "type", &badge_path)?
                .ok_or_else(|| missing("type"))?;
            Some(Badge {
                text: DisplayText::PreEscaped(text),
                css_class: format!("badge-{kind}"),
            })
        }
        None => None,
    };

    let group_label =
        lookup::optional_str(group, "label", group_key)?.unwrap_or_else(|| humanize(group_key));

    debug!(
        group = group_key,
        item = item_key,
        priority,
        "resolved menu item"
    );

    Ok(MenuItemDescriptor {
        key: item_key.to_string(),
        url,
        priority,
        label,
        icon,
        target,
        badge,
        group: group_label,
    })
}
