use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::text::DisplayText;

/// A resolved navigation-menu entry
///
/// Produced once per resolution call and handed to the caller, which forwards
/// it to the host menu builder (see [`ItemOptions`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItemDescriptor {
    /// Item key from the configuration
    pub key: String,
    /// Link target URL
    pub url: String,
    /// Composite ordering key: `group_priority * 100 + item_priority`
    pub priority: i64,
    /// Configured label, or the humanized item key
    pub label: DisplayText,
    /// `fa {icon}` when an icon is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Link target, `_self` unless configured
    pub target: String,
    /// Badge rendered next to the item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    /// Group label, or the humanized group key
    pub group: String,
}

/// A small decorated label next to a menu item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: DisplayText,
    /// `badge-{type}`
    #[serde(rename = "class")]
    pub css_class: String,
}

/// How absent optional fields are presented to the host menu builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatMode {
    /// Absent icon and badge are omitted
    #[default]
    Strict,
    /// Absent icon and badge are sent as empty strings
    Legacy,
}

impl FromStr for CompatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(CompatMode::Strict),
            "legacy" => Ok(CompatMode::Legacy),
            other => Err(format!(
                "unknown compat mode '{other}' (expected 'strict' or 'legacy')"
            )),
        }
    }
}

impl fmt::Display for CompatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompatMode::Strict => f.write_str("strict"),
            CompatMode::Legacy => f.write_str("legacy"),
        }
    }
}

/// Options passed alongside `(key, url)` to the host menu builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOptions {
    pub priority: i64,
    pub label: DisplayText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<BadgeOption>,
    pub group: String,
}

/// Badge as seen by the host builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeOption {
    Badge(Badge),
    /// Empty-string placeholder used in [`CompatMode::Legacy`]
    Blank,
}

impl Serialize for BadgeOption {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            BadgeOption::Badge(badge) => badge.serialize(serializer),
            BadgeOption::Blank => serializer.serialize_str(""),
        }
    }
}

impl MenuItemDescriptor {
    /// Build the option set forwarded to the host menu builder
    pub fn to_options(&self, compat: CompatMode) -> ItemOptions {
        let (icon, badge) = match compat {
            CompatMode::Strict => (self.icon.clone(), self.badge.clone().map(BadgeOption::Badge)),
            CompatMode::Legacy => (
                Some(self.icon.clone().unwrap_or_default()),
                Some(
                    self.badge
                        .clone()
                        .map_or(BadgeOption::Blank, BadgeOption::Badge),
                ),
            ),
        };
        ItemOptions {
            priority: self.priority,
            label: self.label.clone(),
            icon,
            target: self.target.clone(),
            badge,
            group: self.group.clone(),
        }
    }
}
