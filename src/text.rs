//! Display strings that know whether they still need HTML escaping.

use serde::{Serialize, Serializer};
use std::fmt;

/// Text destined for an HTML menu
///
/// `PreEscaped` content is emitted verbatim (administrator-authored markup is
/// trusted); `Raw` content is escaped at the rendering boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayText {
    /// Plain text, escaped when rendered
    Raw(String),
    /// Markup that must not be escaped again
    PreEscaped(String),
}

impl DisplayText {
    /// The underlying string, without any escaping applied
    pub fn as_str(&self) -> &str {
        match self {
            DisplayText::Raw(s) | DisplayText::PreEscaped(s) => s,
        }
    }

    /// Whether the text is emitted without escaping
    pub fn is_pre_escaped(&self) -> bool {
        matches!(self, DisplayText::PreEscaped(_))
    }

    /// Render for direct inclusion in HTML
    pub fn to_html(&self) -> String {
        match self {
            DisplayText::PreEscaped(s) => s.clone(),
            DisplayText::Raw(s) => escape_html(s),
        }
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DisplayText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
