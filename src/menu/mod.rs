//! # Menu Module
//!
//! Turns an entry of the admin menu YAML file into a navigation-menu item for
//! the host admin framework.
//!
//! ## Configuration Shape
//!
//! ```yaml
//! analytics:                 # group key
//!   label: Analytics         # optional, defaults to the humanized key
//!   priority: 2              # optional, defaults to 0
//!   items:                   # required
//!     sales_report:          # item key
//!       url: /admin/sales    # required
//!       label: Sales Report  # optional, defaults to the humanized key
//!       icon: chart-line     # optional, rendered as "fa chart-line"
//!       target: _blank       # optional, defaults to "_self"
//!       priority: 5          # optional, defaults to 1
//!       badge:               # optional; text and type both required
//!         text: New
//!         type: success      # rendered as class "badge-success"
//! ```
//!
//! ## Priority
//!
//! Items are ordered by a single composite key,
//! `group_priority * 100 + item_priority`, so groups order first and items
//! order within their group without a second sort pass. The example above
//! resolves to `205`.
//!
//! ## Entry Points
//!
//! - [`resolve`] - pure resolution over an already parsed tree
//! - [`MenuSource`] - reads the file fresh on every call
//! - [`MenuHelper`] - resolves one entry and forwards it to a [`MenuBuilder`]
//! - [`check_menu`] / [`list_menu`] - whole-file validation and listing

mod check;
mod descriptor;
mod lookup;
mod resolve;
mod source;

pub use check::{check_menu, list_menu, MenuIssue};
pub use descriptor::{Badge, BadgeOption, CompatMode, ItemOptions, MenuItemDescriptor};
pub use resolve::*;
pub use source::{MenuBuilder, MenuHelper, MenuSource};
