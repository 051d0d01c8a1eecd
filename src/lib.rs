//! # trestlekit
//!
//! Tooling for [Trestle](https://trestle.io) admin panels in Rails
//! applications.
//!
//! ## Overview
//!
//! Two independent pieces share a configuration layer:
//!
//! - **[`menu`]** - resolves a single navigation-menu entry from a YAML menu
//!   file into a [`MenuItemDescriptor`](menu::MenuItemDescriptor): composite
//!   priority, label, icon, target, badge and group label
//! - **[`scaffold`]** - generates an admin resource split across a root
//!   `*_admin.rb` file and a folder of per-concern files
//!
//! Supporting modules:
//!
//! - **[`config`]** - paths and conventions (`admin_root`, `menu_file`, ...)
//! - **[`naming`]** - snake/Pascal/humanized identifier conversions
//! - **[`text`]** - display strings that remember whether they are
//!   pre-escaped HTML
//! - **[`error`]** - typed errors for every failure mode
//! - **[`logging`]** - `tracing` subscriber setup for the binary
//! - **[`cli`]** - the `trestlekit-gen` command line
//!
//! ## Menu Flow
//!
//! ```text
//! menu.yml ──load──▶ serde_yaml::Value ──resolve(group, item)──▶ MenuItemDescriptor
//!                                                                      │
//!                                            to_options(compat) ◀──────┘
//!                                                   │
//!                                                   ▼
//!                                     MenuBuilder::item(key, url, options)
//! ```
//!
//! The file is read again on every resolution so edits are picked up without
//! a restart.
//!
//! ## Quick Start
//!
//! ```no_run
//! use trestlekit::menu::MenuSource;
//! use trestlekit::scaffold::{ExecuteOptions, Scaffolder};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let entry = MenuSource::new("app/admin/menu.yml").resolve("admin", "dashboard")?;
//! println!("{} -> {} ({})", entry.label, entry.url, entry.priority);
//!
//! let written = Scaffolder::default().generate(
//!     "UserGroup",
//!     Some("User"),
//!     Path::new("."),
//!     ExecuteOptions::default(),
//! )?;
//! for file in written {
//!     println!("{:>10}  {}", file.status, file.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod naming;
pub mod scaffold;
pub mod text;

pub use config::ToolConfig;
pub use error::{ArgumentError, ConfigError, MenuError, ScaffoldError};
pub use menu::{resolve, MenuItemDescriptor, MenuSource};
pub use scaffold::{plan, Scaffolder};
pub use text::DisplayText;
