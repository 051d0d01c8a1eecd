//! # CLI Module
//!
//! Command-line front end for the scaffolder and the menu resolver, shipped as
//! the `trestlekit-gen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! ```bash
//! trestlekit-gen generate UserGroup User
//! trestlekit-gen generate reports --root ../shop --dry-run
//! ```
//!
//! Prints one `status  path` line per file, where status is `create`,
//! `identical`, `skip` or `force`.
//!
//! ### `menu`
//!
//! ```bash
//! trestlekit-gen menu resolve admin dashboard
//! trestlekit-gen menu resolve admin dashboard --format text --options
//! trestlekit-gen menu check --file config/menu.yml
//! trestlekit-gen menu list
//! ```
//!
//! `check` exits non-zero when any entry fails to resolve.
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use trestlekit::cli::{run, Cli};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! run(&cli, &mut std::io::stdout())?;
//! ```

mod commands;

pub use commands::{run, Cli, Commands, MenuCommand, OutputFormat};
