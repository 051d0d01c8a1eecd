//! # Scaffold Module
//!
//! Generates a Trestle admin resource split across several files instead of
//! a single `*_admin.rb`.
//!
//! ## Generated Structure
//!
//! For `trestlekit-gen generate UserGroup User`:
//!
//! ```text
//! app/admin/
//! ├── user_group_admin.rb     # Trestle.resource(:user_group, model: User)
//! └── user_group/
//!     ├── table.rb            # UserGroup::Table
//!     ├── form.rb             # UserGroup::Form
//!     ├── routes.rb           # UserGroup::Routes
//!     ├── collection.rb       # UserGroup::Collection
//!     ├── scopes.rb           # UserGroup::Scopes
//!     ├── search.rb           # UserGroup::Search
//!     └── controller.rb       # UserGroup::Controller
//! ```
//!
//! The root admin file wires each piece into the Trestle DSL. The admin root
//! and file extension come from [`AdminLayout`].
//!
//! ## Flow
//!
//! ```text
//! (name, model) → plan() → ScaffoldPlan → execute() → Vec<WrittenFile>
//! ```
//!
//! [`plan`] is pure. [`execute`] renders the Askama templates under
//! `templates/scaffold/` and writes them.

mod execute;
mod plan;
mod templates;

use std::path::Path;

pub use execute::{execute, ExecuteOptions, FileStatus, WrittenFile};
pub use plan::{plan, AdminLayout, DerivedIdentifiers, ScaffoldPlan, TargetFile, TemplateId};
pub use templates::render;

use crate::error::ScaffoldError;

/// Plans and writes admin resources for one [`AdminLayout`]
#[derive(Debug, Clone, Default)]
pub struct Scaffolder {
    layout: AdminLayout,
}

impl Scaffolder {
    pub fn new(layout: AdminLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &AdminLayout {
        &self.layout
    }

    /// See [`plan`]
    pub fn plan(
        &self,
        resource_name: &str,
        model_name: Option<&str>,
    ) -> Result<ScaffoldPlan, ScaffoldError> {
        Ok(plan(resource_name, model_name, &self.layout)?)
    }

    /// Plan and write in one step
    ///
    /// # Errors
    ///
    /// [`ScaffoldError::Argument`] before anything is written when the
    /// resource name is missing; otherwise whatever [`execute`] returns.
    pub fn generate(
        &self,
        resource_name: &str,
        model_name: Option<&str>,
        target_root: &Path,
        options: ExecuteOptions,
    ) -> Result<Vec<WrittenFile>, ScaffoldError> {
        let plan = self.plan(resource_name, model_name)?;
        execute(&plan, target_root, options)
    }
}
