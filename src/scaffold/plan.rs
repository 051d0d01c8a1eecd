use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::ArgumentError;
use crate::naming::{humanize, pascal_case, snake_case};

/// Where generated admin files live and which extension they carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminLayout {
    /// Admin root, relative to the target directory
    pub admin_root: PathBuf,
    /// Extension of generated files, without the dot
    pub extension: String,
}

impl Default for AdminLayout {
    fn default() -> Self {
        Self {
            admin_root: PathBuf::from("app/admin"),
            extension: "rb".to_string(),
        }
    }
}

/// The fixed set of templates stamped out for every resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Table,
    Form,
    Routes,
    Collection,
    Scopes,
    Search,
    Controller,
    Admin,
}

impl TemplateId {
    /// Files generated inside the resource folder, in generation order
    pub const FOLDER_FILES: [TemplateId; 7] = [
        TemplateId::Table,
        TemplateId::Form,
        TemplateId::Routes,
        TemplateId::Collection,
        TemplateId::Scopes,
        TemplateId::Search,
        TemplateId::Controller,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Table => "table",
            TemplateId::Form => "form",
            TemplateId::Routes => "routes",
            TemplateId::Collection => "collection",
            TemplateId::Scopes => "scopes",
            TemplateId::Search => "search",
            TemplateId::Controller => "controller",
            TemplateId::Admin => "admin",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifiers derived from the resource and model names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedIdentifiers {
    /// File and folder name, also the Trestle resource symbol (`user_group`)
    pub snake_case: String,
    /// Ruby module wrapping the generated classes (`UserGroup`)
    pub pascal_case: String,
    /// Display label (`User group`)
    pub humanized: String,
    /// Model constant the admin manages; the model name if given, else the resource
    pub model_class: String,
    /// Local variable name for one model record (`user`)
    pub record_name: String,
    /// `, model: User` when a model name was supplied
    pub model_clause: Option<String>,
}

/// One file the scaffolder will write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetFile {
    pub template: TemplateId,
    /// Destination relative to the target root
    pub path: PathBuf,
}

/// Everything needed to generate one admin resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldPlan {
    pub resource_name: String,
    pub model_name: Option<String>,
    pub identifiers: DerivedIdentifiers,
    /// Resource folder relative to the target root (`app/admin/user_group`)
    pub resource_folder: PathBuf,
    pub target_files: Vec<TargetFile>,
}

/// Derive identifiers and destination paths for a resource
///
/// A blank `model_name` is treated as absent.
///
/// # Errors
///
/// [`ArgumentError::MissingResourceName`] when `resource_name` is empty or
/// contains no word characters.
///
/// # Example
///
/// ```rust
/// use trestlekit::scaffold::{plan, AdminLayout};
///
/// let plan = plan("UserGroup", Some("User"), &AdminLayout::default()).unwrap();
/// assert_eq!(plan.identifiers.snake_case, "user_group");
/// assert_eq!(plan.identifiers.model_clause.as_deref(), Some(", model: User"));
/// ```
pub fn plan(
    resource_name: &str,
    model_name: Option<&str>,
    layout: &AdminLayout,
) -> Result<ScaffoldPlan, ArgumentError> {
    let snake = snake_case(resource_name);
    if snake.is_empty() {
        return Err(ArgumentError::MissingResourceName);
    }
    let pascal = pascal_case(&snake);

    let model_name = model_name
        .map(str::trim)
        .filter(|m| !pascal_case(m).is_empty())
        .map(str::to_string);
    let model_pascal = model_name.as_deref().map(pascal_case);
    let model_class = model_pascal.clone().unwrap_or_else(|| pascal.clone());

    let identifiers = DerivedIdentifiers {
        humanized: humanize(&snake),
        record_name: snake_case(&model_class),
        model_clause: model_pascal.map(|m| format!(", model: {m}")),
        model_class,
        snake_case: snake,
        pascal_case: pascal,
    };

    let resource_folder = layout.admin_root.join(&identifiers.snake_case);
    let mut target_files: Vec<TargetFile> = TemplateId::FOLDER_FILES
        .iter()
        .map(|&template| TargetFile {
            template,
            path: resource_folder.join(file_name(template.as_str(), &layout.extension)),
        })
        .collect();
    target_files.push(TargetFile {
        template: TemplateId::Admin,
        path: layout.admin_root.join(file_name(
            &format!("{}_admin", identifiers.snake_case),
            &layout.extension,
        )),
    });

    Ok(ScaffoldPlan {
        resource_name: resource_name.to_string(),
        model_name,
        identifiers,
        resource_folder,
        target_files,
    })
}

fn file_name(stem: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        stem.to_string()
    } else {
        format!("{stem}.{extension}")
    }
}

impl ScaffoldPlan {
    /// Destination of `template`, relative to the target root
    pub fn path_of(&self, template: TemplateId) -> Option<&Path> {
        self.target_files
            .iter()
            .find(|f| f.template == template)
            .map(|f| f.path.as_path())
    }
}
