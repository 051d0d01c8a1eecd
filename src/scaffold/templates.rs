use askama::Template;

use super::plan::{DerivedIdentifiers, TemplateId};
use crate::error::ScaffoldError;

/// Template data for the root admin file (`app/admin/{name}_admin.rb`)
#[derive(Template)]
#[template(path = "scaffold/admin.rb.txt", escape = "none")]
pub struct AdminTemplateData {
    /// Trestle resource symbol
    pub file_name: String,
    /// Ruby module holding the resource's classes
    pub module_name: String,
    /// Menu label
    pub human_name: String,
    /// `, model: X` association clause, absent when no model was given
    pub model_clause: Option<String>,
}

/// Template data for the index table
#[derive(Template)]
#[template(path = "scaffold/table.rb.txt", escape = "none")]
pub struct TableTemplateData {
    pub module_name: String,
    pub human_name: String,
}

/// Template data for the edit form
#[derive(Template)]
#[template(path = "scaffold/form.rb.txt", escape = "none")]
pub struct FormTemplateData {
    pub file_name: String,
    pub module_name: String,
    pub model_class: String,
    /// Block argument naming one record
    pub record_name: String,
}

/// Template data for custom routes
#[derive(Template)]
#[template(path = "scaffold/routes.rb.txt", escape = "none")]
pub struct RoutesTemplateData {
    pub module_name: String,
    pub human_name: String,
}

/// Template data for the base collection
#[derive(Template)]
#[template(path = "scaffold/collection.rb.txt", escape = "none")]
pub struct CollectionTemplateData {
    pub module_name: String,
    pub human_name: String,
    pub model_class: String,
}

/// Template data for index scopes
#[derive(Template)]
#[template(path = "scaffold/scopes.rb.txt", escape = "none")]
pub struct ScopesTemplateData {
    pub module_name: String,
    pub human_name: String,
}

/// Template data for search
#[derive(Template)]
#[template(path = "scaffold/search.rb.txt", escape = "none")]
pub struct SearchTemplateData {
    pub module_name: String,
    pub model_class: String,
}

/// Template data for the controller mixin
#[derive(Template)]
#[template(path = "scaffold/controller.rb.txt", escape = "none")]
pub struct ControllerTemplateData {
    pub module_name: String,
    pub human_name: String,
}

/// Render one template from the derived identifiers
///
/// # Errors
///
/// [`ScaffoldError::Render`] if Askama fails to render.
pub fn render(template: TemplateId, ids: &DerivedIdentifiers) -> Result<String, ScaffoldError> {
    let module_name = ids.pascal_case.clone();
    let human_name = ids.humanized.clone();
    let rendered = match template {
        TemplateId::Admin => AdminTemplateData {
            file_name: ids.snake_case.clone(),
            module_name,
            human_name,
            model_clause: ids.model_clause.clone(),
        }
        .render(),
        TemplateId::Table => TableTemplateData {
            module_name,
            human_name,
        }
        .render(),
        TemplateId::Form => FormTemplateData {
            file_name: ids.snake_case.clone(),
            module_name,
            model_class: ids.model_class.clone(),
            record_name: ids.record_name.clone(),
        }
        .render(),
        TemplateId::Routes => RoutesTemplateData {
            module_name,
            human_name,
        }
        .render(),
        TemplateId::Collection => CollectionTemplateData {
            module_name,
            human_name,
            model_class: ids.model_class.clone(),
        }
        .render(),
        TemplateId::Scopes => ScopesTemplateData {
            module_name,
            human_name,
        }
        .render(),
        TemplateId::Search => SearchTemplateData {
            module_name,
            model_class: ids.model_class.clone(),
        }
        .render(),
        TemplateId::Controller => ControllerTemplateData {
            module_name,
            human_name,
        }
        .render(),
    };
    rendered.map_err(|source| ScaffoldError::Render {
        template: template.as_str(),
        source,
    })
}
