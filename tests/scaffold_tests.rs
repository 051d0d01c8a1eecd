//! Integration tests for the admin resource generator

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use trestlekit::scaffold::{AdminLayout, ExecuteOptions, FileStatus, Scaffolder};

fn generate(root: &Path, name: &str, model: Option<&str>) {
    Scaffolder::default()
        .generate(name, model, root, ExecuteOptions::default())
        .unwrap();
}

fn read(root: &Path, relative: &str) -> String {
    let path = root.join(relative);
    assert!(path.exists(), "{} was not generated", path.display());
    fs::read_to_string(path).unwrap()
}

#[test]
fn test_admin_file_references_symbol() {
    let dir = TempDir::new().unwrap();
    generate(dir.path(), "MyResource", None);

    let admin = read(dir.path(), "app/admin/my_resource_admin.rb");
    assert!(admin.contains("Trestle.resource(:my_resource)"), "{admin}");
}

#[test]
fn test_folder_files_reference_module_and_class() {
    let dir = TempDir::new().unwrap();
    generate(dir.path(), "MyResource", None);

    for (file, class_line) in [
        ("form.rb", "class Form"),
        ("table.rb", "class Table"),
        ("routes.rb", "class Routes"),
        ("collection.rb", "class Collection"),
        ("scopes.rb", "class Scopes"),
        ("search.rb", "class Search"),
        ("controller.rb", "module Controller"),
    ] {
        let content = read(dir.path(), &format!("app/admin/my_resource/{file}"));
        assert!(content.contains("module MyResource"), "{file}: {content}");
        assert!(content.contains(class_line), "{file}: {content}");
    }
}

#[test]
fn test_controller_is_included_by_admin_file() {
    let dir = TempDir::new().unwrap();
    generate(dir.path(), "MyResource", None);

    let admin = read(dir.path(), "app/admin/my_resource_admin.rb");
    assert!(admin.contains("include MyResource::Controller"), "{admin}");
}

#[test]
fn test_model_clause_only_when_model_given() {
    let dir = TempDir::new().unwrap();
    generate(dir.path(), "UserGroup", Some("User"));
    generate(dir.path(), "OtherGroup", None);

    let with_model = read(dir.path(), "app/admin/user_group_admin.rb");
    assert!(with_model.contains("Trestle.resource(:user_group, model: User)"));

    let without = read(dir.path(), "app/admin/other_group_admin.rb");
    assert!(without.contains("Trestle.resource(:other_group)"));
    assert!(!without.contains("model:"));
}

#[test]
fn test_snake_case_input_gives_same_tree() {
    let pascal = TempDir::new().unwrap();
    let snake = TempDir::new().unwrap();
    generate(pascal.path(), "UserGroup", None);
    generate(snake.path(), "user_group", None);

    for file in [
        "app/admin/user_group_admin.rb",
        "app/admin/user_group/table.rb",
        "app/admin/user_group/controller.rb",
    ] {
        assert_eq!(read(pascal.path(), file), read(snake.path(), file));
    }
}

#[test]
fn test_custom_layout() {
    let dir = TempDir::new().unwrap();
    let scaffolder = Scaffolder::new(AdminLayout {
        admin_root: "admin".into(),
        extension: "rb".to_string(),
    });
    let written = scaffolder
        .generate("Product", None, dir.path(), ExecuteOptions::default())
        .unwrap();

    assert_eq!(written.len(), 8);
    assert!(dir.path().join("admin/product_admin.rb").exists());
    assert!(dir.path().join("admin/product/search.rb").exists());
    assert!(!dir.path().join("app").exists());
}

#[test]
fn test_existing_admin_file_is_kept_without_force() {
    let dir = TempDir::new().unwrap();
    let admin = dir.path().join("app/admin/my_resource_admin.rb");
    fs::create_dir_all(admin.parent().unwrap()).unwrap();
    fs::write(&admin, "# customised\n").unwrap();

    let written = Scaffolder::default()
        .generate("MyResource", None, dir.path(), ExecuteOptions::default())
        .unwrap();

    let statuses: Vec<FileStatus> = written.iter().map(|f| f.status).collect();
    assert_eq!(statuses.iter().filter(|s| **s == FileStatus::Skip).count(), 1);
    assert_eq!(statuses.iter().filter(|s| **s == FileStatus::Create).count(), 7);
    assert_eq!(fs::read_to_string(&admin).unwrap(), "# customised\n");
}
