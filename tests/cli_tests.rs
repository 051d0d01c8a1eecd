//! End-to-end tests for the `trestlekit-gen` binary

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn trestlekit_gen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trestlekit-gen"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("TRESTLEKIT_MENU_FILE")
        .env_remove("TRESTLEKIT_ADMIN_ROOT")
        .env_remove("TRESTLEKIT_COMPAT")
        .args(args)
        .output()
        .expect("run trestlekit-gen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_cli_generate_creates_resource() {
    let dir = TempDir::new().unwrap();
    let output = trestlekit_gen(dir.path(), &["generate", "UserGroup", "User"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let out = stdout(&output);
    assert_eq!(out.lines().count(), 8, "{out}");
    assert!(out.contains("create  app/admin/user_group_admin.rb"), "{out}");

    let admin = fs::read_to_string(dir.path().join("app/admin/user_group_admin.rb")).unwrap();
    assert!(admin.contains("Trestle.resource(:user_group, model: User)"));
    assert!(dir.path().join("app/admin/user_group/table.rb").exists());
}

#[test]
fn test_cli_generate_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = trestlekit_gen(dir.path(), &["generate", "UserGroup", "--dry-run"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("dry run"));
    assert!(!dir.path().join("app").exists());
}

#[test]
fn test_cli_generate_missing_name_fails() {
    let dir = TempDir::new().unwrap();
    let output = trestlekit_gen(dir.path(), &["generate", ""]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("error: "), "{err}");
    assert!(err.contains("required argument 'name' is missing"), "{err}");
    assert!(!dir.path().join("app").exists());
}

#[test]
fn test_cli_uses_config_file_layout() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("trestlekit.yml"),
        "admin_root: admin\nmenu_file: config/menu.yml\n",
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("config")).unwrap();
    fs::copy(fixture("menu.yml"), dir.path().join("config/menu.yml")).unwrap();

    let output = trestlekit_gen(dir.path(), &["generate", "Product"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(dir.path().join("admin/product_admin.rb").exists());

    let output = trestlekit_gen(dir.path(), &["menu", "resolve", "admin", "dashboard"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["priority"], 101);
}

#[test]
fn test_cli_menu_resolve_json() {
    let dir = TempDir::new().unwrap();
    let file = fixture("menu.yml");
    let output = trestlekit_gen(
        dir.path(),
        &[
            "menu",
            "resolve",
            "analytics",
            "sales_report",
            "--file",
            file.to_str().unwrap(),
        ],
    );
    assert!(output.status.success(), "{}", stderr(&output));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "key": "sales_report",
            "url": "/admin/sales",
            "priority": 205,
            "label": "Sales Report",
            "icon": "fa chart-line",
            "target": "_blank",
            "badge": {"text": "New", "class": "badge-success"},
            "group": "Analytics"
        })
    );
}

#[test]
fn test_cli_menu_resolve_unknown_group() {
    let dir = TempDir::new().unwrap();
    let file = fixture("menu.yml");
    let output = trestlekit_gen(
        dir.path(),
        &["menu", "resolve", "billing", "x", "--file", file.to_str().unwrap()],
    );
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("menu group 'billing' not found"), "{err}");
    assert!(err.contains("admin, analytics, support_tools"), "{err}");
}

#[test]
fn test_cli_menu_check_fails_on_problems() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("menu.yml");
    fs::write(&file, "admin:\n  items:\n    a: {}\n").unwrap();

    let output = trestlekit_gen(dir.path(), &["menu", "check", "--file", file.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("admin.a: menu item 'a' in group 'admin' has no 'url'"));
    assert!(stderr(&output).contains("1 problem(s) found"));
}

#[test]
fn test_cli_menu_list() {
    let dir = TempDir::new().unwrap();
    let file = fixture("menu.yml");
    let output = trestlekit_gen(dir.path(), &["menu", "list", "--file", file.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    let first = out.lines().next().unwrap();
    assert!(first.trim_start().starts_with("1 "), "{out}");
    assert!(first.ends_with("tickets"), "{out}");
}
