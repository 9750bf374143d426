//! End-to-end tests for the exemplar CLI

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Build a minimal resource tree.
fn fixture() -> TempDir {
    let temp = TempDir::new().unwrap();

    temp.child("resources/standards/project_structure.md")
        .write_str("# Project Structure\n")
        .unwrap();

    let examples = "resources/code-examples/react-native";
    temp.child(format!("{examples}/components/Button.tsx"))
        .write_str("export const Button = () => null;\n")
        .unwrap();
    temp.child(format!("{examples}/hooks/useForm.ts"))
        .write_str("export const useForm = () => ({});\n")
        .unwrap();

    temp
}

fn exemplar() -> Command {
    Command::cargo_bin("exemplar").unwrap()
}

#[test]
fn test_list_text() {
    let temp = fixture();

    exemplar()
        .args(["--root", temp.path().to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("components: Button"))
        .stdout(predicate::str::contains("hooks: useForm"))
        .stdout(predicate::str::contains("screens: (none)"));
}

#[test]
fn test_list_json() {
    let temp = fixture();

    exemplar()
        .args([
            "--root",
            temp.path().to_str().unwrap(),
            "list",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"components\""))
        .stdout(predicate::str::contains("\"Button\""));
}

#[test]
fn test_list_category_filter() {
    let temp = fixture();

    exemplar()
        .args([
            "--root",
            temp.path().to_str().unwrap(),
            "list",
            "--category",
            "hooks",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("hooks: useForm"))
        .stdout(predicate::str::contains("components").not());
}

#[test]
fn test_get_prints_content() {
    let temp = fixture();

    exemplar()
        .args([
            "--root",
            temp.path().to_str().unwrap(),
            "get",
            "components",
            "Button",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("export const Button"))
        .stderr(predicate::str::contains("components/Button.tsx"));
}

#[test]
fn test_get_fuzzy() {
    let temp = fixture();

    exemplar()
        .args([
            "--root",
            temp.path().to_str().unwrap(),
            "get",
            "hooks",
            "form",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("useForm"));
}

#[test]
fn test_get_not_found_fails() {
    let temp = fixture();

    exemplar()
        .args([
            "--root",
            temp.path().to_str().unwrap(),
            "get",
            "components",
            "NoSuchThing",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NoSuchThing"));
}

#[test]
fn test_standard() {
    let temp = fixture();

    exemplar()
        .args([
            "--root",
            temp.path().to_str().unwrap(),
            "standard",
            "project_structure",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Project Structure"));
}

#[test]
fn test_standards_listing() {
    exemplar()
        .arg("standards")
        .assert()
        .success()
        .stdout(predicate::str::contains("project_structure"))
        .stdout(predicate::str::contains("state_management"));
}
