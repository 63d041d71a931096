//! Dependency list integration tests
//!
//! Covers adding, removing and pinning packages in both the production and
//! test dependency lists, checked against the emitted manifest text, including
//! the failure modes that must leave the document untouched.

use std::collections::BTreeMap;

use manifest_edit::{
    DependencyScope, Error, add_packages, add_ranges, doc::DocError, editor::EditError,
    remove_packages,
};
use serde_json::json;

use crate::helpers::*;

fn ranges(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(name, range)| (name.to_string(), range.to_string()))
        .collect()
}

// ===== ADD PACKAGES =====

#[test]
fn test_add_packages_is_idempotent() {
    let mut doc = manifest_with_deps(r#"["prelude"]"#);

    add_packages(&mut doc, DependencyScope::Main, ["a"]).unwrap();
    let once = doc.to_string();
    add_packages(&mut doc, DependencyScope::Main, ["a"]).unwrap();

    assert_eq!(doc.to_string(), once);
    assert_eq!(dependency_names(&doc, DependencyScope::Main), vec!["a", "prelude"]);
}

#[test]
fn test_add_packages_keeps_version_ranges() {
    let mut doc = manifest_with_deps(r#"[{ a = "^1.0.0" }, "b"]"#);

    add_packages(&mut doc, DependencyScope::Main, ["a"]).unwrap();

    assert_eq!(
        json_at(&doc, "package.dependencies"),
        json!([{ "a": "^1.0.0" }, "b"])
    );
}

#[test]
fn test_add_packages_is_a_union() {
    let mut doc = manifest_with_deps(r#"["a", "b"]"#);

    add_packages(&mut doc, DependencyScope::Main, ["b", "c"]).unwrap();

    assert_eq!(dependency_names(&doc, DependencyScope::Main), vec!["a", "b", "c"]);
}

#[test]
fn test_add_packages_sorts_by_package_name() {
    let mut doc = manifest_with_deps(r#"["prelude", { arrays = "^7.0.0" }, "effect"]"#);

    add_packages(&mut doc, DependencyScope::Main, ["maybe", "console"]).unwrap();

    assert_eq!(
        doc.to_string(),
        r#"[package]
name = "example"
dependencies = [
  { arrays = "^7.0.0" },
  "console",
  "effect",
  "maybe",
  "prelude",
]
"#
    );
}

#[test]
fn test_add_packages_collapses_duplicates() {
    let mut doc = manifest_with_deps(r#"["b", { a = "^1" }, "a", "b"]"#);

    add_packages(&mut doc, DependencyScope::Main, ["c", "c"]).unwrap();

    assert_eq!(
        json_at(&doc, "package.dependencies"),
        json!([{ "a": "^1" }, "b", "c"])
    );
}

#[test]
fn test_add_packages_creates_missing_dependencies() {
    let mut doc = parse("[package]\nname = \"example\"\n");

    add_packages(&mut doc, DependencyScope::Main, ["prelude"]).unwrap();

    assert_eq!(
        doc.to_string(),
        "[package]\nname = \"example\"\ndependencies = [\n  \"prelude\",\n]\n"
    );
}

#[test]
fn test_add_test_packages_creates_test_section() {
    let mut doc = manifest_with_deps(r#"["prelude"]"#);

    add_packages(&mut doc, DependencyScope::Test, ["assert"]).unwrap();

    assert_eq!(
        doc.to_string(),
        r#"[package]
name = "example"
dependencies = ["prelude"]

[package.test]
main = "Test.Main"
dependencies = [
  "assert",
]
"#
    );
}

#[test]
fn test_add_test_packages_keeps_existing_test_main() {
    let mut doc = parse(
        "[package]\nname = \"example\"\n\n[package.test]\nmain = \"Test.Custom\" # runner\n",
    );

    add_packages(&mut doc, DependencyScope::Test, ["assert"]).unwrap();

    assert_eq!(json_at(&doc, "package.test.main"), json!("Test.Custom"));
    assert_eq!(dependency_names(&doc, DependencyScope::Test), vec!["assert"]);
    assert!(doc.to_string().contains("main = \"Test.Custom\" # runner\n"));
}

#[test]
fn test_add_packages_requires_package_section() {
    let mut doc = parse("[workspace]\n");

    let err = add_packages(&mut doc, DependencyScope::Main, ["prelude"]).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(doc.to_string(), "[workspace]\n");
}

#[test]
fn test_add_packages_forces_block_style() {
    let mut doc = manifest_with_deps(r#"[ "prelude",  "effect" ]"#);

    add_packages(&mut doc, DependencyScope::Main, Vec::<String>::new()).unwrap();

    assert_eq!(
        doc.to_string(),
        "[package]\nname = \"example\"\ndependencies = [\n  \"effect\",\n  \"prelude\",\n]\n"
    );
}

#[test]
fn test_add_packages_keeps_entry_comments() {
    let mut doc = parse(
        r#"[package]
name = "example"
dependencies = [
  "prelude", # core
  # effects
  "effect",
]
"#,
    );

    add_packages(&mut doc, DependencyScope::Main, ["console"]).unwrap();

    assert_eq!(
        doc.to_string(),
        r#"[package]
name = "example"
dependencies = [
  "console",
  # effects
  "effect",
  "prelude", # core
]
"#
    );
}

#[test]
fn test_add_packages_keeps_indentation() {
    let mut doc = parse("[package]\ndependencies = [\n    \"prelude\",\n]\n");

    add_packages(&mut doc, DependencyScope::Main, ["effect"]).unwrap();

    assert_eq!(
        doc.to_string(),
        "[package]\ndependencies = [\n    \"effect\",\n    \"prelude\",\n]\n"
    );
}

#[test]
fn test_add_packages_rejects_malformed_entry() {
    let text = "[package]\ndependencies = [\"a\", [\"b\"]]\n";
    let mut doc = parse(text);

    let err = add_packages(&mut doc, DependencyScope::Main, ["c"]).unwrap_err();

    assert!(err.is_validation_error());
    assert!(matches!(
        err,
        Error::Edit(EditError::MalformedDependency { index: 1, .. })
    ));
    assert_eq!(doc.to_string(), text);
}

#[test]
fn test_add_packages_rejects_non_list_dependencies() {
    let mut doc = parse("[package]\ndependencies = \"prelude\"\n");

    let err = add_packages(&mut doc, DependencyScope::Main, ["c"]).unwrap_err();

    assert!(err.is_type_error());
}

// ===== REMOVE PACKAGES =====

#[test]
fn test_remove_packages() {
    let mut doc = manifest_with_deps(r#"["a", "b", "c"]"#);

    remove_packages(&mut doc, DependencyScope::Main, |name| name == "b").unwrap();

    assert_eq!(dependency_names(&doc, DependencyScope::Main), vec!["a", "c"]);
}

#[test]
fn test_remove_packages_forces_block_style_on_flow_list() {
    let mut doc = manifest_with_deps(r#"["console", { arrays = "^7.0.0" }, "prelude"] # deps"#);

    remove_packages(&mut doc, DependencyScope::Main, |name| name == "console").unwrap();

    assert_eq!(
        doc.to_string(),
        r#"[package]
name = "example"
dependencies = [
  { arrays = "^7.0.0" },
  "prelude",
] # deps
"#
    );
}

#[test]
fn test_remove_packages_matches_ranged_entries_by_name() {
    let mut doc = manifest_with_deps(r#"[{ a = "^1.0.0" }, "b"]"#);

    remove_packages(&mut doc, DependencyScope::Main, |name| name == "a").unwrap();

    assert_eq!(json_at(&doc, "package.dependencies"), json!(["b"]));
}

#[test]
fn test_remove_packages_drops_comments_of_removed_entries() {
    let mut doc = parse(
        r#"[package]
dependencies = [
  # gone soon
  "a", # old
  "b", # kept
]
"#,
    );

    remove_packages(&mut doc, DependencyScope::Main, |name| name == "a").unwrap();

    assert_eq!(
        doc.to_string(),
        "[package]\ndependencies = [\n  \"b\", # kept\n]\n"
    );
}

#[test]
fn test_remove_test_packages_leaves_main_alone() {
    let mut doc = manifest_with_test_deps(r#"["a"]"#, r#"["a", "assert"]"#);

    remove_packages(&mut doc, DependencyScope::Test, |name| name == "a").unwrap();

    assert_eq!(dependency_names(&doc, DependencyScope::Test), vec!["assert"]);
    assert_eq!(dependency_names(&doc, DependencyScope::Main), vec!["a"]);
    assert!(doc.to_string().contains("dependencies = [\"a\"]\n"));
}

#[test]
fn test_remove_packages_nothing_matches() {
    let mut doc = manifest_with_deps(r#"["b", "a"]"#);

    remove_packages(&mut doc, DependencyScope::Main, |_| false).unwrap();

    assert_eq!(dependency_names(&doc, DependencyScope::Main), vec!["a", "b"]);
}

#[test]
fn test_remove_every_package_leaves_empty_list() {
    let mut doc = manifest_with_deps(r#"["a", "b"]"#);

    remove_packages(&mut doc, DependencyScope::Main, |_| true).unwrap();

    assert_eq!(
        doc.to_string(),
        "[package]\nname = \"example\"\ndependencies = []\n"
    );
}

#[test]
fn test_remove_packages_requires_dependency_list() {
    let mut doc = manifest_with_deps(r#"["a"]"#);

    let err = remove_packages(&mut doc, DependencyScope::Test, |_| true).unwrap_err();

    assert!(err.is_not_found());
    match err {
        Error::Doc(DocError::NotFound { path }) => assert_eq!(path, "package.test"),
        other => panic!("unexpected error: {other}"),
    }
}

// ===== ADD RANGES =====

#[test]
fn test_add_ranges_pins_every_entry() {
    let mut doc = manifest_with_deps(r#"["prelude", "console"]"#);

    add_ranges(
        &mut doc,
        &ranges(&[("prelude", ">=6.0.0 <7.0.0"), ("console", ">=6.0.0 <7.0.0")]),
    )
    .unwrap();

    assert_eq!(
        doc.to_string(),
        r#"[package]
name = "example"
dependencies = [
  { console = ">=6.0.0 <7.0.0" },
  { prelude = ">=6.0.0 <7.0.0" },
]
"#
    );
}

#[test]
fn test_add_ranges_keeps_existing_ranges() {
    let mut doc = manifest_with_deps(r#"[{ a = "^1.0.0" }, "b"]"#);

    add_ranges(&mut doc, &ranges(&[("a", "^2.0.0"), ("b", "^3.0.0")])).unwrap();

    assert_eq!(
        json_at(&doc, "package.dependencies"),
        json!([{ "a": "^1.0.0" }, { "b": "^3.0.0" }])
    );
}

#[test]
fn test_add_ranges_missing_range_leaves_document_untouched() {
    let text = "[package]\ndependencies = [\"a\", \"b\", \"c\"]\n";
    let mut doc = parse(text);

    let err = add_ranges(&mut doc, &ranges(&[("b", "^1.0.0")])).unwrap_err();

    assert!(err.is_missing_range());
    match err {
        Error::Edit(edit) => assert_eq!(
            edit.missing_packages(),
            Some(&["a".to_string(), "c".to_string()][..])
        ),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(doc.to_string(), text);
}

#[test]
fn test_add_ranges_keeps_entry_comments() {
    let mut doc = parse(
        r#"[package]
dependencies = [
  # the standard library
  "prelude", # pinned later
]
"#,
    );

    add_ranges(&mut doc, &ranges(&[("prelude", "^6.0.0")])).unwrap();

    assert_eq!(
        doc.to_string(),
        r#"[package]
dependencies = [
  # the standard library
  { prelude = "^6.0.0" }, # pinned later
]
"#
    );
}

#[test]
fn test_add_ranges_ignores_test_dependencies() {
    let mut doc = manifest_with_test_deps(r#"["a"]"#, r#"["assert"]"#);

    add_ranges(&mut doc, &ranges(&[("a", "^1.0.0")])).unwrap();

    assert_eq!(json_at(&doc, "package.dependencies"), json!([{ "a": "^1.0.0" }]));
    assert_eq!(json_at(&doc, "package.test.dependencies"), json!(["assert"]));
    assert!(doc.to_string().ends_with("dependencies = [\"assert\"]\n"));
}
