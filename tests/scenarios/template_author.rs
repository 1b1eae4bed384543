//! Scenario: a template author checks a catalog, fixes it, and checks again.

use crate::assert_output_contains;
use crate::common::*;

const CHECK: &[&str] = &["check", "--platform", "web", "--project-type", "spa"];

const MISSING_FEATURE_TOML: &str = r#"
[[templates]]
identity = "Missing.Feature"
kind = "feature"
platform = "web"
project_types = ["all"]
"#;

#[test]
fn scenario_author_fixes_broken_dependency() {
    let env = TestEnv::builder()
        .with_catalog_file("pages.toml", BROKEN_CATALOG_TOML)
        .build();

    // Step 1: check reports the missing dependency and fails
    let result = env.run(CHECK);
    assert!(!result.is_success());
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(
        result,
        "[WARN] dependency_not_found dependency 'Missing.Feature' of template 'Grid.Page' not found in the catalog"
    );
    assert_output_contains!(result, "[FAIL] 1 problem(s) found (1 templates, 0 layout entries)");

    // Step 2: add the missing template in a second file
    env.write_project_file("templates/features.toml", MISSING_FEATURE_TOML);

    // Step 3: check passes
    let result = env.run(CHECK);
    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert_output_contains!(result, "[OK] No problems found (2 templates, 0 layout entries)");
}

#[test]
fn scenario_author_checks_in_json_for_ci() {
    let env = TestEnv::builder()
        .with_catalog_file("pages.toml", BROKEN_CATALOG_TOML)
        .build();

    let mut args = vec!["--json"];
    args.extend_from_slice(CHECK);
    let result = env.run(&args);

    assert!(!result.is_success());
    let json = result.json();
    assert_eq!(json["event"], "data");
    assert_eq!(json["command"], "check");
    assert_eq!(json["templates_checked"], 1);
    assert_eq!(json["diagnostics"][0]["code"], "dependency_not_found");
    assert_eq!(json["diagnostics"][0]["reference"], "Missing.Feature");
}

#[test]
fn scenario_strict_check_still_reports_everything() {
    let env = TestEnv::builder()
        .with_catalog_file(
            "pages.toml",
            r#"
[[templates]]
identity = "Grid.Page"
kind = "page"
platform = "web"
project_types = ["spa"]
dependencies = ["Missing.A", "Missing.B"]
"#,
        )
        .build();

    let mut args = vec!["--strict"];
    args.extend_from_slice(CHECK);
    let result = env.run(&args);

    assert!(!result.is_success());
    assert_output_contains!(result, "'Missing.A'");
    assert_output_contains!(result, "'Missing.B'");
    assert_output_contains!(result, "2 problem(s) found");
}

#[test]
fn scenario_json_sink_writes_ndjson_diagnostics() {
    let env = TestEnv::builder()
        .with_catalog_file("pages.toml", BROKEN_CATALOG_TOML)
        .build();

    let result = env.run_with_env(
        &["resolve", "Grid.Page", "--platform", "web", "--project-type", "spa"],
        &[("STENCIL_DIAGNOSTICS_SINK", "json")],
    );

    assert!(result.is_success(), "stderr: {}", result.stderr);
    let record: serde_json::Value = result
        .stderr
        .lines()
        .find_map(|line| serde_json::from_str(line).ok())
        .expect("a JSON diagnostic on stderr");
    assert_eq!(record["event"], "diagnostic");
    assert_eq!(record["code"], "dependency_not_found");
    assert_eq!(record["template"], "Grid.Page");
}
