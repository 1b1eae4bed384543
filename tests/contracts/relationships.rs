//! Contract: dependency closures, requirements and exclusions.

use stencil::{DiagnosticKind, TemplateKind};

use crate::assert_diagnostics;
use crate::common::*;

/// CONTRACT: the dependency closure is transitive, depth-first, duplicate-free
/// and never contains the root.
#[test]
fn contract_dependency_closure_is_depth_first_and_unique() {
    let (engine, sink) = resilient_engine(vec![
        item("A").with_dependencies(["B", "C"]),
        item("B").with_dependencies(["D", "C"]),
        item("C").with_dependencies(["D"]),
        item("D"),
    ]);
    let a = engine.template("A").unwrap();

    let closure: Vec<&str> = engine
        .dependencies(a, &ctx())
        .unwrap()
        .iter()
        .map(|t| t.identity())
        .collect();

    assert_eq!(closure, ["B", "D", "C"]);
    assert!(sink.is_empty());
}

/// CONTRACT: the closure only contains compatible templates.
#[test]
fn contract_incompatible_dependency_counts_as_missing() {
    let (engine, sink) = resilient_engine(vec![
        item("A").with_dependencies(["Mpa"]),
        stencil::TemplateDescriptor::new("Mpa", TemplateKind::Page, "web").with_project_types(["mpa"]),
    ]);

    let closure = engine
        .dependencies(engine.template("A").unwrap(), &ctx())
        .unwrap();

    assert!(closure.is_empty());
    assert_diagnostics!(sink, [DiagnosticKind::DependencyNotFound]);
}

/// CONTRACT: a direct back-edge is reported once and resolution terminates.
#[test]
fn contract_direct_cycle_is_reported() {
    let (engine, sink) = resilient_engine(vec![
        item("A").with_dependencies(["B"]),
        item("B").with_dependencies(["A"]),
    ]);

    let closure: Vec<&str> = engine
        .dependencies(engine.template("A").unwrap(), &ctx())
        .unwrap()
        .iter()
        .map(|t| t.identity())
        .collect();

    assert_eq!(closure, ["B"]);
    assert_diagnostics!(sink, [DiagnosticKind::CircularDependency]);
}

/// CONTRACT: longer cycles terminate and leave every member in the closure once.
#[test]
fn contract_longer_cycle_terminates() {
    let (engine, _) = resilient_engine(vec![
        item("A").with_dependencies(["B"]),
        item("B").with_dependencies(["C"]),
        item("C").with_dependencies(["A"]),
    ]);

    let closure: Vec<&str> = engine
        .dependencies(engine.template("A").unwrap(), &ctx())
        .unwrap()
        .iter()
        .map(|t| t.identity())
        .collect();
    assert_eq!(closure, ["B", "C"]);

    let node = engine.resolve_identity("A", &ctx()).unwrap();
    assert!(node.node_count() < 16);
}

/// CONTRACT: requirements are one level and must not require anything.
#[test]
fn contract_requirements_are_flat() {
    let (engine, sink) = resilient_engine(vec![
        item("A").with_requirements(["R1", "R2"]),
        item("R1"),
        item("R2").with_requirements(["R1"]),
    ]);

    let requirements: Vec<&str> = engine
        .requirements(engine.template("A").unwrap(), &ctx())
        .unwrap()
        .iter()
        .map(|t| t.identity())
        .collect();

    assert_eq!(requirements, ["R1"]);
    assert_diagnostics!(sink, [DiagnosticKind::RecursiveRequirementNotAllowed]);
}

/// CONTRACT: exclusions match group identities, not identities.
#[test]
fn contract_exclusions_match_group_identity() {
    let (engine, sink) = resilient_engine(vec![
        item("A").with_exclusions(["gLegacy", "Legacy.Page"]),
        item("Legacy.Page").with_group_identity("gLegacy"),
    ]);

    let excluded: Vec<&str> = engine
        .exclusions(engine.template("A").unwrap(), &ctx())
        .unwrap()
        .iter()
        .map(|t| t.identity())
        .collect();

    assert_eq!(excluded, ["Legacy.Page"]);
    assert_diagnostics!(sink, [DiagnosticKind::ExclusionNotFound]);
}

/// CONTRACT: right-click templates declare neither requirements nor exclusions.
#[test]
fn contract_right_click_templates_have_no_requirements_or_exclusions() {
    let (engine, sink) = resilient_engine(vec![
        item("A")
            .with_right_click(true)
            .with_requirements(["R"])
            .with_exclusions(["gE"]),
        item("R"),
        item("E").with_group_identity("gE"),
    ]);

    let node = engine.resolve_identity("A", &ctx()).unwrap();

    assert!(node.requirements.is_empty());
    assert!(node.exclusions.is_empty());
    assert_diagnostics!(
        sink,
        [
            DiagnosticKind::RequirementsNotAllowedOnRightClick,
            DiagnosticKind::ExclusionsNotAllowedOnRightClick,
        ]
    );
}

/// CONTRACT: a resolved node carries its relationships, each resolved in turn.
#[test]
fn contract_resolved_children_carry_their_own_relationships() {
    let (engine, _) = resilient_engine(vec![
        item("A").with_dependencies(["B"]),
        item("B").with_dependencies(["C"]).with_exclusions(["E"]),
        item("C"),
        item("E"),
    ]);

    let node = engine.resolve_identity("A", &ctx()).unwrap();

    assert_eq!(node.dependency_identities(), ["B", "C"]);
    let b = &node.dependencies[0];
    assert_eq!(b.dependency_identities(), ["C"]);
    assert_eq!(b.exclusion_identities(), ["E"]);
}
