//! Contract: catalog data errors follow the injected diagnostic policy.

use std::sync::Arc;

use stencil::infrastructure::BackgroundSink;
use stencil::{
    reporter_for, Diagnostic, DiagnosticKind, DiagnosticMode, LayoutSlot, MemorySink,
    ResilientReporter, ResolveError,
};

use crate::assert_diagnostics;
use crate::common::*;

/// CONTRACT: strict mode fails the call with the first data error.
#[test]
fn contract_strict_mode_aborts_on_first_error() {
    let engine = strict_engine(vec![
        item("A").with_dependencies(["Missing", "AlsoMissing"]),
    ]);

    let err = engine.resolve_identity("A", &ctx()).unwrap_err();

    assert_eq!(
        err,
        ResolveError::Catalog(Diagnostic::new(DiagnosticKind::DependencyNotFound, "A", "Missing"))
    );
}

/// CONTRACT: resilient mode records every error and drops the bad relationship.
#[test]
fn contract_resilient_mode_records_and_degrades() {
    let (engine, sink) = resilient_engine(vec![
        item("A").with_dependencies(["Missing", "P", "Multi", "B"]),
        project("P"),
        item("Multi").with_multiple_instances(true),
        item("B"),
    ]);

    let node = engine.resolve_identity("A", &ctx()).unwrap();

    assert_eq!(node.dependency_identities(), ["B"]);
    assert_diagnostics!(
        sink,
        [
            DiagnosticKind::DependencyNotFound,
            DiagnosticKind::DependencyWrongKind,
            DiagnosticKind::DependencyCannotBeMultiInstance,
        ]
    );
}

/// CONTRACT: asking for an identity the catalog does not have is a caller
/// error in both modes, never a diagnostic.
#[test]
fn contract_unknown_identity_is_not_a_diagnostic() {
    for mode in [DiagnosticMode::Strict, DiagnosticMode::Resilient] {
        let (engine, sink) = engine_for(mode, vec![item("A")]);

        let err = engine.resolve_identity("Nope", &ctx()).unwrap_err();

        assert!(matches!(err, ResolveError::UnknownTemplate { ref identity } if identity == "Nope"));
        assert!(err.diagnostic().is_none());
        assert!(sink.is_empty());
    }
}

/// CONTRACT: exclusions that collide with dependencies or requirements are reported.
#[test]
fn contract_exclusion_conflicts_are_reported() {
    let (engine, sink) = resilient_engine(vec![
        item("A")
            .with_dependencies(["B"])
            .with_requirements(["R"])
            .with_exclusions(["B", "R"]),
        item("B"),
        item("R"),
    ]);

    let excluded = engine.exclusions(engine.template("A").unwrap(), &ctx()).unwrap();

    assert!(excluded.is_empty());
    assert_diagnostics!(
        sink,
        [
            DiagnosticKind::ExclusionConflictsWithDependency,
            DiagnosticKind::ExclusionConflictsWithRequirement,
        ]
    );
}

/// CONTRACT: broken layout slots are skipped in resilient mode and end the
/// iteration with an error in strict mode.
#[test]
fn contract_layout_targets_are_validated() {
    let templates = vec![
        project("P").with_layout(vec![
            LayoutSlot::new("gMissing"),
            LayoutSlot::new("gOther"),
            LayoutSlot::new("gHome"),
        ]),
        project("Other").with_group_identity("gOther"),
        item("Home").with_group_identity("gHome"),
    ];

    let (engine, sink) = resilient_engine(templates.clone());
    let entries: Vec<_> = engine
        .resolve_layout(&ctx())
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].template.identity(), "Home");
    assert_diagnostics!(
        sink,
        [DiagnosticKind::LayoutTargetNotFound, DiagnosticKind::LayoutTargetWrongKind]
    );

    let engine = strict_engine(templates);
    let results: Vec<_> = engine.resolve_layout(&ctx()).collect();
    assert_eq!(results.len(), 1);
    assert!(matches!(
        &results[0],
        Err(ResolveError::Catalog(d)) if d.kind == DiagnosticKind::LayoutTargetNotFound
    ));
}

/// CONTRACT: switching the reporter does not copy or reload the catalog.
#[test]
fn contract_with_reporter_shares_the_snapshot() {
    let strict = strict_engine(vec![item("A").with_dependencies(["Missing"])]);
    let sink = MemorySink::new();
    let resilient = strict.with_reporter(Arc::new(ResilientReporter::new(sink.clone())));

    assert!(Arc::ptr_eq(&strict.snapshot(), &resilient.snapshot()));
    assert!(strict.resolve_identity("A", &ctx()).is_err());
    assert!(resilient.resolve_identity("A", &ctx()).is_ok());
    assert_eq!(sink.len(), 1);
}

/// CONTRACT: a background sink delivers every diagnostic once it is shut down.
#[test]
fn contract_background_sink_delivers_everything() {
    let memory = MemorySink::new();
    let background = Arc::new(BackgroundSink::spawn(memory.clone()).unwrap());
    let (engine, _) = resilient_engine(vec![item("A").with_dependencies(["M1", "M2", "M3"])]);
    let engine = engine.with_reporter(reporter_for(DiagnosticMode::Resilient, background.clone()));

    engine.resolve_identity("A", &ctx()).unwrap();
    background.shutdown();

    let references: Vec<String> = memory.diagnostics().into_iter().map(|d| d.reference).collect();
    assert_eq!(references, ["M1", "M2", "M3"]);
}
