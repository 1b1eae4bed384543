//! Property tests for dependency closures over random catalogs.
//!
//! Catalogs are random graphs over a handful of templates, cycles included.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use proptest::prelude::*;

use stencil::{
    Catalog, MemorySink, ResilientReporter, ResolutionContext, ResolutionEngine, TemplateDescriptor,
    TemplateKind,
};

const MAX_TEMPLATES: usize = 6;

fn name(i: usize) -> String {
    format!("T{i}")
}

/// Adjacency lists: template `i` depends on the listed indices
fn graph() -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1..=MAX_TEMPLATES).prop_flat_map(|n| {
        proptest::collection::vec(proptest::collection::vec(0..n, 0..=3), n)
    })
}

fn engine(graph: &[Vec<usize>]) -> (ResolutionEngine, MemorySink) {
    let templates = graph
        .iter()
        .enumerate()
        .map(|(i, deps)| {
            TemplateDescriptor::new(name(i), TemplateKind::Feature, "web")
                .with_project_types(["all"])
                .with_dependencies(deps.iter().map(|&d| name(d)))
        })
        .collect();
    let sink = MemorySink::new();
    let engine = ResolutionEngine::new(
        Catalog::new(templates).unwrap(),
        Arc::new(ResilientReporter::new(sink.clone())),
    );
    (engine, sink)
}

/// Everything reachable from `root`, root excluded unless it lies on a cycle
/// (the closure drops it either way)
fn reachable(graph: &[Vec<usize>], root: usize) -> BTreeSet<String> {
    let mut seen = HashSet::new();
    let mut stack = graph[root].clone();
    while let Some(next) = stack.pop() {
        if seen.insert(next) {
            stack.extend(graph[next].iter().copied());
        }
    }
    seen.remove(&root);
    seen.into_iter().map(name).collect()
}

fn ctx() -> ResolutionContext {
    ResolutionContext::new("web", "spa")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the closure is exactly the reachable set, without the root
    /// and without duplicates.
    #[test]
    fn property_closure_is_reachable_set(graph in graph()) {
        let (engine, _) = engine(&graph);

        for root in 0..graph.len() {
            let template = engine.template(&name(root)).unwrap();
            let closure: Vec<String> = engine
                .dependencies(template, &ctx())
                .unwrap()
                .iter()
                .map(|t| t.identity().to_string())
                .collect();

            let unique: BTreeSet<String> = closure.iter().cloned().collect();
            prop_assert_eq!(unique.len(), closure.len());
            prop_assert!(!unique.contains(&name(root)));
            prop_assert_eq!(unique, reachable(&graph, root));
        }
    }

    /// PROPERTY: resolving twice gives the same result and the same diagnostics.
    #[test]
    fn property_resolution_is_idempotent(graph in graph()) {
        let (engine, sink) = engine(&graph);
        let root = name(0);

        let first = engine.resolve_identity(&root, &ctx()).unwrap();
        let first_diagnostics = sink.diagnostics();
        sink.clear();
        let second = engine.resolve_identity(&root, &ctx()).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_diagnostics, sink.diagnostics());
    }

    /// PROPERTY: only cycle diagnostics appear in an otherwise valid catalog,
    /// and only for templates that really depend on each other.
    #[test]
    fn property_cycle_reports_are_real_back_edges(graph in graph()) {
        let (engine, sink) = engine(&graph);

        for root in 0..graph.len() {
            let template = engine.template(&name(root)).unwrap();
            engine.dependencies(template, &ctx()).unwrap();
        }

        for diagnostic in sink.diagnostics() {
            prop_assert_eq!(diagnostic.kind, stencil::DiagnosticKind::CircularDependency);
            let from = engine.template(&diagnostic.template).unwrap();
            let to = engine.template(&diagnostic.reference).unwrap();
            prop_assert!(from.depends_on(to.identity()));
            prop_assert!(to.depends_on(from.identity()));
        }
    }
}
