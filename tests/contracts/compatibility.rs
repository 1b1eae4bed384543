//! Contract: a template takes part in a session only when every axis matches.

use stencil::{ResolutionContext, TemplateDescriptor, TemplateKind};

use crate::common::*;

fn grid() -> TemplateDescriptor {
    TemplateDescriptor::new("Grid", TemplateKind::Page, "web")
        .with_project_types(["spa", "mpa"])
        .with_front_end_frameworks(["react"])
        .with_back_end_frameworks(["all"])
        .with_platform_option("arch", ["x64"])
        .with_platform_option("os", ["linux"])
}

/// CONTRACT: compatible_templates only returns templates matching the context,
/// in catalog order.
#[test]
fn contract_compatible_templates_filters_and_keeps_order() {
    let (engine, _) = resilient_engine(vec![
        item("A"),
        TemplateDescriptor::new("Desktop", TemplateKind::Page, "desktop").with_project_types(["all"]),
        item("B"),
        project("P"),
        TemplateDescriptor::new("Mpa", TemplateKind::Page, "web").with_project_types(["mpa"]),
    ]);

    let all: Vec<&str> = engine
        .compatible_templates(None, &ctx())
        .iter()
        .map(|t| t.identity())
        .collect();
    assert_eq!(all, ["A", "B", "P"]);

    let projects: Vec<&str> = engine
        .compatible_templates(Some(TemplateKind::Project), &ctx())
        .iter()
        .map(|t| t.identity())
        .collect();
    assert_eq!(projects, ["P"]);
}

/// CONTRACT: unset framework axes in the context are not constrained.
#[test]
fn contract_unset_frameworks_match_anything() {
    let (engine, _) = resilient_engine(vec![grid()]);
    let template = engine.template("Grid").unwrap();

    assert!(engine.is_compatible(template, &ResolutionContext::new("web", "spa")));
    assert!(engine.is_compatible(template, &ResolutionContext::new("WEB", "mpa")));
}

/// CONTRACT: project type matching is exact; only the wildcard ignores case.
#[test]
fn contract_project_type_is_case_sensitive() {
    let (engine, _) = resilient_engine(vec![
        grid(),
        TemplateDescriptor::new("Any", TemplateKind::Page, "web").with_project_types(["ALL"]),
    ]);

    assert!(!engine.is_compatible(engine.template("Grid").unwrap(), &ResolutionContext::new("web", "SPA")));
    assert!(engine.is_compatible(engine.template("Any").unwrap(), &ResolutionContext::new("web", "SPA")));
}

/// CONTRACT: frameworks compare ignoring case and accept the `all` wildcard.
#[test]
fn contract_frameworks_match_listed_or_wildcard() {
    let (engine, _) = resilient_engine(vec![grid()]);
    let template = engine.template("Grid").unwrap();

    let react = ResolutionContext::new("web", "spa").with_front_end("React");
    let vue = ResolutionContext::new("web", "spa").with_front_end("vue");
    let any_backend = ResolutionContext::new("web", "spa").with_back_end("anything");

    assert!(engine.is_compatible(template, &react));
    assert!(!engine.is_compatible(template, &vue));
    assert!(engine.is_compatible(template, &any_backend));
}

/// CONTRACT: one matching platform option is enough.
#[test]
fn contract_platform_options_use_any_match() {
    let (engine, _) = resilient_engine(vec![grid()]);
    let template = engine.template("Grid").unwrap();

    let one_of_two = ctx().with_option("arch", "x64").with_option("os", "windows");
    let none = ctx().with_option("arch", "arm64").with_option("os", "windows");
    let unknown_key = ctx().with_option("gpu", "cuda");

    assert!(engine.is_compatible(template, &one_of_two));
    assert!(!engine.is_compatible(template, &none));
    assert!(!engine.is_compatible(template, &unknown_key));
}
