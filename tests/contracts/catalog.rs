//! Contract: catalogs on disk load into one immutable snapshot.

use std::sync::Arc;

use stencil::{
    CatalogError, FsCatalogSource, MemorySink, ResilientReporter, ResolutionEngine, StencilError,
};

use crate::common::*;

fn write(root: &std::path::Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// CONTRACT: TOML and YAML files load together, in path order.
#[test]
fn contract_mixed_formats_load_in_path_order() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "b/pages.yaml",
        "templates:\n  - identity: Yaml.Page\n    kind: page\n    platform: web\n    project_types: [all]\n",
    );
    write(
        dir.path(),
        "a/pages.toml",
        "[[templates]]\nidentity = \"Toml.Page\"\nkind = \"page\"\nplatform = \"web\"\nproject_types = [\"all\"]\n",
    );

    let engine = ResolutionEngine::from_source(
        &FsCatalogSource::new(dir.path()),
        None,
        Arc::new(ResilientReporter::new(MemorySink::new())),
    )
    .unwrap();

    let identities: Vec<&str> = engine
        .compatible_templates(None, &ctx())
        .iter()
        .map(|t| t.identity())
        .collect();
    assert_eq!(identities, ["Toml.Page", "Yaml.Page"]);
}

/// CONTRACT: an identity may appear only once across the whole catalog.
#[test]
fn contract_duplicate_identity_across_files_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let doc = "[[templates]]\nidentity = \"Grid\"\nkind = \"page\"\nplatform = \"web\"\n";
    write(dir.path(), "one.toml", doc);
    write(dir.path(), "two.toml", doc);

    let err = FsCatalogSource::new(dir.path()).load().unwrap_err();

    assert!(matches!(
        err,
        StencilError::Catalog(CatalogError::DuplicateIdentity { ref identity }) if identity == "Grid"
    ));
}

/// CONTRACT: metadata from catalog files feeds display names.
#[test]
fn contract_metadata_sets_display_name() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "web.toml", WEB_CATALOG_TOML);

    let loaded = FsCatalogSource::new(dir.path()).load().unwrap();
    let engine = ResolutionEngine::new(
        stencil::Catalog::new(loaded.templates).unwrap(),
        Arc::new(ResilientReporter::new(MemorySink::new())),
    )
    .with_metadata(Arc::new(loaded.metadata));

    let grid = engine.resolve_identity("Grid.Page", &ctx()).unwrap();
    assert_eq!(grid.display_name, "Data Grid");
    assert_eq!(grid.description.as_deref(), Some("Sortable, pageable table"));

    let auth = engine.template("Auth.Feature").unwrap();
    assert_eq!(engine.display_name(auth), "Auth");
}

/// CONTRACT: the language filter keeps language-neutral templates.
#[test]
fn contract_language_filter_keeps_neutral_templates() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "lang.toml",
        r#"
[[templates]]
identity = "Grid.Rust"
language = "rust"
kind = "page"
platform = "web"
project_types = ["all"]

[[templates]]
identity = "Grid.Go"
language = "go"
kind = "page"
platform = "web"
project_types = ["all"]

[[templates]]
identity = "Readme"
kind = "page"
platform = "web"
project_types = ["all"]
"#,
    );

    let engine = ResolutionEngine::from_source(
        &FsCatalogSource::new(dir.path()),
        Some("Rust"),
        Arc::new(ResilientReporter::new(MemorySink::new())),
    )
    .unwrap();

    let identities: Vec<&str> = engine.catalog().iter().map(|t| t.identity()).collect();
    assert_eq!(identities, ["Grid.Rust", "Readme"]);
}
