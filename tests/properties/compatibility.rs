//! Property tests for the compatibility predicate.

use std::sync::Arc;

use proptest::prelude::*;

use stencil::domain::ports::NoopSink;
use stencil::{Catalog, ResilientReporter, ResolutionContext, ResolutionEngine, TemplateDescriptor, TemplateKind};

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,6}").unwrap()
}

fn engine(template: TemplateDescriptor) -> ResolutionEngine {
    ResolutionEngine::new(
        Catalog::new(vec![template]).unwrap(),
        Arc::new(ResilientReporter::new(NoopSink)),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a template listing `all` matches every project type,
    /// framework and option value.
    #[test]
    fn property_wildcard_matches_everything(
        project_type in word(),
        front_end in proptest::option::of(word()),
        back_end in proptest::option::of(word()),
        option_key in word(),
        option_value in word(),
    ) {
        let template = TemplateDescriptor::new("T", TemplateKind::Page, "web")
            .with_project_types(["all"])
            .with_front_end_frameworks(["ALL"])
            .with_back_end_frameworks(["All"])
            .with_platform_option(option_key.clone(), ["all"]);
        let mut ctx = ResolutionContext::new("web", project_type);
        ctx.front_end_framework = front_end;
        ctx.back_end_framework = back_end;
        ctx.platform_options.insert(option_key, option_value);

        let engine = engine(template);
        let template = engine.template("T").unwrap();
        prop_assert!(engine.is_compatible(template, &ctx));
    }

    /// PROPERTY: a different platform never matches.
    #[test]
    fn property_platform_must_match(platform in word()) {
        prop_assume!(!platform.eq_ignore_ascii_case("web"));
        let template = TemplateDescriptor::new("T", TemplateKind::Page, "web")
            .with_project_types(["all"]);

        let engine = engine(template);
        let template = engine.template("T").unwrap();
        prop_assert!(!engine.is_compatible(template, &ResolutionContext::new(platform, "spa")));
    }

    /// PROPERTY: adding one allowed option pair to a context makes the
    /// option axis pass, whatever else the context asks for.
    #[test]
    fn property_one_allowed_option_is_enough(
        extra in proptest::collection::btree_map(word(), word(), 0..4),
    ) {
        let template = TemplateDescriptor::new("T", TemplateKind::Page, "web")
            .with_project_types(["spa"])
            .with_platform_option("arch", ["x64"]);
        let mut ctx = ResolutionContext::new("web", "spa");
        ctx.platform_options = extra;
        ctx.platform_options.insert("arch".to_string(), "x64".to_string());

        let engine = engine(template);
        let template = engine.template("T").unwrap();
        prop_assert!(engine.is_compatible(template, &ctx));
    }
}
