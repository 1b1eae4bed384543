//! Compatibility Policy
//!
//! Decides whether a template can take part in a generation session.
//! Pure function over a descriptor and a resolution context.

use crate::domain::entities::TemplateDescriptor;
use crate::domain::value_objects::{ResolutionContext, ALL};

/// Does `template` satisfy every axis of `ctx`?
///
/// - platform: equal, ignoring case
/// - project type: listed, or the template lists `all`
/// - front-end / back-end framework: unset in the context, listed (ignoring
///   case), or the template lists `all`
/// - platform options: no options in the context, or at least one context
///   `(key, value)` pair is allowed by the template
pub fn is_compatible(template: &TemplateDescriptor, ctx: &ResolutionContext) -> bool {
    template.platform().eq_ignore_ascii_case(&ctx.platform)
        && matches_project_type(template.project_types(), &ctx.project_type)
        && matches_framework(template.front_end_frameworks(), ctx.front_end_framework.as_deref())
        && matches_framework(template.back_end_frameworks(), ctx.back_end_framework.as_deref())
        && matches_platform_options(template, ctx)
}

fn is_wildcard(value: &str) -> bool {
    value.eq_ignore_ascii_case(ALL)
}

fn matches_project_type(project_types: &[String], project_type: &str) -> bool {
    project_types
        .iter()
        .any(|pt| pt == project_type || is_wildcard(pt))
}

fn matches_framework(frameworks: &[String], wanted: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => frameworks
            .iter()
            .any(|fw| fw.eq_ignore_ascii_case(wanted) || is_wildcard(fw)),
    }
}

// A single matching pair is enough. This mirrors the catalog format's
// historical behaviour and is kept until product confirms AND semantics.
fn matches_platform_options(template: &TemplateDescriptor, ctx: &ResolutionContext) -> bool {
    if ctx.platform_options.is_empty() {
        return true;
    }

    ctx.platform_options.iter().any(|(key, value)| {
        template
            .platform_options()
            .get(key)
            .is_some_and(|allowed| {
                allowed
                    .iter()
                    .any(|a| a.eq_ignore_ascii_case(value) || is_wildcard(a))
            })
    })
}
