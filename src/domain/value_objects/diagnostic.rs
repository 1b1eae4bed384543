//! Diagnostic value object - a data-consistency problem found in the catalog
//!
//! Every variant describes bad catalog data, never an engine fault.

use serde::Serialize;

/// What is wrong with a relationship declared by a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    DependencyNotFound,
    DependencyWrongKind,
    DependencyCannotBeMultiInstance,
    CircularDependency,
    RequirementNotFound,
    RequirementWrongKind,
    RequirementCannotBeMultiInstance,
    RequirementsNotAllowedOnRightClick,
    RecursiveRequirementNotAllowed,
    ExclusionNotFound,
    ExclusionWrongKind,
    ExclusionsNotAllowedOnRightClick,
    ExclusionConflictsWithDependency,
    ExclusionConflictsWithRequirement,
    LayoutTargetNotFound,
    LayoutTargetWrongKind,
}

impl DiagnosticKind {
    /// Stable snake_case code used in telemetry and JSON output
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::DependencyNotFound => "dependency_not_found",
            DiagnosticKind::DependencyWrongKind => "dependency_wrong_kind",
            DiagnosticKind::DependencyCannotBeMultiInstance => "dependency_cannot_be_multi_instance",
            DiagnosticKind::CircularDependency => "circular_dependency",
            DiagnosticKind::RequirementNotFound => "requirement_not_found",
            DiagnosticKind::RequirementWrongKind => "requirement_wrong_kind",
            DiagnosticKind::RequirementCannotBeMultiInstance => {
                "requirement_cannot_be_multi_instance"
            }
            DiagnosticKind::RequirementsNotAllowedOnRightClick => {
                "requirements_not_allowed_on_right_click"
            }
            DiagnosticKind::RecursiveRequirementNotAllowed => "recursive_requirement_not_allowed",
            DiagnosticKind::ExclusionNotFound => "exclusion_not_found",
            DiagnosticKind::ExclusionWrongKind => "exclusion_wrong_kind",
            DiagnosticKind::ExclusionsNotAllowedOnRightClick => {
                "exclusions_not_allowed_on_right_click"
            }
            DiagnosticKind::ExclusionConflictsWithDependency => {
                "exclusion_conflicts_with_dependency"
            }
            DiagnosticKind::ExclusionConflictsWithRequirement => {
                "exclusion_conflicts_with_requirement"
            }
            DiagnosticKind::LayoutTargetNotFound => "layout_target_not_found",
            DiagnosticKind::LayoutTargetWrongKind => "layout_target_wrong_kind",
        }
    }
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One reported problem: the template being resolved and the reference
/// (identity, group identity or layout target) it could not honour
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub template: String,
    pub reference: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, template: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            kind,
            template: template.into(),
            reference: reference.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (t, r) = (&self.template, &self.reference);
        match self.kind {
            DiagnosticKind::DependencyNotFound => {
                write!(f, "dependency '{r}' of template '{t}' not found in the catalog")
            }
            DiagnosticKind::DependencyWrongKind => {
                write!(f, "dependency '{r}' of template '{t}' is not an item template")
            }
            DiagnosticKind::DependencyCannotBeMultiInstance => write!(
                f,
                "dependency '{r}' of template '{t}' allows multiple instances; dependencies must be single-instance"
            ),
            DiagnosticKind::CircularDependency => {
                write!(f, "circular dependency between '{t}' and '{r}'")
            }
            DiagnosticKind::RequirementNotFound => {
                write!(f, "requirement '{r}' of template '{t}' not found in the catalog")
            }
            DiagnosticKind::RequirementWrongKind => {
                write!(f, "requirement '{r}' of template '{t}' is not an item template")
            }
            DiagnosticKind::RequirementCannotBeMultiInstance => write!(
                f,
                "requirement '{r}' of template '{t}' allows multiple instances; requirements must be single-instance"
            ),
            DiagnosticKind::RequirementsNotAllowedOnRightClick => write!(
                f,
                "template '{t}' is right-click enabled and cannot declare requirements (found '{r}')"
            ),
            DiagnosticKind::RecursiveRequirementNotAllowed => write!(
                f,
                "requirement '{r}' of template '{t}' declares requirements of its own"
            ),
            DiagnosticKind::ExclusionNotFound => {
                write!(f, "exclusion group '{r}' of template '{t}' not found in the catalog")
            }
            DiagnosticKind::ExclusionWrongKind => {
                write!(f, "exclusion group '{r}' of template '{t}' is not an item template")
            }
            DiagnosticKind::ExclusionsNotAllowedOnRightClick => write!(
                f,
                "template '{t}' is right-click enabled and cannot declare exclusions (found '{r}')"
            ),
            DiagnosticKind::ExclusionConflictsWithDependency => write!(
                f,
                "template '{t}' lists '{r}' both as an exclusion and as a dependency"
            ),
            DiagnosticKind::ExclusionConflictsWithRequirement => write!(
                f,
                "template '{t}' lists '{r}' both as an exclusion and as a requirement"
            ),
            DiagnosticKind::LayoutTargetNotFound => {
                write!(f, "layout target '{r}' of project '{t}' not found in the catalog")
            }
            DiagnosticKind::LayoutTargetWrongKind => {
                write!(f, "layout target '{r}' of project '{t}' is not an item template")
            }
        }
    }
}
