//! Template kind value object - what a template contributes to a generated project

use serde::{Deserialize, Serialize};

/// Kind of template in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Whole-project skeleton (owns the layout slots)
    Project,
    /// A page or view added to a project
    #[default]
    Page,
    /// A cross-cutting feature
    Feature,
    /// A backend service
    Service,
    /// A test project or test harness
    Testing,
    /// Glue that stitches other templates together; never an item
    Composition,
}

impl TemplateKind {
    /// Kinds a user can add to an existing project
    pub const ITEMS: [TemplateKind; 4] = [
        TemplateKind::Page,
        TemplateKind::Feature,
        TemplateKind::Service,
        TemplateKind::Testing,
    ];

    /// Returns true for kinds that can be the target of a relationship
    /// (dependency, requirement, exclusion or layout slot).
    pub fn is_item(&self) -> bool {
        Self::ITEMS.contains(self)
    }

    pub fn is_project(&self) -> bool {
        matches!(self, TemplateKind::Project)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Project => "project",
            TemplateKind::Page => "page",
            TemplateKind::Feature => "feature",
            TemplateKind::Service => "service",
            TemplateKind::Testing => "testing",
            TemplateKind::Composition => "composition",
        }
    }
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TemplateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "project" => Ok(TemplateKind::Project),
            "page" => Ok(TemplateKind::Page),
            "feature" => Ok(TemplateKind::Feature),
            "service" => Ok(TemplateKind::Service),
            "testing" => Ok(TemplateKind::Testing),
            "composition" => Ok(TemplateKind::Composition),
            other => Err(format!(
                "unknown template kind '{}' (expected project, page, feature, service, testing or composition)",
                other
            )),
        }
    }
}
