//! Diagnostic Mode Value Object
//!
//! Process-wide choice of what happens when the catalog is inconsistent.

use serde::{Deserialize, Serialize};

/// How catalog data errors are handled during resolution
///
/// - `Strict`: the first data error aborts the resolution call
/// - `Resilient`: data errors are recorded and the offending relationship is
///   left out of the result (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticMode {
    /// Abort on the first data error (template authoring, CI)
    Strict,
    /// Record and degrade (shipped tool)
    #[default]
    Resilient,
}

impl DiagnosticMode {
    pub fn is_strict(&self) -> bool {
        matches!(self, DiagnosticMode::Strict)
    }
}

impl std::fmt::Display for DiagnosticMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticMode::Strict => write!(f, "strict"),
            DiagnosticMode::Resilient => write!(f, "resilient"),
        }
    }
}

impl std::str::FromStr for DiagnosticMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(DiagnosticMode::Strict),
            "resilient" => Ok(DiagnosticMode::Resilient),
            other => Err(format!(
                "unknown diagnostic mode '{}' (expected strict or resilient)",
                other
            )),
        }
    }
}
