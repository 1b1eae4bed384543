//! Resolution context - the axis values a generation session is pinned to
//!
//! Supplied per call and never stored by the engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Wildcard accepted in project types, frameworks and option values
pub const ALL: &str = "all";

/// Platform, project type, frameworks and platform options for one resolution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionContext {
    pub platform: String,
    pub project_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_end_framework: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_end_framework: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub platform_options: BTreeMap<String, String>,
}

impl ResolutionContext {
    pub fn new(platform: impl Into<String>, project_type: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            project_type: project_type.into(),
            ..Self::default()
        }
    }

    /// Builder: pin the front-end framework
    pub fn with_front_end(mut self, framework: impl Into<String>) -> Self {
        self.front_end_framework = Some(framework.into());
        self
    }

    /// Builder: pin the back-end framework
    pub fn with_back_end(mut self, framework: impl Into<String>) -> Self {
        self.back_end_framework = Some(framework.into());
        self
    }

    /// Builder: add a platform option value
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.platform_options.insert(key.into(), value.into());
        self
    }

    /// Parse a `KEY=VALUE` pair (as given on the command line) into an option
    pub fn parse_option(raw: &str) -> Result<(String, String), String> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return Err(format!("expected KEY=VALUE, got '{}'", raw));
        }
        Ok((key.to_string(), value.to_string()))
    }
}

impl std::fmt::Display for ResolutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.platform, self.project_type)?;
        if let Some(fe) = &self.front_end_framework {
            write!(f, " frontend={}", fe)?;
        }
        if let Some(be) = &self.back_end_framework {
            write!(f, " backend={}", be)?;
        }
        for (key, value) in &self.platform_options {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}
