//! Resolved views handed back to callers
//!
//! A `ResolvedNode` graph is built fresh for every call and owned by the
//! caller; nothing in it points back into the catalog.

use serde::Serialize;

use super::{LayoutSlot, TemplateDescriptor};

/// A template together with its resolved relationships
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedNode {
    pub template: TemplateDescriptor,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub dependencies: Vec<ResolvedNode>,
    pub requirements: Vec<ResolvedNode>,
    pub exclusions: Vec<ResolvedNode>,
}

impl ResolvedNode {
    /// A node with descriptive fields only and no relationships
    pub fn leaf(template: TemplateDescriptor, display_name: impl Into<String>) -> Self {
        Self {
            template,
            display_name: display_name.into(),
            description: None,
            icon: None,
            dependencies: Vec::new(),
            requirements: Vec::new(),
            exclusions: Vec::new(),
        }
    }

    pub fn identity(&self) -> &str {
        self.template.identity()
    }

    pub fn dependency_identities(&self) -> Vec<&str> {
        self.dependencies.iter().map(|d| d.identity()).collect()
    }

    pub fn requirement_identities(&self) -> Vec<&str> {
        self.requirements.iter().map(|r| r.identity()).collect()
    }

    pub fn exclusion_identities(&self) -> Vec<&str> {
        self.exclusions.iter().map(|e| e.identity()).collect()
    }

    /// Total number of nodes in this graph, counting this one
    pub fn node_count(&self) -> usize {
        1 + self
            .dependencies
            .iter()
            .chain(&self.requirements)
            .chain(&self.exclusions)
            .map(ResolvedNode::node_count)
            .sum::<usize>()
    }
}

/// One filled layout slot of a compatible project template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEntry {
    /// Identity of the project template that declared the slot
    pub project: String,
    pub slot: LayoutSlot,
    pub template: ResolvedNode,
}
