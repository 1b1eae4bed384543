//! Template descriptor entity - one template variant as published by the catalog
//!
//! Descriptors are read-only snapshots. The engine never mutates them; the
//! builders exist for the catalog adapters and for tests.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::TemplateKind;

/// A license attached to a template
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct License {
    pub text: String,
    pub url: String,
}

impl License {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }

    /// Key used to decide whether two licenses are the same license.
    ///
    /// Whitespace runs collapse, comparison ignores case and a trailing `/`
    /// on the url.
    pub fn normalized(&self) -> (String, String) {
        let text = self
            .text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        let url = self.url.trim().trim_end_matches('/').to_lowercase();
        (text, url)
    }
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.url.is_empty() {
            write!(f, "{}", self.text)
        } else {
            write!(f, "{} <{}>", self.text, self.url)
        }
    }
}

/// A slot in a project template's layout, filled by an item template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSlot {
    /// Group identity of the item template that fills this slot
    pub target_group_identity: String,
    /// Project types this slot applies to; `None` means every project type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type_scope: Option<Vec<String>>,
    /// Display name of the generated item, if the project pins one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether the generated item can be removed by the user
    pub read_only: bool,
}

impl LayoutSlot {
    pub fn new(target_group_identity: impl Into<String>) -> Self {
        Self {
            target_group_identity: target_group_identity.into(),
            project_type_scope: None,
            name: None,
            read_only: false,
        }
    }

    pub fn with_project_type_scope(mut self, scope: Vec<String>) -> Self {
        self.project_type_scope = Some(scope);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Does this slot apply to the given project type?
    pub fn applies_to(&self, project_type: &str) -> bool {
        match &self.project_type_scope {
            None => true,
            Some(scope) => scope.iter().any(|pt| pt == project_type),
        }
    }
}

/// Immutable description of one template variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateDescriptor {
    identity: String,
    group_identity: String,
    /// Metadata key (display name, description and icon are looked up by it)
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    kind: TemplateKind,
    platform: String,
    project_types: Vec<String>,
    front_end_frameworks: Vec<String>,
    back_end_frameworks: Vec<String>,
    platform_options: BTreeMap<String, Vec<String>>,
    dependency_identities: Vec<String>,
    requirement_identities: Vec<String>,
    exclusion_identities: Vec<String>,
    allows_multiple_instances: bool,
    right_click_enabled: bool,
    licenses: Vec<License>,
    layout_slots: Vec<LayoutSlot>,
}

impl TemplateDescriptor {
    /// Create a descriptor with empty relations and compatibility sets.
    ///
    /// The group identity and name default to the identity.
    pub fn new(identity: impl Into<String>, kind: TemplateKind, platform: impl Into<String>) -> Self {
        let identity = identity.into();
        Self {
            group_identity: identity.clone(),
            name: identity.clone(),
            identity,
            language: None,
            kind,
            platform: platform.into(),
            project_types: Vec::new(),
            front_end_frameworks: Vec::new(),
            back_end_frameworks: Vec::new(),
            platform_options: BTreeMap::new(),
            dependency_identities: Vec::new(),
            requirement_identities: Vec::new(),
            exclusion_identities: Vec::new(),
            allows_multiple_instances: false,
            right_click_enabled: false,
            licenses: Vec::new(),
            layout_slots: Vec::new(),
        }
    }

    // --- Builders ---

    pub fn with_group_identity(mut self, group_identity: impl Into<String>) -> Self {
        self.group_identity = group_identity.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_project_types<S: Into<String>>(mut self, types: impl IntoIterator<Item = S>) -> Self {
        self.project_types = dedup(types);
        self
    }

    pub fn with_front_end_frameworks<S: Into<String>>(
        mut self,
        frameworks: impl IntoIterator<Item = S>,
    ) -> Self {
        self.front_end_frameworks = dedup(frameworks);
        self
    }

    pub fn with_back_end_frameworks<S: Into<String>>(
        mut self,
        frameworks: impl IntoIterator<Item = S>,
    ) -> Self {
        self.back_end_frameworks = dedup(frameworks);
        self
    }

    /// Builder: allow `values` for platform option `key`
    pub fn with_platform_option<S: Into<String>>(
        mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        self.platform_options.insert(key.into(), dedup(values));
        self
    }

    pub fn with_dependencies<S: Into<String>>(mut self, identities: impl IntoIterator<Item = S>) -> Self {
        self.dependency_identities = dedup(identities);
        self
    }

    pub fn with_requirements<S: Into<String>>(mut self, identities: impl IntoIterator<Item = S>) -> Self {
        self.requirement_identities = dedup(identities);
        self
    }

    /// Builder: exclusions are group identities, not identities
    pub fn with_exclusions<S: Into<String>>(mut self, group_identities: impl IntoIterator<Item = S>) -> Self {
        self.exclusion_identities = dedup(group_identities);
        self
    }

    pub fn with_multiple_instances(mut self, allowed: bool) -> Self {
        self.allows_multiple_instances = allowed;
        self
    }

    pub fn with_right_click(mut self, enabled: bool) -> Self {
        self.right_click_enabled = enabled;
        self
    }

    pub fn with_licenses(mut self, licenses: Vec<License>) -> Self {
        self.licenses = licenses;
        self
    }

    pub fn with_layout(mut self, slots: Vec<LayoutSlot>) -> Self {
        self.layout_slots = slots;
        self
    }

    // --- Getters ---

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn group_identity(&self) -> &str {
        &self.group_identity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn project_types(&self) -> &[String] {
        &self.project_types
    }

    pub fn front_end_frameworks(&self) -> &[String] {
        &self.front_end_frameworks
    }

    pub fn back_end_frameworks(&self) -> &[String] {
        &self.back_end_frameworks
    }

    pub fn platform_options(&self) -> &BTreeMap<String, Vec<String>> {
        &self.platform_options
    }

    pub fn dependency_identities(&self) -> &[String] {
        &self.dependency_identities
    }

    pub fn requirement_identities(&self) -> &[String] {
        &self.requirement_identities
    }

    pub fn exclusion_identities(&self) -> &[String] {
        &self.exclusion_identities
    }

    pub fn allows_multiple_instances(&self) -> bool {
        self.allows_multiple_instances
    }

    pub fn right_click_enabled(&self) -> bool {
        self.right_click_enabled
    }

    pub fn licenses(&self) -> &[License] {
        &self.licenses
    }

    pub fn layout_slots(&self) -> &[LayoutSlot] {
        &self.layout_slots
    }

    pub fn is_item(&self) -> bool {
        self.kind.is_item()
    }

    /// Does this template list `identity` among its dependencies?
    pub fn depends_on(&self, identity: &str) -> bool {
        self.dependency_identities.iter().any(|d| d == identity)
    }
}

fn dedup<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let value = value.into();
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
