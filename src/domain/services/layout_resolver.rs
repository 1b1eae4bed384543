//! Layout resolver
//!
//! Fills the layout slots declared by compatible project templates with
//! compatible item templates of the slot's group identity.

use crate::domain::entities::{LayoutEntry, LayoutSlot, TemplateDescriptor};
use crate::domain::policies::is_compatible;
use crate::domain::ports::ResolveError;
use crate::domain::value_objects::{DiagnosticKind, ResolutionContext};

use super::TemplateResolver;

#[derive(Clone, Copy)]
pub struct LayoutResolver<'a> {
    templates: TemplateResolver<'a>,
}

impl<'a> LayoutResolver<'a> {
    pub fn new(templates: TemplateResolver<'a>) -> Self {
        Self { templates }
    }

    /// Lazily resolve the layout for `ctx`.
    ///
    /// Every call starts a fresh pass over the catalog. Slots whose target is
    /// missing or not an item are reported and skipped; in strict mode the
    /// report is yielded as an `Err` and the iterator ends.
    pub fn resolve_layout(&self, ctx: &ResolutionContext) -> LayoutIter<'a> {
        LayoutIter {
            resolver: *self,
            ctx: ctx.clone(),
            project_index: 0,
            slot_index: 0,
            done: false,
        }
    }

    fn fill(
        &self,
        project: &TemplateDescriptor,
        slot: &LayoutSlot,
        ctx: &ResolutionContext,
    ) -> Result<Option<LayoutEntry>, ResolveError> {
        let relationships = self.templates.relationships();
        let group = slot.target_group_identity.as_str();

        let Some(target) = relationships.find(ctx, |t| t.group_identity() == group) else {
            relationships.report(DiagnosticKind::LayoutTargetNotFound, project, group)?;
            return Ok(None);
        };

        if !target.is_item() {
            relationships.report(DiagnosticKind::LayoutTargetWrongKind, project, group)?;
            return Ok(None);
        }

        Ok(Some(LayoutEntry {
            project: project.identity().to_string(),
            slot: slot.clone(),
            template: self.templates.resolve(target, ctx)?,
        }))
    }
}

/// Iterator over the filled layout slots of every compatible project template
pub struct LayoutIter<'a> {
    resolver: LayoutResolver<'a>,
    ctx: ResolutionContext,
    project_index: usize,
    slot_index: usize,
    done: bool,
}

impl<'a> LayoutIter<'a> {
    fn next_project(&mut self) {
        self.project_index += 1;
        self.slot_index = 0;
    }
}

impl<'a> Iterator for LayoutIter<'a> {
    type Item = Result<LayoutEntry, ResolveError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let catalog = self.resolver.templates.relationships().catalog();
        loop {
            let Some(project) = catalog.templates().get(self.project_index) else {
                self.done = true;
                return None;
            };

            if !project.kind().is_project() || !is_compatible(project, &self.ctx) {
                self.next_project();
                continue;
            }

            let Some(slot) = project.layout_slots().get(self.slot_index) else {
                self.next_project();
                continue;
            };
            self.slot_index += 1;

            if !slot.applies_to(&self.ctx.project_type) {
                continue;
            }

            match self.resolver.fill(project, slot, &self.ctx) {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => continue,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl std::iter::FusedIterator for LayoutIter<'_> {}
