use stencil::domain::entities::TemplateDescriptor;
use stencil::domain::value_objects::ResolutionContext;

use crate::ui::text::{ColoredText, Icon};

use super::template_label;

pub struct TemplateListView<'a> {
    ctx: &'a ResolutionContext,
    templates: &'a [(&'a TemplateDescriptor, String)],
}

impl<'a> TemplateListView<'a> {
    /// `templates` pairs each descriptor with its display name
    pub fn new(ctx: &'a ResolutionContext, templates: &'a [(&'a TemplateDescriptor, String)]) -> Self {
        Self { ctx, templates }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} ({})\n",
            ColoredText::plain(format!("Templates for {}", self.ctx))
                .bold()
                .render(supports_color),
            self.templates.len()
        );

        if self.templates.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning("No compatible templates.").render(supports_color)
            ));
            return out;
        }

        for (template, display_name) in self.templates {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Bullet.colored(supports_color, supports_unicode),
                template_label(template, display_name, supports_color)
            ));
        }
        out
    }
}
