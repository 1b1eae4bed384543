use stencil::domain::entities::LayoutEntry;
use stencil::domain::value_objects::ResolutionContext;

use crate::ui::text::{ColoredText, Icon};

use super::template_label;

pub struct LayoutView<'a> {
    ctx: &'a ResolutionContext,
    entries: &'a [LayoutEntry],
}

impl<'a> LayoutView<'a> {
    pub fn new(ctx: &'a ResolutionContext, entries: &'a [LayoutEntry]) -> Self {
        Self { ctx, entries }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} ({})\n",
            ColoredText::plain(format!("Layout for {}", self.ctx))
                .bold()
                .render(supports_color),
            self.entries.len()
        );

        if self.entries.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning("No layout entries.").render(supports_color)
            ));
            return out;
        }

        for entry in self.entries {
            let mut line = format!(
                "{} {} -> {}",
                Icon::Bullet.colored(supports_color, supports_unicode),
                entry.project,
                template_label(&entry.template.template, &entry.template.display_name, supports_color)
            );
            if let Some(name) = &entry.slot.name {
                line.push_str(&format!(" as {}", name));
            }
            if entry.slot.read_only {
                line.push_str(&format!(" {}", ColoredText::dim("[read-only]").render(supports_color)));
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
