use stencil::application::CheckResult;
use stencil::domain::value_objects::ResolutionContext;

use crate::ui::text::{ColoredText, Icon};

pub struct CheckView<'a> {
    ctx: &'a ResolutionContext,
    result: &'a CheckResult,
}

impl<'a> CheckView<'a> {
    pub fn new(ctx: &'a ResolutionContext, result: &'a CheckResult) -> Self {
        Self { ctx, result }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{}\n",
            ColoredText::plain(format!("Catalog check for {}", self.ctx))
                .bold()
                .render(supports_color)
        );

        for diagnostic in &self.result.diagnostics {
            out.push_str(&format!(
                "{} {} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(diagnostic.code()).render(supports_color),
                diagnostic
            ));
        }

        let stats = format!(
            "{} templates, {} layout entries",
            self.result.templates_checked, self.result.layout_entries
        );
        if self.result.is_clean() {
            out.push_str(&format!(
                "{} {} ({})\n",
                Icon::Success.colored(supports_color, supports_unicode),
                ColoredText::success("No problems found").render(supports_color),
                stats
            ));
        } else {
            out.push_str(&format!(
                "{} {} ({})\n",
                Icon::Error.colored(supports_color, supports_unicode),
                ColoredText::error(format!("{} problem(s) found", self.result.diagnostics.len()))
                    .render(supports_color),
                stats
            ));
        }
        out
    }
}
