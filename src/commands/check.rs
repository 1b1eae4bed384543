//! Check command handler

use anyhow::Result;

use stencil::domain::value_objects::{ResolutionContext, TemplateKind};
use stencil::{CheckOptions, CheckUseCase, ResolutionEngine};

use crate::ui::terminal::UiContext;
use crate::ui::views::check::CheckView;

/// Returns whether the catalog is clean
pub fn cmd_check(
    engine: &ResolutionEngine,
    ctx: &ResolutionContext,
    kind: Option<TemplateKind>,
    ui: &UiContext,
) -> Result<bool> {
    let options = CheckOptions {
        kind,
        ..CheckOptions::default()
    };
    let result = CheckUseCase::new(engine).run(ctx, &options);

    if ui.json {
        crate::ui::json::emit_data(
            "check",
            serde_json::json!({
                "context": ctx,
                "templates_checked": result.templates_checked,
                "layout_entries": result.layout_entries,
                "diagnostics": result
                    .diagnostics
                    .iter()
                    .map(|d| serde_json::json!({
                        "code": d.code(),
                        "template": d.template,
                        "reference": d.reference,
                        "message": d.to_string(),
                    }))
                    .collect::<Vec<_>>(),
            }),
        )?;
    } else {
        print!("{}", CheckView::new(ctx, &result).render(ui.color, ui.unicode));
    }

    Ok(result.is_clean())
}
