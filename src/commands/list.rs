//! List command handler

use anyhow::Result;

use stencil::domain::value_objects::{ResolutionContext, TemplateKind};
use stencil::ResolutionEngine;

use crate::ui::terminal::UiContext;
use crate::ui::views::list::TemplateListView;

pub fn cmd_list(
    engine: &ResolutionEngine,
    ctx: &ResolutionContext,
    kind: Option<TemplateKind>,
    ui: &UiContext,
) -> Result<()> {
    let templates = engine.compatible_templates(kind, ctx);

    if ui.json {
        crate::ui::json::emit_data(
            "list",
            serde_json::json!({
                "context": ctx,
                "templates": templates,
            }),
        )?;
        return Ok(());
    }

    let labelled: Vec<_> = templates
        .into_iter()
        .map(|t| (t, engine.display_name(t)))
        .collect();
    print!("{}", TemplateListView::new(ctx, &labelled).render(ui.color, ui.unicode));
    Ok(())
}
