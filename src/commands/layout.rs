//! Layout command handler

use anyhow::Result;

use stencil::domain::value_objects::ResolutionContext;
use stencil::ResolutionEngine;

use crate::ui::terminal::UiContext;
use crate::ui::views::layout::LayoutView;

pub fn cmd_layout(engine: &ResolutionEngine, ctx: &ResolutionContext, ui: &UiContext) -> Result<()> {
    let entries = engine.resolve_layout(ctx).collect::<Result<Vec<_>, _>>()?;

    if ui.json {
        crate::ui::json::emit_data(
            "layout",
            serde_json::json!({
                "context": ctx,
                "entries": entries,
            }),
        )?;
        return Ok(());
    }

    print!("{}", LayoutView::new(ctx, &entries).render(ui.color, ui.unicode));
    Ok(())
}
