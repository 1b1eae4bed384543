//! Resolve command handler

use anyhow::Result;

use stencil::domain::value_objects::ResolutionContext;
use stencil::ResolutionEngine;

use crate::ui::terminal::UiContext;
use crate::ui::views::tree::ResolvedTreeView;

pub fn cmd_resolve(
    engine: &ResolutionEngine,
    ctx: &ResolutionContext,
    identity: &str,
    ui: &UiContext,
) -> Result<()> {
    let node = engine.resolve_identity(identity, ctx)?;

    if ui.json {
        crate::ui::json::emit_data(
            "resolve",
            serde_json::json!({
                "context": ctx,
                "template": node,
            }),
        )?;
        return Ok(());
    }

    print!("{}", ResolvedTreeView::new(&node).render(ui.color, ui.unicode));
    Ok(())
}
