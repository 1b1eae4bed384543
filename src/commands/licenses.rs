//! Licenses command handler

use anyhow::Result;

use stencil::domain::value_objects::ResolutionContext;
use stencil::ResolutionEngine;

use crate::ui::terminal::UiContext;
use crate::ui::views::licenses::LicensesView;

pub fn cmd_licenses(
    engine: &ResolutionEngine,
    ctx: &ResolutionContext,
    identity: &str,
    ui: &UiContext,
) -> Result<()> {
    let licenses = engine.all_licenses(identity, ctx)?;

    if ui.json {
        crate::ui::json::emit_data(
            "licenses",
            serde_json::json!({
                "template": identity,
                "context": ctx,
                "licenses": licenses,
            }),
        )?;
        return Ok(());
    }

    print!("{}", LicensesView::new(identity, &licenses).render(ui.color, ui.unicode));
    Ok(())
}
