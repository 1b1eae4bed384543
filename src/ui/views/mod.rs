pub mod check;
pub mod layout;
pub mod licenses;
pub mod list;
pub mod tree;

use stencil::domain::entities::TemplateDescriptor;

use crate::ui::text::ColoredText;

/// `Display Name (identity) kind`, or `identity kind` when they coincide
pub(crate) fn template_label(template: &TemplateDescriptor, display_name: &str, color: bool) -> String {
    let kind = ColoredText::info(template.kind().as_str()).render(color);
    if display_name == template.identity() {
        format!("{} {}", ColoredText::plain(display_name).bold().render(color), kind)
    } else {
        format!(
            "{} {} {}",
            ColoredText::plain(display_name).bold().render(color),
            ColoredText::dim(format!("({})", template.identity())).render(color),
            kind
        )
    }
}
