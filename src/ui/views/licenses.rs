use stencil::domain::entities::License;

use crate::ui::text::{ColoredText, Icon};

pub struct LicensesView<'a> {
    identity: &'a str,
    licenses: &'a [License],
}

impl<'a> LicensesView<'a> {
    pub fn new(identity: &'a str, licenses: &'a [License]) -> Self {
        Self { identity, licenses }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} ({})\n",
            ColoredText::plain(format!("Licenses for {}", self.identity))
                .bold()
                .render(supports_color),
            self.licenses.len()
        );

        if self.licenses.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Bullet.colored(supports_color, supports_unicode),
                ColoredText::dim("No licenses declared.").render(supports_color)
            ));
            return out;
        }

        for license in self.licenses {
            let mut line = format!(
                "{} {}",
                Icon::Bullet.colored(supports_color, supports_unicode),
                license.text
            );
            if !license.url.is_empty() {
                line.push_str(&format!(" {}", ColoredText::dim(format!("<{}>", license.url)).render(supports_color)));
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
