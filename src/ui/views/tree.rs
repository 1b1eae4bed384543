use stencil::domain::entities::ResolvedNode;

use crate::ui::text::ColoredText;
use crate::ui::theme;

use super::template_label;

/// Resolved template as a tree of dependencies, requirements and exclusions
pub struct ResolvedTreeView<'a> {
    root: &'a ResolvedNode,
}

impl<'a> ResolvedTreeView<'a> {
    pub fn new(root: &'a ResolvedNode) -> Self {
        Self { root }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        out.push_str(&template_label(
            &self.root.template,
            &self.root.display_name,
            supports_color,
        ));
        out.push('\n');
        render_children(self.root, "", &mut out, supports_color, supports_unicode);
        out
    }
}

fn render_children(node: &ResolvedNode, prefix: &str, out: &mut String, color: bool, unicode: bool) {
    let (branch, last_branch, pipe) = if unicode {
        (theme::icons::BRANCH, theme::icons::LAST_BRANCH, theme::icons::PIPE)
    } else {
        (
            theme::icons_ascii::BRANCH,
            theme::icons_ascii::LAST_BRANCH,
            theme::icons_ascii::PIPE,
        )
    };

    let children: Vec<(&str, &ResolvedNode)> = node
        .dependencies
        .iter()
        .map(|n| ("depends on", n))
        .chain(node.requirements.iter().map(|n| ("requires", n)))
        .chain(node.exclusions.iter().map(|n| ("excludes", n)))
        .collect();

    for (i, (relation, child)) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        out.push_str(&format!(
            "{}{} {} {}\n",
            prefix,
            if last { last_branch } else { branch },
            ColoredText::dim(*relation).render(color),
            template_label(&child.template, &child.display_name, color)
        ));
        let child_prefix = if last {
            format!("{}   ", prefix)
        } else {
            format!("{}{}  ", prefix, pipe)
        };
        render_children(child, &child_prefix, out, color, unicode);
    }
}
