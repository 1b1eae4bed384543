use crossterm::style::Color;

/// Design tokens for the Stencil CLI.
///
/// Only 5 semantic colors; every icon comes from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const BULLET: &str = "●";
    pub const BRANCH: &str = "├─";
    pub const LAST_BRANCH: &str = "└─";
    pub const PIPE: &str = "│";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const BULLET: &str = "*";
    pub const BRANCH: &str = "|-";
    pub const LAST_BRANCH: &str = "`-";
    pub const PIPE: &str = "|";
}
