use crossterm::style::{Color, Stylize};

/// Design tokens for the picker UI.
///
/// Design constraints:
/// - Only 4 semantic colors (`colors::*`)
/// - All glyphs are sourced from this module, with an ASCII twin for each
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const CURSOR: &str = "❯";
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const FOLDER: &str = "▸";
    pub const SCROLL_UP: &str = "↑";
    pub const SCROLL_DOWN: &str = "↓";
    pub const BREADCRUMB: &str = " ▸ ";
    pub const ELLIPSIS: &str = "…";
}

pub mod icons_ascii {
    pub const CURSOR: &str = ">";
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const FOLDER: &str = "/";
    pub const SCROLL_UP: &str = "^";
    pub const SCROLL_DOWN: &str = "v";
    pub const BREADCRUMB: &str = " > ";
    pub const ELLIPSIS: &str = "…";
}

/// Glyph set resolved once per session from the Unicode capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub cursor: &'static str,
    pub selected: &'static str,
    pub unselected: &'static str,
    pub folder: &'static str,
    pub scroll_up: &'static str,
    pub scroll_down: &'static str,
    pub breadcrumb: &'static str,
}

impl Glyphs {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                cursor: icons::CURSOR,
                selected: icons::SELECTED,
                unselected: icons::UNSELECTED,
                folder: icons::FOLDER,
                scroll_up: icons::SCROLL_UP,
                scroll_down: icons::SCROLL_DOWN,
                breadcrumb: icons::BREADCRUMB,
            }
        } else {
            Self {
                cursor: icons_ascii::CURSOR,
                selected: icons_ascii::SELECTED,
                unselected: icons_ascii::UNSELECTED,
                folder: icons_ascii::FOLDER,
                scroll_up: icons_ascii::SCROLL_UP,
                scroll_down: icons_ascii::SCROLL_DOWN,
                breadcrumb: icons_ascii::BREADCRUMB,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Success,
    Warning,
    Info,
    Dim,
}

/// Style already-truncated text. Plain text is returned when color is off.
pub fn paint(text: &str, color: SemanticColor, bold: bool, supports_color: bool) -> String {
    if !supports_color || text.is_empty() {
        return text.to_string();
    }

    let mut styled = match color {
        SemanticColor::Success => text.with(colors::SUCCESS),
        SemanticColor::Warning => text.with(colors::WARNING),
        SemanticColor::Info => text.with(colors::INFO),
        SemanticColor::Dim => text.with(colors::DIM),
    };
    if bold {
        styled = styled.bold();
    }
    styled.to_string()
}
