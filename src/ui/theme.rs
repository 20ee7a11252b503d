use crossterm::style::Color;

/// Visual role of a piece of menu output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Header row showing the checked-out branch
    Current,
    /// Row under the cursor
    Selected,
    /// Deletion marker
    Marked,
    /// Prompts and result messages printed below the menu
    Notice,
}

/// Role to color table used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub current: Color,
    pub selected: Color,
    pub marked: Color,
    pub notice: Color,
}

impl Palette {
    pub const fn new() -> Self {
        Self {
            current: Color::Green,
            selected: Color::Blue,
            marked: Color::Red,
            notice: Color::Yellow,
        }
    }

    pub fn color(&self, role: Role) -> Color {
        match role {
            Role::Current => self.current,
            Role::Selected => self.selected,
            Role::Marked => self.marked,
            Role::Notice => self.notice,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Row indicators. The trash emoji may render wider than its blank, so rows
/// with a mark can be one column longer in the unicode set.
pub mod icons {
    pub const CURSOR: &str = ">";
    pub const NO_CURSOR: &str = " ";
    pub const TRASH: &str = "🗑️ ";
    pub const NO_MARK: &str = "  ";
}

/// Row indicators. Each indicator pads to the same width as its blank.
pub mod icons_ascii {
    pub const CURSOR: &str = ">";
    pub const NO_CURSOR: &str = " ";
    pub const TRASH: &str = "x ";
    pub const NO_MARK: &str = "  ";
}
