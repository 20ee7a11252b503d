//! Menu renderer
//!
//! A frame is one header line for the current branch followed by one line per
//! other branch. Redraws move the cursor up over the previous frame and print
//! the new one on top of it, so the scrollback never grows.

use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::{cursor, Command as _};

use crate::domain::entities::{Branch, MenuState};
use crate::ui::terminal::RenderOptions;
use crate::ui::theme::{icons, icons_ascii, Palette, Role};

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuRenderer {
    palette: Palette,
    options: RenderOptions,
}

impl MenuRenderer {
    pub fn new(palette: Palette, options: RenderOptions) -> Self {
        Self { palette, options }
    }

    /// Build one frame. `redraw` prefixes the cursor-up sequence that puts the
    /// frame over the previous one.
    pub fn frame(&self, menu: &MenuState, redraw: bool) -> String {
        let mut out = String::new();

        if redraw {
            let rows = u16::try_from(menu.visible_row_count()).unwrap_or(u16::MAX);
            // Writing into a String cannot fail.
            let _ = cursor::MoveUp(rows).write_ansi(&mut out);
        }

        let header = format!("   {} (current)", menu.current());
        out.push_str(&self.paint(&header, Role::Current));
        out.push('\n');

        let selected = menu.selected_branch();
        for branch in menu.others() {
            out.push_str(&self.row(branch, Some(branch) == selected, menu.is_marked(branch)));
            out.push('\n');
        }

        out
    }

    /// Write a frame to `out` and flush it.
    pub fn draw(&self, out: &mut impl Write, menu: &MenuState, redraw: bool) -> io::Result<()> {
        out.write_all(self.frame(menu, redraw).as_bytes())?;
        out.flush()
    }

    /// A permanent line below the menu (prompts and results).
    pub fn notice(&self, out: &mut impl Write, text: &str) -> io::Result<()> {
        writeln!(out, "{}", self.paint(text, Role::Notice))?;
        out.flush()
    }

    fn row(&self, branch: &Branch, is_selected: bool, is_marked: bool) -> String {
        let (cursor_icon, blank_cursor, trash, blank_mark) = if self.options.unicode {
            (icons::CURSOR, icons::NO_CURSOR, icons::TRASH, icons::NO_MARK)
        } else {
            (
                icons_ascii::CURSOR,
                icons_ascii::NO_CURSOR,
                icons_ascii::TRASH,
                icons_ascii::NO_MARK,
            )
        };

        let pointer = if is_selected { cursor_icon } else { blank_cursor };

        if is_selected {
            let mark = if is_marked { trash } else { blank_mark };
            let line = format!("{pointer}{mark}{}", branch.name());
            return self.paint(&line, Role::Selected);
        }

        let mark = if is_marked {
            self.paint(trash, Role::Marked)
        } else {
            blank_mark.to_string()
        };
        format!("{pointer}{mark}{}", branch.name())
    }

    fn paint(&self, text: &str, role: Role) -> String {
        if !self.options.color {
            return text.to_string();
        }
        format!("{}", text.with(self.palette.color(role)))
    }
}
