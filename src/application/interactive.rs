//! Interactive Session
//!
//! Drives the read, decode, act, redraw cycle until the user switches,
//! deletes, or quits. One input is fully handled before the next read.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::domain::entities::{Branch, MenuMode, MenuState};
use crate::domain::ports::{BranchSource, TerminalDevice};
use crate::domain::value_objects::Command;
use crate::error::SwitchResult;
use crate::ui::MenuRenderer;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete the selected branches? [y/n]";
pub const DELETE_ABORTED: &str = "Input does not match \"y\", ignoring";

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Checked out the branch
    Switched(Branch),
    /// Deleted these branches, in menu order
    Deleted(Vec<Branch>),
    /// The delete prompt was answered with anything but `y`
    DeleteAborted,
    /// Quit without side effects
    Quit,
}

/// Interactive menu session.
///
/// Owns the branch source, the terminal device and the output stream so tests
/// can drive it with scripted input and inspect everything it wrote.
pub struct InteractiveSession<S, D, W> {
    source: S,
    device: D,
    out: W,
    renderer: MenuRenderer,
}

impl<S, D, W> InteractiveSession<S, D, W>
where
    S: BranchSource,
    D: TerminalDevice,
    W: Write,
{
    pub fn new(source: S, device: D, out: W, renderer: MenuRenderer) -> Self {
        Self {
            source,
            device,
            out,
            renderer,
        }
    }

    /// Run until a terminal action. Every error is fatal to the session.
    pub fn run(&mut self) -> SwitchResult<Outcome> {
        let listing = self.source.list_branches()?;
        let mut menu = MenuState::new(listing.current, listing.others);

        self.renderer.draw(&mut self.out, &menu, false)?;

        loop {
            let command = self.read_command()?;

            match command {
                Command::Quit => return Ok(Outcome::Quit),
                Command::MoveUp if !menu.is_empty() => {
                    menu.cursor_up();
                    self.redraw(&menu)?;
                }
                Command::MoveDown if !menu.is_empty() => {
                    menu.cursor_down();
                    self.redraw(&menu)?;
                }
                Command::ToggleMark if !menu.is_empty() => {
                    menu.toggle_mark_current();
                    self.redraw(&menu)?;
                }
                Command::Confirm => match menu.mode() {
                    MenuMode::MarkingForDelete => return self.confirm_delete(&menu),
                    MenuMode::Browsing => {
                        if let Some(branch) = menu.selected_branch() {
                            self.source.switch_to(branch)?;
                            return Ok(Outcome::Switched(branch.clone()));
                        }
                    }
                },
                _ => {}
            }
        }
    }

    /// Give back the collaborators, mainly for inspection after a run.
    pub fn into_parts(self) -> (S, D, W) {
        (self.source, self.device, self.out)
    }

    fn read_command(&mut self) -> SwitchResult<Command> {
        let frame = self.device.read_frame()?;
        let command = Command::decode(frame);
        debug!(?frame, ?command, "decoded input");
        Ok(command)
    }

    fn redraw(&mut self, menu: &MenuState) -> SwitchResult<()> {
        debug!(cursor = menu.cursor_index(), mode = ?menu.mode(), "redraw");
        self.renderer.draw(&mut self.out, menu, true)?;
        Ok(())
    }

    fn confirm_delete(&mut self, menu: &MenuState) -> SwitchResult<Outcome> {
        self.renderer.notice(&mut self.out, DELETE_PROMPT)?;

        if self.read_command()? != Command::ConfirmYes {
            warn!("delete not confirmed");
            self.renderer.notice(&mut self.out, DELETE_ABORTED)?;
            return Ok(Outcome::DeleteAborted);
        }

        let marked: Vec<Branch> = menu.marked_in_order().into_iter().cloned().collect();
        for branch in &marked {
            self.source.delete_branch(branch)?;
        }
        info!(count = marked.len(), "deleted marked branches");

        let names: Vec<&str> = marked.iter().map(Branch::name).collect();
        self.renderer
            .notice(&mut self.out, &format!("deleted branches: {}", names.join(", ")))?;

        Ok(Outcome::Deleted(marked))
    }
}
