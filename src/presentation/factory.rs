//! Session Factory
//!
//! Wires the interactive session to the real git executable, the controlling
//! terminal and standard output.

use std::io::{self, Stdout};

use crate::application::InteractiveSession;
use crate::infrastructure::{GitCli, Tty};
use crate::ui::{detect_render_options, MenuRenderer, Palette};

/// Type alias for the session with production dependencies
pub type ConcreteSession = InteractiveSession<GitCli, Tty, Stdout>;

pub fn create_interactive_session() -> ConcreteSession {
    let renderer = MenuRenderer::new(Palette::default(), detect_render_options());
    InteractiveSession::new(GitCli::new(), Tty::open_default(), io::stdout(), renderer)
}
