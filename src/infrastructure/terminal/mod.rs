//! Terminal Device
//!
//! Implements `TerminalDevice` on the controlling terminal.

mod tty;

pub use tty::{CrosstermMode, ModeSwitch, RawMode, Tty, DEFAULT_TTY_PATH};
