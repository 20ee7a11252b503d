//! git-switch-interactive - interactive branch menu for git
//!
//! Lists local branches in the terminal, lets the user move a cursor with the
//! arrow keys (or k/j), switch with ENTER, and mark several branches with `d`
//! for deletion after a `y` confirmation.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{InteractiveSession, Outcome};
pub use domain::entities::{Branch, MenuMode, MenuState};
pub use domain::ports::{BranchListing, BranchSource, TerminalDevice};
pub use domain::value_objects::{Command, KeyFrame};
pub use error::{SwitchError, SwitchResult};
pub use infrastructure::{GitCli, Tty};
