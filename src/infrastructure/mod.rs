//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `git/` - Branch source backed by the `git` executable
//! - `terminal/` - Raw-mode terminal device backed by `/dev/tty`

pub mod git;
pub mod terminal;

// Re-export for convenience
pub use git::GitCli;
pub use terminal::{RawMode, Tty};
