//! Application Layer
//!
//! Use cases that orchestrate the domain with the infrastructure adapters.
//!
//! - `InteractiveSession` - The branch menu read/decode/act/redraw loop

pub mod interactive;

pub use interactive::{InteractiveSession, Outcome};
