//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the session with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument parsing into an `Invocation`
//! - `factory` - Creates the session with proper dependencies

pub mod cli;
pub mod factory;

pub use cli::{parse_invocation, Invocation, UNSUPPORTED_ARGUMENTS};
pub use factory::create_interactive_session;
