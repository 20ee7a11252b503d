//! Value Objects
//!
//! Immutable types derived purely from their inputs.

pub mod command;

pub use command::{Command, KeyFrame, FRAME_LEN};
