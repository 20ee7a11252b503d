//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod branch_source;
pub mod terminal_device;

pub use branch_source::{BranchListing, BranchSource};
pub use terminal_device::TerminalDevice;
