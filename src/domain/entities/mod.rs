//! Domain Entities

pub mod branch;
pub mod menu;

pub use branch::Branch;
pub use menu::{MenuMode, MenuState};
