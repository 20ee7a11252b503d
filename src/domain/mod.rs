//! Domain Layer
//!
//! Pure menu logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Branch and the mutable menu state
//! - `value_objects/` - Decoded input commands and raw key frames
//! - `ports/` - Interface definitions for the branch source and terminal device
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the terminal
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
