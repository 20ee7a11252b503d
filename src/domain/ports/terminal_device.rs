//! Terminal Device Port
//!
//! Delivers one raw input frame per call. Implementations must put the
//! device into raw mode for the duration of the read only, and restore the
//! previous mode on every exit path.

use crate::domain::value_objects::KeyFrame;
use crate::error::SwitchResult;

pub trait TerminalDevice {
    /// Block until one frame of input arrives.
    ///
    /// Fails with `SwitchError::DeviceUnavailable` or `SwitchError::ReadFailed`.
    fn read_frame(&mut self) -> SwitchResult<KeyFrame>;
}
