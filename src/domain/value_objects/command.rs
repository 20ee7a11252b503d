//! Keycode decoding
//!
//! Raw terminal input arrives in fixed 3-byte frames, zero-padded when the
//! physical read was shorter. Matching is exact equality on the whole frame.
//!
//! A lone escape byte and an arrow-key sequence split across two reads look
//! the same in the first frame, so a slow terminal can make an arrow key quit.
//! This is kept as-is.

/// Length of one raw input frame in bytes.
pub const FRAME_LEN: usize = 3;

/// One raw input frame as read from the terminal.
pub type KeyFrame = [u8; FRAME_LEN];

// ASCII keycodes, see https://www.ascii-code.com
pub mod keys {
    use super::KeyFrame;

    pub const ESCAPE: KeyFrame = [27, 0, 0];
    pub const CONTROL_C: KeyFrame = [3, 0, 0];
    pub const Q: KeyFrame = [113, 0, 0];
    pub const UP: KeyFrame = [27, 91, 65];
    pub const K: KeyFrame = [107, 0, 0];
    pub const DOWN: KeyFrame = [27, 91, 66];
    pub const J: KeyFrame = [106, 0, 0];
    pub const ENTER: KeyFrame = [13, 0, 0];
    pub const D: KeyFrame = [100, 0, 0];
    pub const Y: KeyFrame = [121, 0, 0];
}

/// Logical command decoded from a key frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    Confirm,
    ToggleMark,
    ConfirmYes,
    Quit,
    Unrecognized,
}

impl Command {
    /// Decode a raw frame. Pure; anything not listed is `Unrecognized`.
    pub fn decode(frame: KeyFrame) -> Self {
        match frame {
            keys::ESCAPE | keys::CONTROL_C | keys::Q => Command::Quit,
            keys::UP | keys::K => Command::MoveUp,
            keys::DOWN | keys::J => Command::MoveDown,
            keys::ENTER => Command::Confirm,
            keys::D => Command::ToggleMark,
            keys::Y => Command::ConfirmYes,
            _ => Command::Unrecognized,
        }
    }

    /// Decode a read of up to `FRAME_LEN` bytes, zero-padding short reads.
    /// Bytes past the frame length are ignored.
    pub fn decode_bytes(bytes: &[u8]) -> Self {
        Self::decode(frame_from(bytes))
    }
}

/// Build a zero-padded frame from a short read.
pub fn frame_from(bytes: &[u8]) -> KeyFrame {
    let mut frame = [0u8; FRAME_LEN];
    let len = bytes.len().min(FRAME_LEN);
    frame[..len].copy_from_slice(&bytes[..len]);
    frame
}
