use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crossterm::terminal;
use tracing::trace;

use crate::domain::ports::TerminalDevice;
use crate::domain::value_objects::{KeyFrame, FRAME_LEN};
use crate::error::{SwitchError, SwitchResult};

pub const DEFAULT_TTY_PATH: &str = "/dev/tty";

/// Switches the terminal between raw and cooked mode.
pub trait ModeSwitch {
    fn enable(&self) -> io::Result<()>;
    fn disable(&self) -> io::Result<()>;
}

/// Raw mode through `crossterm::terminal`, which acts on stdin when it is a
/// terminal and on `/dev/tty` otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermMode;

impl ModeSwitch for CrosstermMode {
    fn enable(&self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn disable(&self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }
}

/// Raw mode held on an open terminal device.
///
/// Cooked mode is restored by `restore` or, failing that, on drop.
#[derive(Debug)]
pub struct RawMode<M: ModeSwitch = CrosstermMode> {
    device: File,
    mode: M,
    restored: bool,
}

impl<M: ModeSwitch> RawMode<M> {
    pub fn acquire(path: &Path, mode: M) -> SwitchResult<Self> {
        let device = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(SwitchError::DeviceUnavailable)?;
        mode.enable().map_err(SwitchError::DeviceUnavailable)?;
        Ok(Self {
            device,
            mode,
            restored: false,
        })
    }

    /// Read one frame. Short reads are zero-padded; a zero-length read means
    /// the terminal went away.
    pub fn read_frame(&mut self) -> SwitchResult<KeyFrame> {
        let mut frame = [0u8; FRAME_LEN];
        let n = self
            .device
            .read(&mut frame)
            .map_err(SwitchError::ReadFailed)?;
        if n == 0 {
            return Err(SwitchError::ReadFailed(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "terminal closed",
            )));
        }
        trace!(?frame, n, "read frame");
        Ok(frame)
    }

    pub fn restore(mut self) -> SwitchResult<()> {
        self.restored = true;
        self.mode.disable().map_err(SwitchError::DeviceUnavailable)
    }

    /// Run `f` with the device in raw mode, restoring the previous mode on
    /// every exit path. An error from `f` wins over a restore error.
    pub fn scoped<T>(
        path: &Path,
        mode: M,
        f: impl FnOnce(&mut Self) -> SwitchResult<T>,
    ) -> SwitchResult<T> {
        let mut raw = Self::acquire(path, mode)?;
        let result = f(&mut raw);
        let restored = raw.restore();
        let value = result?;
        restored?;
        Ok(value)
    }
}

impl<M: ModeSwitch> Drop for RawMode<M> {
    fn drop(&mut self) {
        if !self.restored {
            let _ = self.mode.disable();
        }
    }
}

/// The controlling terminal. Raw mode is held only while a frame is read.
#[derive(Debug, Clone)]
pub struct Tty {
    path: PathBuf,
}

impl Tty {
    pub fn open_default() -> Self {
        Self::at(DEFAULT_TTY_PATH)
    }

    /// Read frames from `path`.
    ///
    /// Raw mode is still switched on the controlling terminal (stdin or
    /// `/dev/tty`), not on `path`, so only the default path reads keystrokes
    /// unbuffered.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TerminalDevice for Tty {
    fn read_frame(&mut self) -> SwitchResult<KeyFrame> {
        RawMode::scoped(&self.path, CrosstermMode, RawMode::read_frame)
    }
}
