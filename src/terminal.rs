//! Terminal mode setup with restore on drop.
//!
//! Every step that succeeded is undone when the guard goes out of scope,
//! including when a later setup step fails with `?`.

use crossterm::cursor::Show;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use std::io::{self, Write};

/// Raw mode switches, replaceable so setup failures can be exercised.
#[derive(Clone, Copy)]
pub struct RawMode {
    pub enable: fn() -> io::Result<()>,
    pub disable: fn() -> io::Result<()>,
}

impl RawMode {
    pub const CROSSTERM: RawMode = RawMode {
        enable: enable_raw_mode,
        disable: disable_raw_mode,
    };
}

pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: RawMode,
    raw: bool,
    alternate_screen: bool,
    key_releases: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enter raw mode and the alternate screen.
    pub fn enter(out: W, raw_mode: RawMode) -> io::Result<Self> {
        let mut guard = Self {
            out,
            raw_mode,
            raw: false,
            alternate_screen: false,
            key_releases: false,
        };
        (raw_mode.enable)()?;
        guard.raw = true;
        guard.out.execute(EnterAlternateScreen)?;
        guard.alternate_screen = true;
        Ok(guard)
    }

    /// Ask the terminal to report key releases and repeats.
    pub fn enable_key_releases(&mut self) -> io::Result<()> {
        self.out.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
        self.key_releases = true;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.key_releases {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        if self.raw {
            if let Err(e) = (self.raw_mode.disable)() {
                tracing::warn!(error = %e, "failed to leave raw mode");
            }
        }
        if self.alternate_screen {
            let _ = self.out.execute(LeaveAlternateScreen);
        }
        let _ = self.out.execute(Show);
    }
}
