//! Keyboard to button-mask mapping for the terminal frontend.
//!
//! Terminals report presses (and autorepeats) but usually not releases. When
//! the terminal supports the keyboard enhancement protocol we get real
//! release events and the held mask is exact. Otherwise a key stays held
//! through the autorepeat start delay after its first event, then for a
//! short window after each repeat.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};
use tilesnake::Buttons;

/// Covers the delay before the OS starts autorepeating a held key.
const INITIAL_HOLD: Duration = Duration::from_millis(600);
/// Covers the gap between consecutive autorepeat events.
const REPEAT_HOLD: Duration = Duration::from_millis(150);

/// Button for a key, if it is bound.
pub fn button_for(code: KeyCode) -> Option<Buttons> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Buttons::UP),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Buttons::DOWN),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Buttons::LEFT),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Buttons::RIGHT),
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('j') | KeyCode::Char(' ') => {
            Some(Buttons::A)
        }
        KeyCode::Enter => Some(Buttons::START),
        KeyCode::Tab | KeyCode::Char('x') | KeyCode::Char('X') => Some(Buttons::SELECT),
        _ => None,
    }
}

/// True for keys that leave the program.
pub fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Hold timing for one button.
#[derive(Debug, Clone, Copy)]
struct KeyHold {
    button: Buttons,
    /// First event of the current hold.
    since: Option<Instant>,
    /// Latest press or repeat of the current hold.
    last: Option<Instant>,
}

impl KeyHold {
    fn new(button: Buttons) -> Self {
        Self {
            button,
            since: None,
            last: None,
        }
    }

    fn is_held(&self, now: Instant, reports_release: bool) -> bool {
        let (Some(since), Some(last)) = (self.since, self.last) else {
            return false;
        };
        if reports_release {
            return true;
        }
        let window = if last == since {
            INITIAL_HOLD
        } else {
            REPEAT_HOLD
        };
        now.saturating_duration_since(last) < window
    }
}

/// Tracks which buttons are held from a stream of key events.
pub struct KeyboardState {
    reports_release: bool,
    keys: [KeyHold; 7],
}

impl KeyboardState {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            keys: [
                Buttons::UP,
                Buttons::DOWN,
                Buttons::LEFT,
                Buttons::RIGHT,
                Buttons::A,
                Buttons::START,
                Buttons::SELECT,
            ]
            .map(KeyHold::new),
        }
    }

    pub fn handle(&mut self, key: &KeyEvent, now: Instant) {
        let Some(button) = button_for(key.code) else {
            return;
        };
        let reports_release = self.reports_release;
        let Some(hold) = self.keys.iter_mut().find(|k| k.button == button) else {
            return;
        };
        match key.kind {
            KeyEventKind::Release => {
                hold.since = None;
                hold.last = None;
            }
            // Without release reports autorepeats arrive as presses too, so
            // any event during a hold continues it.
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if !hold.is_held(now, reports_release) {
                    hold.since = Some(now);
                }
                hold.last = Some(now);
            }
        }
    }

    /// Held mask as of `now`.
    pub fn held(&self, now: Instant) -> Buttons {
        let mut mask = Buttons::NONE;
        for hold in &self.keys {
            if hold.is_held(now, self.reports_release) {
                mask |= hold.button;
            }
        }
        mask
    }
}
