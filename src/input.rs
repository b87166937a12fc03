//! Input sampling: held-button bitmask and rising-edge detection.
//!
//! The frontend reports which buttons are currently held once per frame.
//! [`InputSampler`] keeps the inverse of the previous frame's mask so that
//! `held & previous_inverse` is exactly the set of buttons that went from
//! released to held this frame.

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// Bitmask of the console buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const RIGHT: Buttons = Buttons(0x01);
    pub const LEFT: Buttons = Buttons(0x02);
    pub const UP: Buttons = Buttons(0x04);
    pub const DOWN: Buttons = Buttons(0x08);
    pub const A: Buttons = Buttons(0x10);
    pub const SELECT: Buttons = Buttons(0x40);
    pub const START: Buttons = Buttons(0x80);
    pub const ALL: Buttons = Buttons(0xDF);

    /// Buttons that confirm a menu choice.
    pub const CONFIRM: Buttons = Buttons(0x10 | 0x80);

    /// True if every button in `other` is set.
    pub fn contains(self, other: Buttons) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// True if any button in `other` is set.
    pub fn intersects(self, other: Buttons) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    fn bitor_assign(&mut self, rhs: Buttons) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Buttons {
    type Output = Buttons;

    fn bitand(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 & rhs.0)
    }
}

impl Not for Buttons {
    type Output = Buttons;

    fn not(self) -> Buttons {
        Buttons(!self.0 & Self::ALL.0)
    }
}

/// Per-frame held and just-pressed masks.
#[derive(Debug, Clone)]
pub struct InputSampler {
    held: Buttons,
    pressed: Buttons,
    previous_inverse: Buttons,
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSampler {
    pub fn new() -> Self {
        Self {
            held: Buttons::NONE,
            pressed: Buttons::NONE,
            previous_inverse: Buttons::ALL,
        }
    }

    /// Record this frame's held mask and derive the rising-edge mask.
    pub fn sample(&mut self, held: Buttons) {
        self.pressed = held & self.previous_inverse;
        self.previous_inverse = !held;
        self.held = held;
    }

    /// Buttons currently held down.
    pub fn held(&self) -> Buttons {
        self.held
    }

    /// Buttons that transitioned from released to held on the latest sample.
    pub fn pressed(&self) -> Buttons {
        self.pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_press_is_an_edge() {
        let mut input = InputSampler::new();
        input.sample(Buttons::START);
        assert!(input.pressed().contains(Buttons::START));
        assert!(input.held().contains(Buttons::START));
    }

    #[test]
    fn test_holding_does_not_retrigger() {
        let mut input = InputSampler::new();
        input.sample(Buttons::A);
        for _ in 0..10 {
            input.sample(Buttons::A);
            assert_eq!(input.pressed(), Buttons::NONE);
            assert!(input.held().contains(Buttons::A));
        }
    }

    #[test]
    fn test_release_then_press_retriggers() {
        let mut input = InputSampler::new();
        input.sample(Buttons::SELECT);
        input.sample(Buttons::NONE);
        assert_eq!(input.pressed(), Buttons::NONE);
        input.sample(Buttons::SELECT);
        assert!(input.pressed().contains(Buttons::SELECT));
    }

    #[test]
    fn test_edges_are_per_button() {
        let mut input = InputSampler::new();
        input.sample(Buttons::UP);
        input.sample(Buttons::UP | Buttons::START);
        assert_eq!(input.pressed(), Buttons::START);
        assert_eq!(input.held(), Buttons::UP | Buttons::START);
    }

    #[test]
    fn test_contains_and_intersects() {
        let mask = Buttons::A | Buttons::LEFT;
        assert!(mask.contains(Buttons::A));
        assert!(!mask.contains(Buttons::CONFIRM));
        assert!(mask.intersects(Buttons::CONFIRM));
        assert!(!mask.contains(Buttons::NONE));
        assert!(!Buttons::NONE.intersects(Buttons::ALL));
    }

    #[test]
    fn test_not_stays_within_known_buttons() {
        assert_eq!(!Buttons::NONE, Buttons::ALL);
        assert_eq!(!Buttons::ALL, Buttons::NONE);
    }
}
