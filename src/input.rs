//! Button sampling and edge detection
//!
//! The input backend hands the core one bitmask snapshot per frame. The core
//! keeps the previous frame's snapshot as well, so held buttons and rising
//! edges (pressed this frame, up the frame before) can be told apart.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// One frame's button bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const RIGHT: Buttons = Buttons(0x01);
    pub const LEFT: Buttons = Buttons(0x02);
    pub const DOWN: Buttons = Buttons(0x04);
    pub const UP: Buttons = Buttons(0x08);
    /// Launch button
    pub const A: Buttons = Buttons(0x10);
    pub const B: Buttons = Buttons(0x20);

    /// Wrap a raw sampled bitmask
    pub const fn from_bits(bits: u8) -> Self {
        Buttons(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when every button in `other` is down in `self`
    #[inline]
    pub const fn contains(self, other: Buttons) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
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

/// This frame's snapshot plus the previous frame's, for held/edge queries
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputState {
    current: Buttons,
    previous: Buttons,
}

impl InputState {
    /// Shift in this frame's snapshot; last frame's becomes the edge baseline
    pub fn advance(&mut self, sample: Buttons) {
        self.previous = self.current;
        self.current = sample;
    }

    /// Button is down this frame
    #[inline]
    pub fn held(&self, button: Buttons) -> bool {
        self.current.contains(button)
    }

    /// Rising edge: down this frame, up the previous frame
    #[inline]
    pub fn just_pressed(&self, button: Buttons) -> bool {
        self.current.contains(button) && !self.previous.contains(button)
    }

    pub fn current(&self) -> Buttons {
        self.current
    }
}

/// Where button snapshots come from: polled exactly once per frame
pub trait InputSource {
    fn poll(&mut self) -> Buttons;
}
