//! Draw commands and the rendering / synchronization seams
//!
//! The core never touches a framebuffer. Once per frame it emits filled
//! rectangles tagged with abstract color identifiers; the backend owns the
//! mapping to real pixels, the frame-ready signal, and the page flip.

use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// Display color identifiers. The backend maps these to whatever its palette
/// hardware wants; the core only cares that they are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    /// Paddle and HUD life markers
    BrightRed,
    /// The ball
    White,
}

impl Color {
    /// Fixed table from a brick's row-derived code (1-6). Out-of-range codes
    /// fall back to Blue.
    pub fn for_brick(code: u8) -> Color {
        match code {
            1 => Color::Red,
            2 => Color::Orange,
            3 => Color::Yellow,
            4 => Color::Green,
            5 => Color::Cyan,
            _ => Color::Blue,
        }
    }
}

/// One filled rectangle, the only drawing primitive the game needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub rect: Rect,
    pub color: Color,
}

impl DrawCommand {
    pub const fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }
}

/// Rectangle-fill sink over a double-buffered display
pub trait Renderer {
    /// Wipe the back buffer before a frame's draws
    fn clear(&mut self);
    /// Fill one rectangle into the back buffer
    fn fill_rect(&mut self, cmd: DrawCommand);
    /// Flip buffers; called exactly once per frame, after the sync wait
    fn present(&mut self);
}

/// Once-per-frame blocking synchronization signal
///
/// `wait` blocks until the display is ready for the next frame and clears the
/// signal, so it cannot fire twice for the same frame.
pub trait FrameSync {
    fn wait(&mut self);
}
