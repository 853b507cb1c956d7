//! Brickout - a brick-breaking arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball, bricks, scoring)
//! - `input`: Button bitmask snapshots and edge detection
//! - `render`: Draw commands and the renderer / frame-sync seams
//! - `frame`: Per-frame orchestration (sample, simulate, draw, sync, swap)
//!
//! The core never touches hardware. Rendering, input sampling, and the
//! frame-ready signal are injected behind traits so the same simulation runs
//! against a real display backend, a headless demo driver, or a test harness.

pub mod frame;
pub mod input;
pub mod render;
pub mod sim;

pub use frame::GameFrame;
pub use input::{Buttons, InputSource, InputState};
pub use render::{Color, DrawCommand, FrameSync, Renderer};

/// Game configuration constants
pub mod consts {
    /// Screen dimensions in pixels
    pub const SCREEN_WIDTH: i32 = 128;
    pub const SCREEN_HEIGHT: i32 = 128;

    /// Paddle geometry; y never changes
    pub const PADDLE_WIDTH: i32 = 24;
    pub const PADDLE_HEIGHT: i32 = 4;
    pub const PADDLE_Y: i32 = 115;
    /// Pixels moved per frame while a direction button is held
    pub const PADDLE_SPEED: i32 = 2;

    /// Ball geometry and serve velocity components
    pub const BALL_SIZE: i32 = 3;
    pub const BALL_SPEED_X: i32 = 2;
    pub const BALL_SPEED_Y: i32 = 2;

    /// The ball bounces off this line rather than the physical top of the
    /// screen, leaving a band for the HUD
    pub const TOP_MARGIN: i32 = 8;
    /// At or below this line the ball counts as lost
    pub const BOTTOM_LOSS_Y: i32 = SCREEN_HEIGHT - 2;

    /// Brick grid geometry: 6 rows of 8, spaced one pixel apart
    pub const BRICK_WIDTH: i32 = 15;
    pub const BRICK_HEIGHT: i32 = 6;
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 8;
    pub const BRICK_START_X: i32 = 4;
    pub const BRICK_START_Y: i32 = 10;
    pub const BRICK_SPACING_X: i32 = 16;
    pub const BRICK_SPACING_Y: i32 = 7;
    pub const TOTAL_BRICKS: usize = BRICK_ROWS * BRICK_COLS;

    /// Lives at the start of a run
    pub const START_LIVES: u8 = 3;

    /// HUD life markers: small squares along the top-left corner
    pub const LIFE_MARKER_SIZE: i32 = 3;
    pub const LIFE_MARKER_SPACING: i32 = 5;
    pub const LIFE_MARKER_X: i32 = 2;
    pub const LIFE_MARKER_Y: i32 = 2;
}
