//! Game state and core simulation types
//!
//! One aggregate owns everything the frame loop mutates. There are no
//! process-wide globals; restarting the game means building a fresh
//! `GameState`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::input::Buttons;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play (serving or rallying)
    Playing,
    /// Out of lives; the simulation is frozen
    GameOver,
}

/// Ball lifecycle - riding the paddle or in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Ball rides the paddle, waiting for launch input
    Attached,
    /// Ball is in flight
    Free,
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge in pixels; y is fixed at `PADDLE_Y`
    pub x: i32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (SCREEN_WIDTH - PADDLE_WIDTH) / 2,
        }
    }
}

impl Paddle {
    /// Move from this frame's held buttons.
    ///
    /// RIGHT is evaluated first, then LEFT, as two independent checks. A
    /// proposed move that would cross a bound is rejected whole, never
    /// partially clamped, so `x` stays in `[0, SCREEN_WIDTH - PADDLE_WIDTH]`.
    pub fn update(&mut self, buttons: Buttons) {
        if buttons.contains(Buttons::RIGHT) {
            let proposed = self.x + PADDLE_SPEED;
            if proposed <= SCREEN_WIDTH - PADDLE_WIDTH {
                self.x = proposed;
            }
        }
        if buttons.contains(Buttons::LEFT) && self.x >= PADDLE_SPEED {
            self.x -= PADDLE_SPEED;
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// X position that centers the ball on the paddle
    #[inline]
    pub fn ball_slot_x(&self) -> i32 {
        self.x + (PADDLE_WIDTH - BALL_SIZE) / 2
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
    pub state: BallState,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: IVec2::new((SCREEN_WIDTH - BALL_SIZE) / 2, PADDLE_Y - BALL_SIZE - 1),
            vel: IVec2::ZERO,
            state: BallState::Attached,
        }
    }
}

impl Ball {
    /// Back to the serve position: screen center, just above the paddle line,
    /// velocity zero
    pub fn reset_to_paddle(&mut self) {
        *self = Ball::default();
    }

    /// Follow the paddle's center while attached
    pub fn track_paddle(&mut self, paddle: &Paddle) {
        self.pos.x = paddle.ball_slot_x();
    }

    /// Leave the paddle with the fixed serve velocity (up and to the right)
    pub fn launch(&mut self) {
        self.vel = IVec2::new(BALL_SPEED_X, -BALL_SPEED_Y);
        self.state = BallState::Free;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BALL_SIZE, BALL_SIZE)
    }
}

/// One destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: IVec2,
    /// Row-derived color code (1-6), cosmetic only
    pub color: u8,
    pub active: bool,
}

impl Brick {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BRICK_WIDTH, BRICK_HEIGHT)
    }
}

/// The fixed 6x8 grid of bricks in row-major order (top row first, left to
/// right within a row), plus the count of bricks still standing.
///
/// The grid is an arena: a fixed-length sequence built once per wave, with
/// destruction as an in-place flag flip. Nothing is ever removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
    remaining: u32,
}

impl Default for BrickField {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickField {
    pub fn new() -> Self {
        let mut field = Self {
            bricks: Vec::with_capacity(TOTAL_BRICKS),
            remaining: 0,
        };
        field.reset();
        field
    }

    /// Rebuild the full grid. Position and color are deterministic functions
    /// of the grid index.
    pub fn reset(&mut self) {
        self.bricks.clear();
        for idx in 0..TOTAL_BRICKS {
            let row = (idx / BRICK_COLS) as i32;
            let col = (idx % BRICK_COLS) as i32;
            self.bricks.push(Brick {
                pos: IVec2::new(
                    col * BRICK_SPACING_X + BRICK_START_X,
                    row * BRICK_SPACING_Y + BRICK_START_Y,
                ),
                color: row as u8 + 1,
                active: true,
            });
        }
        self.remaining = TOTAL_BRICKS as u32;
    }

    /// Bricks still standing
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    /// Lowest grid index of an active brick overlapping `rect`. Grid order is
    /// the tie-break when several bricks overlap at once.
    pub fn first_overlap(&self, rect: &Rect) -> Option<usize> {
        self.bricks
            .iter()
            .position(|b| b.active && b.rect().overlaps(rect))
    }

    /// Knock out one brick. The standing-brick counter moves with the active
    /// flag; this and `reset` are its only mutation paths.
    pub fn deactivate(&mut self, index: usize) {
        let brick = &mut self.bricks[index];
        if brick.active {
            brick.active = false;
            self.remaining -= 1;
        }
    }

    /// Vertical span covered by the grid, for the tick's cheap pre-filter
    pub fn vertical_span() -> (i32, i32) {
        (
            BRICK_START_Y,
            BRICK_START_Y + BRICK_ROWS as i32 * BRICK_SPACING_Y + BRICK_HEIGHT,
        )
    }
}

/// Score and remaining lives, mutated only by the ball's collision outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// One point per destroyed brick, never decreases
    pub score: u32,
    pub lives: u8,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            score: 0,
            lives: START_LIVES,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickField,
    pub scoreboard: Scoreboard,
    /// Frames simulated since the run started
    pub frame_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Playing,
            paddle: Paddle::default(),
            ball: Ball::default(),
            bricks: BrickField::new(),
            scoreboard: Scoreboard::default(),
            frame_ticks: 0,
        }
    }
}
