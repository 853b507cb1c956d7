//! Per-frame simulation step
//!
//! Advances the paddle and then the ball exactly once per displayed frame.
//! The order of the ball's checks is load-bearing: integrate, side walls, top
//! margin or bottom loss, paddle, bricks. A lost ball skips the rest of its
//! frame, and at most one brick is destroyed per frame.

use super::state::{BallState, BrickField, GamePhase, GameState};
use crate::consts::*;
use crate::input::{Buttons, InputState};

/// Advance the game by one frame from the sampled input
pub fn tick(state: &mut GameState, input: &InputState) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.frame_ticks += 1;
    state.paddle.update(input.current());
    update_ball(state, input);

    // A cleared field starts over with a fresh grid and a new serve; score
    // and lives carry across
    if state.bricks.remaining() == 0 {
        log::info!(
            "field cleared at frame {}, score {}",
            state.frame_ticks,
            state.scoreboard.score
        );
        state.bricks.reset();
        state.ball.reset_to_paddle();
    }
}

/// Ball state machine and collision resolution
fn update_ball(state: &mut GameState, input: &InputState) {
    let ball = &mut state.ball;

    if ball.state == BallState::Attached {
        // Slaved to the paddle until the launch edge; holding the button
        // across frames launches exactly once
        ball.track_paddle(&state.paddle);
        if input.just_pressed(Buttons::A) {
            ball.launch();
            log::debug!("launched at frame {}", state.frame_ticks);
        }
        return;
    }

    ball.pos += ball.vel;

    // Side walls: reflect and step one pixel off the wall
    if ball.pos.x <= 0 {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = 1;
    } else if ball.pos.x + BALL_SIZE >= SCREEN_WIDTH {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = SCREEN_WIDTH - BALL_SIZE - 1;
    }

    // Top margin, or the loss line at the bottom
    if ball.pos.y < TOP_MARGIN {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = TOP_MARGIN;
    } else if ball.pos.y >= BOTTOM_LOSS_Y {
        state.scoreboard.lives = state.scoreboard.lives.saturating_sub(1);
        log::info!(
            "ball lost at frame {}, {} lives left",
            state.frame_ticks,
            state.scoreboard.lives
        );
        ball.reset_to_paddle();
        if state.scoreboard.lives == 0 {
            state.phase = GamePhase::GameOver;
            log::info!("game over, final score {}", state.scoreboard.score);
        }
        // No paddle or brick checks on the frame the ball is lost
        return;
    }

    // Paddle: vertical band first, then horizontal overlap. Only a ball whose
    // top is still above the paddle top gets the bounce; one already moving
    // up through the paddle is left alone.
    if ball.pos.y >= PADDLE_Y - BALL_SIZE && ball.pos.y < PADDLE_Y + PADDLE_HEIGHT {
        let overlap_x = ball.pos.x + BALL_SIZE > state.paddle.x
            && state.paddle.x + PADDLE_WIDTH > ball.pos.x;
        if overlap_x && ball.pos.y < PADDLE_Y {
            ball.pos.y = PADDLE_Y - BALL_SIZE - 1;
            if ball.vel.y > 0 {
                ball.vel.y = -ball.vel.y;
            }
            // Never let the ball rally straight up and down
            if ball.vel.x == 0 {
                ball.vel.x = BALL_SPEED_X;
            }
        }
    }

    // Brick scan, pre-filtered to the grid's vertical span
    let (grid_top, grid_bottom) = BrickField::vertical_span();
    if ball.pos.y < grid_top || ball.pos.y >= grid_bottom {
        return;
    }

    // First overlapping brick in grid order wins; one brick per frame
    if let Some(index) = state.bricks.first_overlap(&ball.rect()) {
        state.bricks.deactivate(index);
        ball.vel.y = -ball.vel.y;
        state.scoreboard.score += 1;
        log::debug!(
            "brick {} destroyed, score {}, {} left",
            index,
            state.scoreboard.score,
            state.bricks.remaining()
        );
    }
}
