//! Brickout entry point
//!
//! Runs the game headless with a scripted autopilot: the paddle chases the
//! ball and the serve button taps as soon as the ball lands. The backends
//! here are demo stand-ins; a real port supplies its own renderer, input
//! sampler, and frame-sync signal.

use brickout::GameFrame;
use brickout::consts::*;
use brickout::input::{Buttons, InputSource};
use brickout::render::{DrawCommand, FrameSync, Renderer};
use brickout::sim::{BallState, GamePhase, GameState};

/// Upper bound on the demo run; the core itself would loop forever
const DEMO_FRAMES: u64 = 20_000;

/// Plays back whatever the planner decided for this frame
#[derive(Default)]
struct Autopilot {
    next: Buttons,
}

impl Autopilot {
    fn set(&mut self, buttons: Buttons) {
        self.next = buttons;
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self) -> Buttons {
        self.next
    }
}

/// Pick this frame's buttons from the visible state: tap the serve button on
/// alternating frames while the ball rests, otherwise keep the paddle center
/// under the ball
fn plan_buttons(state: &GameState) -> Buttons {
    match state.ball.state {
        BallState::Attached => {
            if state.frame_ticks % 2 == 0 {
                Buttons::A
            } else {
                Buttons::NONE
            }
        }
        BallState::Free => {
            let paddle_center = state.paddle.x + PADDLE_WIDTH / 2;
            let ball_center = state.ball.pos.x + BALL_SIZE / 2;
            if ball_center < paddle_center - PADDLE_SPEED {
                Buttons::LEFT
            } else if ball_center > paddle_center + PADDLE_SPEED {
                Buttons::RIGHT
            } else {
                Buttons::NONE
            }
        }
    }
}

/// Counts draw traffic instead of filling pixels
#[derive(Default)]
struct TraceRenderer {
    rects: u64,
    frames: u64,
}

impl Renderer for TraceRenderer {
    fn clear(&mut self) {}

    fn fill_rect(&mut self, cmd: DrawCommand) {
        self.rects += 1;
        log::trace!("fill {:?}", cmd);
    }

    fn present(&mut self) {
        self.frames += 1;
        if self.frames % 1000 == 0 {
            log::debug!("{} frames presented, {} rects filled", self.frames, self.rects);
        }
    }
}

/// Headless stand-in for the display's frame-ready signal: always ready
struct FreeRun;

impl FrameSync for FreeRun {
    fn wait(&mut self) {}
}

fn main() {
    env_logger::init();
    log::info!("brickout headless demo starting");

    let mut game = GameFrame::new(Autopilot::default(), TraceRenderer::default(), FreeRun);

    for _ in 0..DEMO_FRAMES {
        let plan = plan_buttons(&game.state);
        game.source_mut().set(plan);
        game.run_frame();
        if game.state.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "demo finished after {} frames: score {}, lives {}, {} bricks standing",
        game.state.frame_ticks,
        game.state.scoreboard.score,
        game.state.scoreboard.lives,
        game.state.bricks.remaining()
    );
}
