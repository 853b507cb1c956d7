//! Per-frame orchestration
//!
//! One pass per frame, strictly sequential: sample input, advance the
//! simulation, emit this frame's draw list, wait for the display, swap
//! buffers. The loop owns all state; the three platform seams are injected.

use crate::consts::*;
use crate::input::{InputSource, InputState};
use crate::render::{Color, DrawCommand, FrameSync, Renderer};
use crate::sim::{GameState, Rect, tick};

/// Build the frame's draw list in display order: active bricks in grid
/// order, then the paddle, the ball, and one marker per remaining life.
pub fn draw_commands(state: &GameState, out: &mut Vec<DrawCommand>) {
    for brick in state.bricks.bricks() {
        if !brick.active {
            continue;
        }
        out.push(DrawCommand::new(brick.rect(), Color::for_brick(brick.color)));
    }

    out.push(DrawCommand::new(state.paddle.rect(), Color::BrightRed));
    out.push(DrawCommand::new(state.ball.rect(), Color::White));

    for i in 0..state.scoreboard.lives as i32 {
        let marker = Rect::new(
            LIFE_MARKER_X + i * LIFE_MARKER_SPACING,
            LIFE_MARKER_Y,
            LIFE_MARKER_SIZE,
            LIFE_MARKER_SIZE,
        );
        out.push(DrawCommand::new(marker, Color::BrightRed));
    }
}

/// The frame loop: game state plus the three injected platform seams
pub struct GameFrame<I, R, S> {
    pub state: GameState,
    input: InputState,
    source: I,
    renderer: R,
    sync: S,
    draw_buf: Vec<DrawCommand>,
}

impl<I: InputSource, R: Renderer, S: FrameSync> GameFrame<I, R, S> {
    pub fn new(source: I, renderer: R, sync: S) -> Self {
        Self {
            state: GameState::new(),
            input: InputState::default(),
            source,
            renderer,
            sync,
            draw_buf: Vec::with_capacity(TOTAL_BRICKS + 2 + START_LIVES as usize),
        }
    }

    pub fn source_mut(&mut self) -> &mut I {
        &mut self.source
    }

    /// Run one full frame: sample, simulate, draw, wait, swap
    pub fn run_frame(&mut self) {
        let sample = self.source.poll();
        self.input.advance(sample);

        tick(&mut self.state, &self.input);

        self.renderer.clear();
        self.draw_buf.clear();
        draw_commands(&self.state, &mut self.draw_buf);
        for cmd in self.draw_buf.drain(..) {
            self.renderer.fill_rect(cmd);
        }

        self.sync.wait();
        self.renderer.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Buttons;
    use crate::sim::BallState;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Clear,
        Fill(DrawCommand),
        Wait,
        Present,
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct RecordingRenderer(Log);

    impl Renderer for RecordingRenderer {
        fn clear(&mut self) {
            self.0.borrow_mut().push(Event::Clear);
        }
        fn fill_rect(&mut self, cmd: DrawCommand) {
            self.0.borrow_mut().push(Event::Fill(cmd));
        }
        fn present(&mut self) {
            self.0.borrow_mut().push(Event::Present);
        }
    }

    struct RecordingSync(Log);

    impl FrameSync for RecordingSync {
        fn wait(&mut self) {
            self.0.borrow_mut().push(Event::Wait);
        }
    }

    struct ScriptedInput(Vec<Buttons>);

    impl InputSource for ScriptedInput {
        fn poll(&mut self) -> Buttons {
            if self.0.is_empty() {
                Buttons::NONE
            } else {
                self.0.remove(0)
            }
        }
    }

    fn harness(script: Vec<Buttons>) -> (GameFrame<ScriptedInput, RecordingRenderer, RecordingSync>, Log) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let game = GameFrame::new(
            ScriptedInput(script),
            RecordingRenderer(log.clone()),
            RecordingSync(log.clone()),
        );
        (game, log)
    }

    #[test]
    fn test_frame_draw_order_and_counts() {
        let (mut game, log) = harness(vec![Buttons::NONE]);
        game.run_frame();

        let events = log.borrow();
        // clear, 48 bricks + paddle + ball + 3 life markers, wait, present
        assert_eq!(events.len(), 1 + 53 + 1 + 1);
        assert_eq!(events[0], Event::Clear);
        assert_eq!(events[events.len() - 2], Event::Wait);
        assert_eq!(events[events.len() - 1], Event::Present);

        let fills: Vec<DrawCommand> = events
            .iter()
            .filter_map(|e| match e {
                Event::Fill(cmd) => Some(*cmd),
                _ => None,
            })
            .collect();
        assert_eq!(fills.len(), 53);

        // Bricks first, in grid order, colored by row
        assert_eq!(fills[0].rect, Rect::new(4, 10, BRICK_WIDTH, BRICK_HEIGHT));
        assert_eq!(fills[0].color, Color::Red);
        assert_eq!(fills[7].rect.pos.x, 116);
        assert_eq!(fills[8].color, Color::Orange);
        assert_eq!(fills[47].color, Color::Blue);

        // Then paddle, ball, and the life markers left to right
        assert_eq!(fills[48], DrawCommand::new(game.state.paddle.rect(), Color::BrightRed));
        assert_eq!(fills[49], DrawCommand::new(game.state.ball.rect(), Color::White));
        let marker_xs: Vec<i32> = fills[50..].iter().map(|c| c.rect.pos.x).collect();
        assert_eq!(marker_xs, vec![2, 7, 12]);
        assert!(fills[50..].iter().all(|c| c.color == Color::BrightRed));
    }

    #[test]
    fn test_destroyed_bricks_are_not_drawn() {
        let (mut game, log) = harness(vec![Buttons::NONE]);
        game.state.bricks.deactivate(0);
        game.state.bricks.deactivate(13);
        game.run_frame();

        let fills = log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Fill(_)))
            .count();
        assert_eq!(fills, 51);
    }

    #[test]
    fn test_sync_and_present_once_per_frame() {
        let (mut game, log) = harness(vec![Buttons::NONE; 3]);
        for _ in 0..3 {
            game.run_frame();
        }
        let events = log.borrow();
        let waits = events.iter().filter(|e| **e == Event::Wait).count();
        let presents = events.iter().filter(|e| **e == Event::Present).count();
        assert_eq!(waits, 3);
        assert_eq!(presents, 3);
        // The wait always lands between the frame's draws and its present
        for (i, e) in events.iter().enumerate() {
            if *e == Event::Wait {
                assert_eq!(events[i + 1], Event::Present);
            }
        }
    }

    #[test]
    fn test_sampled_edge_launches_ball() {
        let (mut game, _log) = harness(vec![Buttons::A, Buttons::A]);
        game.run_frame();
        assert_eq!(game.state.ball.state, BallState::Free);

        // Second held frame: no fresh edge, ball just flies on
        game.run_frame();
        assert_eq!(game.state.ball.state, BallState::Free);
        assert_eq!(game.state.frame_ticks, 2);
    }

    #[test]
    fn test_lost_life_drops_a_marker() {
        let (mut game, log) = harness(vec![Buttons::NONE]);
        game.state.ball.state = BallState::Free;
        game.state.ball.pos = glam::IVec2::new(40, BOTTOM_LOSS_Y - 1);
        game.state.ball.vel = glam::IVec2::new(0, 2);
        game.run_frame();

        assert_eq!(game.state.scoreboard.lives, START_LIVES - 1);
        let fills = log
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Fill(_)))
            .count();
        // 48 bricks + paddle + ball + 2 markers
        assert_eq!(fills, 52);
    }
}
