//! Per-frame simulation tick
//!
//! One tick: apply input, advance the virtual clock, fire a due level
//! transition, then (while playing) move the paddle, move the ball and
//! resolve collisions.

use super::collision::{
    Rect, ball_rect_overlap, brick_bounce, paddle_bounce, past_bottom, reflect_off_walls,
};
use super::input::InputEvent;
use super::progression::{check_level_cleared, poll_pending, reset_after_ball_lost};
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game by one tick.
///
/// `elapsed_ms` is the host time since the previous tick and only drives the
/// virtual clock; movement is a fixed step per tick. Non-finite or negative
/// values leave the clock where it is.
pub fn tick(state: &mut GameState, inputs: &[InputEvent], elapsed_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for &event in inputs {
        state.handle_input(event);
    }

    state.ticks += 1;
    if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
        state.time_ms += elapsed_ms;
    }

    poll_pending(state, &mut events);

    // Frozen while the level transition is pending
    if state.phase != GamePhase::Playing {
        return events;
    }

    move_paddle(state);
    move_ball(state, &mut events);

    events
}

fn move_paddle(state: &mut GameState) {
    let smoothing = state.config.paddle_smoothing;
    state.paddle.move_toward_target(smoothing, state.layout.width);
}

fn move_ball(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let ball = &mut state.ball;
    ball.pos += ball.vel;

    if let Some(vel) = reflect_off_walls(ball.pos, ball.radius, ball.vel, state.layout.width) {
        ball.vel = vel;
        events.push(GameEvent::WallBounce);
    }

    let paddle = &state.paddle;
    let paddle_rect = Rect::new(paddle.x, paddle.y, paddle.w, paddle.h);
    if ball_rect_overlap(ball.pos, ball.radius, paddle_rect) {
        ball.vel = paddle_bounce(ball.pos.x, ball.vel, ball.speed, paddle_rect);
        events.push(GameEvent::PaddleBounce);
    }

    // Row-major; every overlapping brick is resolved on its own
    for ((row, col), brick) in state.grid.iter_mut() {
        if !brick.visible {
            continue;
        }
        let rect = Rect::new(brick.x, brick.y, brick.w, brick.h);
        if ball_rect_overlap(ball.pos, ball.radius, rect) && brick.hit() {
            ball.vel = brick_bounce(ball.vel);
            state.score += 1;
            events.push(GameEvent::BrickBroken { row, col });
        }
    }

    if check_level_cleared(state, events) {
        return;
    }

    if past_bottom(state.ball.pos, state.ball.radius, state.layout.height) {
        reset_after_ball_lost(state, events);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::config::GameConfig;
    use crate::consts::FRAME_MS;
    use crate::sim::input::Direction;
    use crate::sim::layout::Viewport;

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), Viewport::new(800.0, 600.0)).unwrap()
    }

    #[test]
    fn test_ball_translates_by_velocity() {
        let mut state = new_state();
        let start = state.ball.pos;
        let vel = state.ball.vel;
        let events = tick(&mut state, &[], FRAME_MS);
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, start + vel);
        assert_eq!(state.ticks, 1);
        assert!((state.time_ms - FRAME_MS).abs() < 1e-9);
    }

    #[test]
    fn test_top_wall_scenario() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(400.0, 12.0);
        state.ball.vel = Vec2::new(4.0, -4.0);

        let events = tick(&mut state, &[], FRAME_MS);
        assert_eq!(events, vec![GameEvent::WallBounce]);
        assert_eq!(state.ball.vel, Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_paddle_hit_sends_ball_up() {
        let mut state = new_state();
        let center = state.paddle.center_x();
        state.ball.pos = Vec2::new(center, state.paddle.y - 12.0);
        state.ball.vel = Vec2::new(0.0, 4.0);

        let events = tick(&mut state, &[], FRAME_MS);
        assert!(events.contains(&GameEvent::PaddleBounce));
        assert!(state.ball.vel.x.abs() < 1e-5);
        assert!((state.ball.vel.y + 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_brick_hit_scores_and_reflects() {
        let mut state = new_state();
        let brick = state.grid.get(4, 0).unwrap().clone();
        state.ball.pos = Vec2::new(brick.x + brick.w / 2.0, brick.y + brick.h + 12.0);
        state.ball.vel = Vec2::new(0.0, -4.0);

        let events = tick(&mut state, &[], FRAME_MS);
        assert_eq!(events, vec![GameEvent::BrickBroken { row: 4, col: 0 }]);
        assert_eq!(state.score, 1);
        assert!(!state.grid.get(4, 0).unwrap().visible);
        assert_eq!(state.ball.vel, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn test_hidden_bricks_are_ignored() {
        let mut state = new_state();
        let brick = state.grid.get(4, 0).unwrap().clone();
        state.grid.get_mut(4, 0).unwrap().hit();
        state.ball.pos = Vec2::new(brick.x + brick.w / 2.0, brick.y + brick.h + 12.0);
        state.ball.vel = Vec2::new(0.0, -4.0);

        let events = tick(&mut state, &[], FRAME_MS);
        assert!(events.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.ball.vel, Vec2::new(0.0, -4.0));
    }

    #[test]
    fn test_bottom_out_resets_without_delay() {
        let mut state = new_state();
        state.grid.get_mut(0, 0).unwrap().hit();
        state.score = 1;
        state.paddle.x = 0.0;
        state.paddle.target_x = 0.0;
        state.ball.pos = Vec2::new(600.0, 588.0);
        state.ball.vel = Vec2::new(0.0, 4.0);

        let events = tick(&mut state, &[], FRAME_MS);
        assert_eq!(events, vec![GameEvent::BallLost]);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.pending.is_none());
        assert_eq!(state.score, 0);
        assert_eq!(state.grid.visible_count(), state.grid.len());
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.paddle.x, 360.0);
    }

    #[test]
    fn test_level_transition_freezes_physics() {
        let mut state = new_state();
        for (_, brick) in state.grid.iter_mut() {
            brick.hit();
        }
        let events = tick(&mut state, &[], FRAME_MS);
        assert_eq!(events, vec![GameEvent::LevelCleared { level: 1 }]);

        let frozen_ball = state.ball.pos;
        let frozen_paddle = state.paddle.x;
        let events = tick(&mut state, &[InputEvent::KeyDown(Direction::Right)], FRAME_MS);
        assert!(events.is_empty());
        assert_eq!(state.ball.pos, frozen_ball);
        assert_eq!(state.paddle.x, frozen_paddle);
    }

    #[test]
    fn test_keyboard_moves_paddle() {
        let mut state = new_state();
        let start = state.paddle.x;
        tick(&mut state, &[InputEvent::KeyDown(Direction::Left)], FRAME_MS);
        assert!((state.paddle.x - (start - 8.0)).abs() < 1e-4);
        tick(&mut state, &[InputEvent::KeyUp(Direction::Left)], FRAME_MS);
        let after = state.paddle.x;
        // Eases back toward the unchanged pointer target
        assert!(after > start - 8.0);
    }

    #[test]
    fn test_bad_elapsed_leaves_clock() {
        let mut state = new_state();
        tick(&mut state, &[], f64::NAN);
        tick(&mut state, &[], -5.0);
        assert_eq!(state.time_ms, 0.0);
        assert_eq!(state.ticks, 2);
    }
}
