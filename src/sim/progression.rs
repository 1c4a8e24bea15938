//! Level progression
//!
//! Two transitions leave normal play:
//! - clearing every brick hides the ball and paddle and schedules a level
//!   advance on the virtual clock
//! - losing the ball resets the board immediately

use super::state::{GameEvent, GamePhase, GameState, PendingTransition};

/// Enter the level transition if every brick is down.
///
/// Does nothing while a transition is already pending, so re-checking the
/// cleared grid before the timer fires never schedules a second advance.
/// Returns true if a transition was scheduled.
pub fn check_level_cleared(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    if !state.grid.all_cleared() {
        return false;
    }
    begin_level_transition(state, events)
}

/// Hide ball and paddle and schedule the deferred level advance
pub fn begin_level_transition(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    if state.pending.is_some() || state.phase == GamePhase::LevelTransition {
        return false;
    }

    state.ball.visible = false;
    state.paddle.visible = false;
    state.phase = GamePhase::LevelTransition;
    state.pending = Some(PendingTransition {
        deadline_ms: state.time_ms + state.config.level_transition_delay_ms,
    });

    log::info!(
        "Level {} cleared at {:.0}ms, advancing in {:.0}ms",
        state.level,
        state.time_ms,
        state.config.level_transition_delay_ms
    );
    events.push(GameEvent::LevelCleared { level: state.level });
    true
}

/// Run the pending level advance if the clock has reached its deadline.
///
/// The pending slot is taken before the advance runs, so each scheduled
/// transition completes exactly once. Returns true if it fired.
pub fn poll_pending(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    match state.pending {
        Some(pending) if state.time_ms >= pending.deadline_ms => {
            state.pending = None;
            complete_level_transition(state, events);
            true
        }
        _ => false,
    }
}

/// Advance to the next level, or wrap to level 1 after the last one
fn complete_level_transition(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.level < state.config.max_level {
        state.level += 1;
    } else {
        log::info!("All {} levels cleared, starting over", state.config.max_level);
        events.push(GameEvent::Victory);
        state.level = 1;
    }

    // Input during the transition only set intent; carry it into the new level
    let pointer_centre = state.paddle.target_x + state.paddle.w / 2.0;
    let held = if state.paddle.dx == 0.0 { 0.0 } else { state.paddle.dx.signum() };

    state.score = 0;
    state.rebuild_for_level();

    let width = state.layout.width;
    state.paddle.target_x = state.paddle.clamp_x(pointer_centre - state.paddle.w / 2.0, width);
    state.paddle.dx = held * state.paddle.speed;
    state.ball.visible = true;
    state.paddle.visible = true;
    state.phase = GamePhase::Playing;

    log::info!(
        "Level {} started: {} bricks, paddle width {:.1}",
        state.level,
        state.grid.len(),
        state.paddle.w
    );
    events.push(GameEvent::LevelStarted { level: state.level });
}

/// Ball went out the bottom: fresh grid, score cleared, entities back at start.
///
/// Immediate, and the level is kept.
pub fn reset_after_ball_lost(state: &mut GameState, events: &mut Vec<GameEvent>) {
    log::info!("Ball lost on level {} with score {}", state.level, state.score);

    state.score = 0;
    state.regenerate_grid();
    state.reset_positions();
    events.push(GameEvent::BallLost);
}
