//! Drawing-surface contract
//!
//! The core never draws directly. Hosts implement [`Canvas`] over whatever
//! 2D context they have and call [`paint`] once per tick after the update.

pub mod draw_list;

pub use draw_list::{DrawCommand, DrawList};

use glam::Vec2;

use crate::sim::state::{BRICK_COLOR_COUNT, GameState};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BALL: Color = [0.0, 0.584, 0.867, 1.0];
    pub const PADDLE: Color = [0.0, 0.584, 0.867, 1.0];
    pub const TEXT: Color = [0.0, 0.584, 0.867, 1.0];

    /// Brick palette; a brick's `color` indexes into this
    pub const BRICKS: [Color; 6] = [
        [0.0, 0.584, 0.867, 1.0],
        [0.18, 0.8, 0.44, 1.0],
        [0.95, 0.77, 0.06, 1.0],
        [0.9, 0.49, 0.13, 1.0],
        [0.91, 0.3, 0.24, 1.0],
        [0.61, 0.35, 0.71, 1.0],
    ];
}

/// Overlay font size on the reference surface
const FONT_SIZE: f32 = 20.0;

/// A 2D drawing surface
pub trait Canvas {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
}

/// Palette color for a brick color index
pub fn brick_color(index: u8) -> Color {
    colors::BRICKS[(index % BRICK_COLOR_COUNT) as usize % colors::BRICKS.len()]
}

/// Paint one frame: ball, paddle, bricks, then the score/level/paddle overlays.
///
/// Hidden entities are skipped.
pub fn paint<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    let layout = &state.layout;
    canvas.clear(layout.width, layout.height);

    let ball = &state.ball;
    if ball.visible {
        canvas.fill_circle(ball.pos, ball.radius, colors::BALL);
    }

    let paddle = &state.paddle;
    if paddle.visible {
        canvas.fill_rect(paddle.x, paddle.y, paddle.w, paddle.h, colors::PADDLE);
    }

    for (_, brick) in state.grid.iter().filter(|(_, b)| b.visible) {
        canvas.fill_rect(brick.x, brick.y, brick.w, brick.h, brick_color(brick.color));
    }

    let size = FONT_SIZE * layout.scale_y;
    let baseline = 30.0 * layout.scale_y;
    canvas.fill_text(
        &format!("Level: {}", state.level),
        20.0 * layout.scale_x,
        baseline,
        size,
        colors::TEXT,
    );
    canvas.fill_text(
        &format!("Paddle: {:.0}", paddle.w),
        layout.width / 2.0 - 50.0 * layout.scale_x,
        baseline,
        size,
        colors::TEXT,
    );
    canvas.fill_text(
        &format!("Score: {}", state.score),
        layout.width - 100.0 * layout.scale_x,
        baseline,
        size,
        colors::TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::layout::Viewport;

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), Viewport::new(800.0, 600.0)).unwrap()
    }

    #[test]
    fn test_palette_covers_color_indices() {
        assert_eq!(colors::BRICKS.len(), BRICK_COLOR_COUNT as usize);
    }

    #[test]
    fn test_paints_every_visible_entity() {
        let mut state = new_state();
        state.grid.get_mut(0, 0).unwrap().hit();
        state.score = 1;

        let mut list = DrawList::default();
        paint(&state, &mut list);

        assert_eq!(list.circles(), 1);
        // Paddle plus the 44 bricks still standing
        assert_eq!(list.rects(), 45);
        assert!(list.texts().any(|t| t == "Score: 1"));
        assert!(list.texts().any(|t| t == "Level: 1"));
        assert!(list.texts().any(|t| t == "Paddle: 80"));
    }

    #[test]
    fn test_hidden_ball_and_paddle_not_painted() {
        let mut state = new_state();
        state.ball.visible = false;
        state.paddle.visible = false;

        let mut list = DrawList::default();
        paint(&state, &mut list);
        assert_eq!(list.circles(), 0);
        assert_eq!(list.rects(), state.grid.len());
    }
}
