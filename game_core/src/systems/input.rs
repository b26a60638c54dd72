use crate::{Config, InputState, Key};

use super::movement::apply_bounds;

/// Move the human paddle one tick from the held keys.
///
/// Up and Down are checked independently and in that order, so holding both
/// cancels out unless the paddle is resting on a wall.
pub fn advance_human(current_y: f32, input: &InputState, config: &Config) -> f32 {
    let mut y = current_y;
    if input.is_held(Key::Up) && y > 0.0 {
        y -= config.paddle_speed;
    }
    if input.is_held(Key::Down) && y < config.paddle_max_y() {
        y += config.paddle_speed;
    }
    apply_bounds(y, config)
}
