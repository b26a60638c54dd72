use crate::Config;

use super::movement::apply_bounds;

/// Move the scripted paddle one tick toward the ball.
///
/// Purely reactive: the paddle center chases the ball's vertical span and
/// holds still while the center lies within it.
pub fn advance_ai(current_y: f32, ball_y: f32, config: &Config) -> f32 {
    let center = current_y + config.paddle_height / 2.0;
    let y = if center < ball_y && current_y < config.paddle_max_y() {
        current_y + config.ai_speed
    } else if center > ball_y + config.ball_size && current_y > 0.0 {
        current_y - config.ai_speed
    } else {
        current_y
    };
    apply_bounds(y, config)
}
