use crate::{Ball, Config, Controller, InputState, Paddle, PaddleBounds};
use hecs::World;

use super::{advance_ai, advance_human};

/// Apply the configured boundary policy to a freshly moved paddle
pub(crate) fn apply_bounds(y: f32, config: &Config) -> f32 {
    match config.paddle_bounds {
        PaddleBounds::Overshoot => y,
        PaddleBounds::Clamp => config.clamp_paddle_y(y),
    }
}

/// Advance every paddle through its controller.
///
/// AI paddles react to the ball as it stood before this tick's ball step.
pub fn move_paddles(world: &mut World, input: &InputState, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    for (_entity, (paddle, controller)) in world.query_mut::<(&mut Paddle, &Controller)>() {
        paddle.y = match controller {
            Controller::Human => advance_human(paddle.y, input, config),
            Controller::Ai => match ball_y {
                Some(ball_y) => advance_ai(paddle.y, ball_y, config),
                None => paddle.y,
            },
        };
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
