use crate::{map, Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles.
///
/// Order is fixed: walls, then the left paddle, then the right paddle.
/// Every response is a pure sign flip; the ball is never repositioned.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows, left first
    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls
        if ball.pos.y <= 0.0 || ball.pos.y >= config.ball_max_y() {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
            tracing::trace!(x = ball.pos.x, y = ball.pos.y, vy = ball.vel.y, "Ball hit wall");
        }

        for (side, paddle_y) in &paddles {
            if hits_paddle(ball, *side, *paddle_y, config) {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
                tracing::trace!(?side, x = ball.pos.x, y = ball.pos.y, "Ball hit paddle");
            }
        }
    }
}

/// Whether the ball is reaching the paddle on `side` while travelling toward it
fn hits_paddle(ball: &Ball, side: Side, paddle_y: f32, config: &Config) -> bool {
    let rect = map::paddle_rect(config, side, paddle_y);
    if !rect.spans_y(ball.center_y(config)) {
        return false;
    }
    match side {
        Side::Left => ball.pos.x <= rect.max.x && ball.vel.x < 0.0,
        Side::Right => ball.pos.x + config.ball_size >= rect.min.x && ball.vel.x > 0.0,
    }
}
