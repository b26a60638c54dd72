use crate::{Ball, Config, Events, GameRng, Side};
use hecs::World;

/// Check if ball left the field and re-serve it.
///
/// Returns the side that scored. The ball is served toward the scorer:
/// a goal past the left line sends the next ball right, and vice versa.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let mut goal = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x < 0.0 {
            Side::Right
        } else if ball.pos.x > config.field_width - config.ball_size {
            Side::Left
        } else {
            continue;
        };

        match scorer {
            Side::Left => events.left_scored = true,
            Side::Right => events.right_scored = true,
        }
        ball.serve(scorer, config, rng);
        tracing::debug!(
            ?scorer,
            vx = ball.vel.x,
            vy = ball.vel.y,
            "Goal, ball re-served"
        );
        goal = Some(scorer);
    }
    goal
}
