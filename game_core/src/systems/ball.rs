use glam::Vec2;
use hecs::World;

use crate::{Ball, Config, Events, GameRng, Side};

use super::{check_collisions, check_scoring, move_ball};

/// Outcome of one ball tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallStep {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Side that scored, if the ball left the field this tick
    pub goal: Option<Side>,
}

/// Advance the ball one tick: integrate, bounce, then score and re-serve.
///
/// Returns `None` when the world has no ball.
pub fn step_ball(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<BallStep> {
    move_ball(world);
    check_collisions(world, config, events);
    let goal = check_scoring(world, config, events, rng);

    world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| BallStep {
            pos: ball.pos,
            vel: ball.vel,
            goal,
        })
}
