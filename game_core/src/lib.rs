pub mod components;
pub mod config;
pub mod driver;
pub mod error;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use error::*;
pub use game::*;
pub use map::{Aabb, Dimensions};
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the deterministic Pong simulation.
///
/// Returns the side that scored this tick, if any. The caller owns the
/// scoreboard; `score` is only touched through that result.
pub fn step(
    world: &mut World,
    input: &InputState,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    // Clear events at start of tick
    events.clear();

    // 1. Move paddles (human from input, AI from the pre-tick ball)
    move_paddles(world, input, config);

    // 2. Move the ball, bounce, detect goals and re-serve
    let goal = step_ball(world, config, events, rng).and_then(|step| step.goal);

    // 3. Record the goal
    if let Some(scorer) = goal {
        score.record(scorer);
        tracing::debug!(
            ?scorer,
            left = score.left(),
            right = score.right(),
            "Score updated"
        );
    }

    goal
}

/// Helper to create a paddle entity
pub fn create_paddle(
    world: &mut World,
    side: Side,
    controller: Controller,
    y: f32,
) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), controller))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
