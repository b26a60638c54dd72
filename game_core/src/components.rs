use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Config, GameRng};

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal sign of travel toward this side's goal line
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Who steers a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Ai,
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Top-left of the bounding box
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Vertical center of the ball
    pub fn center_y(&self, config: &Config) -> f32 {
        self.pos.y + config.ball_size / 2.0
    }

    /// Re-center and serve toward `toward`, with a random vertical direction
    pub fn serve(&mut self, toward: Side, config: &Config, rng: &mut GameRng) {
        self.pos = crate::map::ball_spawn(config);
        let vy = if rng.0.gen_bool(0.5) {
            config.ball_speed
        } else {
            -config.ball_speed
        };
        self.vel = Vec2::new(config.ball_speed * toward.direction(), vy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_recenters_and_sets_direction() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-3.0, 12.0), Vec2::new(-5.0, 5.0));

        ball.serve(Side::Right, &config, &mut rng);

        assert_eq!(ball.pos, Vec2::new(390.0, 190.0));
        assert_eq!(ball.vel.x, 5.0);
        assert_eq!(ball.vel.y.abs(), 5.0);
    }

    #[test]
    fn test_serve_vertical_direction_varies() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        let mut ups = 0;
        let mut downs = 0;
        for _ in 0..64 {
            ball.serve(Side::Left, &config, &mut rng);
            assert_eq!(ball.vel.x, -5.0);
            if ball.vel.y < 0.0 {
                ups += 1;
            } else {
                downs += 1;
            }
        }
        assert!(ups > 0 && downs > 0, "Both serve directions should occur");
    }
}
