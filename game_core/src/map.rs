use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Config, Side};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_top_left_size(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    /// Inclusive on both edges
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.min.y && y <= self.max.y
    }
}

/// Bounding box of a paddle whose top edge is at `y`
pub fn paddle_rect(config: &Config, side: Side, y: f32) -> Aabb {
    Aabb::from_top_left_size(
        Vec2::new(config.paddle_x(side), y),
        Vec2::new(config.paddle_width, config.paddle_height),
    )
}

/// Starting top edge for both paddles
pub fn paddle_spawn_y(config: &Config) -> f32 {
    config.field_height / 2.0 - config.paddle_height / 2.0
}

/// Top-left corner that centers the ball on the field
pub fn ball_spawn(config: &Config) -> Vec2 {
    Vec2::new(
        config.field_width / 2.0 - config.ball_size / 2.0,
        config.field_height / 2.0 - config.ball_size / 2.0,
    )
}

/// Fixed sizes a renderer needs to draw a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_offset: f32,
    pub ball_size: f32,
}

impl Dimensions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            field_width: config.field_width,
            field_height: config.field_height,
            paddle_width: config.paddle_width,
            paddle_height: config.paddle_height,
            paddle_offset: config.paddle_offset,
            ball_size: config.ball_size,
        }
    }

    pub fn left_paddle_x(&self) -> f32 {
        self.paddle_offset
    }

    pub fn right_paddle_x(&self) -> f32 {
        self.field_width - self.paddle_offset - self.paddle_width
    }
}
