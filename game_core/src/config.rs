use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::Params;
use crate::Side;

/// Env var naming a TOML config file
pub const CONFIG_ENV: &str = "PONG_CONFIG";
/// Config file picked up from the working directory when no env var is set
pub const DEFAULT_CONFIG_PATH: &str = "config/pong.toml";

/// How paddle movement treats the top and bottom of the field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddleBounds {
    /// Moves are gated on the pre-move position only, so one step may pass
    /// the bound when the speed does not divide the travel range.
    #[default]
    Overshoot,
    /// Moves are gated the same way and then clamped to the field.
    Clamp,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_offset: f32,
    pub paddle_speed: f32,
    pub ai_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub paddle_bounds: PaddleBounds,
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_offset: Params::PADDLE_OFFSET,
            paddle_speed: Params::PADDLE_SPEED,
            ai_speed: Params::AI_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            paddle_bounds: PaddleBounds::default(),
            tick_interval_ms: Params::TICK_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; missing keys fall back to the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from `PONG_CONFIG`, then `config/pong.toml`, falling back
    /// to defaults when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::Io(format!("{path}: {e}")))?;
            tracing::debug!(path = %path, "Loading config from env");
            return Self::from_toml_str(&contents);
        }
        match std::fs::read_to_string(DEFAULT_CONFIG_PATH) {
            Ok(contents) => {
                tracing::debug!(path = DEFAULT_CONFIG_PATH, "Loading config file");
                Self::from_toml_str(&contents)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io(format!("{DEFAULT_CONFIG_PATH}: {e}"))),
        }
    }

    /// Check the geometric invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ai_speed", self.ai_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !self.paddle_offset.is_finite() || self.paddle_offset < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "paddle_offset",
                value: self.paddle_offset,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::NonPositive {
                field: "tick_interval_ms",
                value: 0.0,
            });
        }
        if self.paddle_height >= self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                field_height: self.field_height,
            });
        }
        if self.ball_size >= self.field_height || self.ball_size >= self.field_width {
            return Err(ConfigError::BallTooLarge {
                ball_size: self.ball_size,
            });
        }
        if 2.0 * (self.paddle_offset + self.paddle_width) >= self.field_width {
            return Err(ConfigError::PaddlesOverlap {
                paddle_offset: self.paddle_offset,
                paddle_width: self.paddle_width,
            });
        }
        Ok(())
    }

    /// Get the left edge X of the paddle on `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_offset,
            Side::Right => self.field_width - self.paddle_offset - self.paddle_width,
        }
    }

    /// Lowest paddle top edge that keeps the paddle on the field
    pub fn paddle_max_y(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Clamp paddle Y to field bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.paddle_max_y())
    }

    /// Lowest ball top edge before it touches the bottom wall
    pub fn ball_max_y(&self) -> f32 {
        self.field_height - self.ball_size
    }
}
