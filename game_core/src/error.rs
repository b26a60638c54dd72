/// Construction-time configuration faults. A running game never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositive { field: &'static str, value: f32 },
    PaddleTooTall { paddle_height: f32, field_height: f32 },
    BallTooLarge { ball_size: f32 },
    PaddlesOverlap { paddle_offset: f32, paddle_width: f32 },
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be a positive finite number, got {value}")
            }
            Self::PaddleTooTall {
                paddle_height,
                field_height,
            } => write!(
                f,
                "paddle height {paddle_height} must be less than field height {field_height}"
            ),
            Self::BallTooLarge { ball_size } => {
                write!(f, "ball size {ball_size} does not fit inside the field")
            }
            Self::PaddlesOverlap {
                paddle_offset,
                paddle_width,
            } => write!(
                f,
                "paddles at offset {paddle_offset} with width {paddle_width} would meet"
            ),
            Self::Io(e) => write!(f, "config read error: {e}"),
            Self::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
