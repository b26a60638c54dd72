use game_core::{Dimensions, Events, Renderer, Snapshot};

/// Renders frames as log lines
pub struct LogRenderer {
    stride: u64,
}

impl LogRenderer {
    /// Log a full frame every `stride` ticks; goals are always logged
    pub fn new(stride: u64) -> Self {
        Self {
            stride: stride.max(1),
        }
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &Snapshot, dims: &Dimensions, events: &Events) {
        if let Some(scorer) = events.goal() {
            tracing::info!(
                ?scorer,
                "{} : {}",
                snapshot.score_left,
                snapshot.score_right
            );
        }
        if snapshot.tick % self.stride == 0 {
            tracing::debug!(
                tick = snapshot.tick,
                left_y = snapshot.left_paddle_y,
                right_y = snapshot.right_paddle_y,
                ball_x = snapshot.ball_x,
                ball_y = snapshot.ball_y,
                field = %format_args!("{}x{}", dims.field_width, dims.field_height),
                "Frame"
            );
        }
    }
}
