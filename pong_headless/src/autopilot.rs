use game_core::{Dimensions, InputSource, Key, KeyEvent, Snapshot};

/// Scripted stand-in for a human at the keyboard.
///
/// Emits the same press/release events a keyboard would, keeping the left
/// paddle's center on the ball with a small dead zone.
pub struct Autopilot {
    dead_zone: f32,
    held: Option<Key>,
}

impl Autopilot {
    pub fn new(dead_zone: f32) -> Self {
        Self {
            dead_zone,
            held: None,
        }
    }

    fn wanted(&self, snapshot: &Snapshot, dims: &Dimensions) -> Option<Key> {
        let paddle_center = snapshot.left_paddle_y + dims.paddle_height / 2.0;
        let ball_center = snapshot.ball_y + dims.ball_size / 2.0;
        let diff = ball_center - paddle_center;
        if diff > self.dead_zone {
            Some(Key::Down)
        } else if diff < -self.dead_zone {
            Some(Key::Up)
        } else {
            None
        }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, snapshot: &Snapshot, dims: &Dimensions, out: &mut Vec<KeyEvent>) {
        let wanted = self.wanted(snapshot, dims);
        if wanted == self.held {
            return;
        }
        if let Some(key) = self.held {
            out.push(KeyEvent::Released(key));
        }
        if let Some(key) = wanted {
            out.push(KeyEvent::Pressed(key));
        }
        self.held = wanted;
    }
}
