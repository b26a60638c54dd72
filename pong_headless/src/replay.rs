use std::fmt;
use std::path::Path;

use game_core::{Dimensions, InputSource, Key, KeyEvent, Snapshot};

/// A key event scheduled for a given tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scripted {
    pub tick: u64,
    pub event: KeyEvent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    Io(String),
    Line { line: usize, reason: String },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Io(e) => write!(f, "replay io error: {e}"),
            ReplayError::Line { line, reason } => write!(f, "replay line {line}: {reason}"),
        }
    }
}

impl std::error::Error for ReplayError {}

/// Recorded keyboard input played back against the game.
///
/// One event per line: `<tick> <press|release> <key>`, where `<key>` is a
/// host key name such as `ArrowUp` or `s`. Blank lines and `#` comments are
/// skipped. An event for tick `t` is applied before tick `t` is simulated,
/// counting from 0.
#[derive(Debug, Default)]
pub struct Replay {
    script: Vec<Scripted>,
    next: usize,
}

impl Replay {
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ReplayError::Io(format!("{}: {e}", path.display())))?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ReplayError> {
        let mut script = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let bad = |reason: String| ReplayError::Line {
                line: index + 1,
                reason,
            };

            let fields: Vec<&str> = line.split_whitespace().collect();
            let &[tick, action, name] = fields.as_slice() else {
                return Err(bad(format!("expected `<tick> <press|release> <key>`, got `{line}`")));
            };
            let tick: u64 = tick
                .parse()
                .map_err(|_| bad(format!("invalid tick `{tick}`")))?;
            let key = Key::from_name(name).ok_or_else(|| bad(format!("unknown key `{name}`")))?;
            let event = match action {
                "press" => KeyEvent::Pressed(key),
                "release" => KeyEvent::Released(key),
                other => return Err(bad(format!("unknown action `{other}`"))),
            };
            script.push(Scripted { tick, event });
        }
        // Stable, so same-tick events keep file order
        script.sort_by_key(|scripted| scripted.tick);
        tracing::debug!(events = script.len(), "Replay loaded");
        Ok(Self { script, next: 0 })
    }
}

impl InputSource for Replay {
    fn poll(&mut self, snapshot: &Snapshot, _dims: &Dimensions, out: &mut Vec<KeyEvent>) {
        while let Some(scripted) = self.script.get(self.next) {
            if scripted.tick > snapshot.tick {
                break;
            }
            out.push(scripted.event);
            self.next += 1;
        }
    }
}
