//! Headless host for the Pong core: drives ticks on a timer and logs frames.
//!
//! `RUST_LOG` controls verbosity, `PONG_CONFIG` points at a TOML config and
//! `PONG_SEED` fixes the serve rng.

mod autopilot;
mod renderer;
mod replay;
mod scheduler;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use game_core::{run_with_input, Config, FixedTicks, Game, GameRng, InputSource, Scheduler};
use tracing_subscriber::EnvFilter;

use autopilot::Autopilot;
use renderer::LogRenderer;
use replay::Replay;
use scheduler::FixedRateScheduler;

const SEED_ENV: &str = "PONG_SEED";
const AUTOPILOT_DEAD_ZONE: f32 = 8.0;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Options {
    /// Stop after this many ticks; runs forever when omitted
    ticks: Option<u64>,
    /// Run ticks back to back instead of on the configured interval
    #[arg(long, requires = "ticks")]
    fast: bool,
    /// Let a scripted player steer the left paddle
    #[arg(long, conflicts_with = "replay")]
    autopilot: bool,
    /// Play recorded key events from FILE
    #[arg(long, value_name = "FILE")]
    replay: Option<PathBuf>,
    /// Log a frame every N ticks
    #[arg(long, value_name = "N", default_value_t = 60)]
    stride: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = Options::parse();
    let config = Config::load()?;
    let interval = Duration::from_millis(config.tick_interval_ms);

    let rng = match std::env::var(SEED_ENV) {
        Ok(seed) => GameRng::new(seed.parse()?),
        Err(_) => GameRng::from_entropy(),
    };
    let mut game = Game::with_rng(config, rng)?;

    let mut scheduler: Box<dyn Scheduler> = match (options.fast, options.ticks) {
        (true, Some(ticks)) => Box::new(FixedTicks(ticks)),
        (_, limit) => Box::new(FixedRateScheduler::new(interval, limit)),
    };
    let mut input: Box<dyn InputSource> = match &options.replay {
        Some(path) => Box::new(Replay::load(path)?),
        None if options.autopilot => Box::new(Autopilot::new(AUTOPILOT_DEAD_ZONE)),
        None => Box::new(()),
    };
    let mut renderer = LogRenderer::new(options.stride);

    tracing::info!(
        ticks = ?options.ticks,
        fast = options.fast,
        autopilot = options.autopilot,
        replay = ?options.replay,
        "Pong starting"
    );

    let ticks = run_with_input(
        &mut game,
        scheduler.as_mut(),
        input.as_mut(),
        &mut renderer,
    );

    let (left, right) = game.score().get();
    tracing::info!(ticks, left, right, "Final score");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options, clap::Error> {
        Options::try_parse_from(std::iter::once("pong_headless").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.ticks, None);
        assert!(!options.fast);
        assert!(!options.autopilot);
        assert_eq!(options.replay, None);
        assert_eq!(options.stride, 60);
    }

    #[test]
    fn test_all_flags() {
        let options = parse(&["600", "--fast", "--autopilot", "--stride", "10"]).unwrap();
        assert_eq!(options.ticks, Some(600));
        assert!(options.fast);
        assert!(options.autopilot);
        assert_eq!(options.stride, 10);
    }

    #[test]
    fn test_replay_path() {
        let options = parse(&["--replay", "rally.replay"]).unwrap();
        assert_eq!(options.replay, Some(PathBuf::from("rally.replay")));
    }

    #[test]
    fn test_fast_requires_ticks() {
        let err = parse(&["--fast"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_autopilot_conflicts_with_replay() {
        let err = parse(&["--autopilot", "--replay", "rally.replay"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_rejects_unknown_argument() {
        let err = parse(&["--turbo"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_stride_needs_value() {
        assert!(parse(&["--stride"]).is_err());
    }

    #[test]
    fn test_autopilot_keeps_rallies_going() {
        let mut game = Game::new(Config::new(), 77).unwrap();
        let mut renderer = LogRenderer::new(60);
        let mut autopilot = Autopilot::new(AUTOPILOT_DEAD_ZONE);

        run_with_input(&mut game, &mut FixedTicks(3000), &mut autopilot, &mut renderer);

        let snapshot = game.snapshot();
        assert_eq!(snapshot.tick, 3000);
        assert!(snapshot.left_paddle_y >= 0.0 && snapshot.left_paddle_y <= 320.0);
    }
}
