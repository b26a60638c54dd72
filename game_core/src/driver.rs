//! Seams between the simulation and its host: something that decides when a
//! tick is due, and something that draws the result.

use crate::{Dimensions, Events, Game, Key, Snapshot};

/// Decides when the next tick runs
pub trait Scheduler {
    /// Block until the next tick is due. Returning `false` ends the loop.
    fn wait_for_tick(&mut self) -> bool;
}

/// Draws fully resolved ticks; never sees partial state
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot, dims: &Dimensions, events: &Events);
}

/// A discrete press or release from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// Produces key events between ticks, e.g. a keyboard or a replay
pub trait InputSource {
    /// Push any events that happened since the last tick, in order
    fn poll(&mut self, snapshot: &Snapshot, dims: &Dimensions, out: &mut Vec<KeyEvent>);
}

/// No input at all; the human paddle stays where it is
impl InputSource for () {
    fn poll(&mut self, _snapshot: &Snapshot, _dims: &Dimensions, _out: &mut Vec<KeyEvent>) {}
}

/// Runs exactly `n` ticks back to back, without sleeping
#[derive(Debug, Clone, Copy)]
pub struct FixedTicks(pub u64);

impl Scheduler for FixedTicks {
    fn wait_for_tick(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        true
    }
}

/// Drive `game` until the scheduler stops, rendering every tick.
/// Returns the number of ticks run.
pub fn run<S, R>(game: &mut Game, scheduler: &mut S, renderer: &mut R) -> u64
where
    S: Scheduler + ?Sized,
    R: Renderer + ?Sized,
{
    run_with_input(game, scheduler, &mut (), renderer)
}

/// Like [`run`], draining `input` before every tick
pub fn run_with_input<S, I, R>(
    game: &mut Game,
    scheduler: &mut S,
    input: &mut I,
    renderer: &mut R,
) -> u64
where
    S: Scheduler + ?Sized,
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    let dims = game.dimensions();
    let mut pending = Vec::new();
    let mut ticks = 0;
    while scheduler.wait_for_tick() {
        input.poll(&game.snapshot(), &dims, &mut pending);
        for event in pending.drain(..) {
            game.apply_key_event(event);
        }
        let snapshot = game.tick();
        renderer.render(&snapshot, &dims, &game.events());
        ticks += 1;
    }
    tracing::debug!(ticks, "Game loop stopped");
    ticks
}
