//! The per-frame simulation step.
//!
//! [`tick`] advances a [`Session`] by one frame and returns the
//! [`TickEvent`]s it produced, so the driver can play sounds, log and redraw
//! without the simulation knowing about any of those.

use super::collision::{evaluate, CrashCause};
use super::session::Session;
use rand::Rng;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// A pipe pair was cleared. `score` is the new total.
    Scored { score: u32 },
    /// The session just ended. Emitted once per session.
    Crashed { score: u32, cause: CrashCause },
}

/// Run one simulation step.
///
/// Order within a tick:
/// 1. collision and scoring against the current positions
/// 2. on collision: end the session, and skip the movement below
/// 3. once started: gravity, pipe advance, spawn, prune, foreground scroll
///
/// Ticks after the session has ended do nothing and return no events.
pub fn tick<R: Rng>(session: &mut Session, rng: &mut R) -> Vec<TickEvent> {
    let mut events = Vec::new();
    if !session.is_running() {
        return events;
    }
    session.tick_count += 1;

    let evaluation = evaluate(&session.bird, &session.obstacles, session.floor());
    for _ in 0..evaluation.passed {
        session.score += 1;
        events.push(TickEvent::Scored {
            score: session.score,
        });
    }

    if let Some(cause) = evaluation.crash {
        if session.end(cause) {
            events.push(TickEvent::Crashed {
                score: session.score,
                cause,
            });
        }
        return events;
    }

    if session.has_started() {
        let gravity = session.config().gravity;
        session.bird.apply_gravity(gravity);
        session.obstacles.advance();
        session.obstacles.maybe_spawn(rng);
        session.obstacles.prune();
        session.scroll_foreground();
    }

    events
}
