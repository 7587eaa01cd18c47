//! Per-tick collision and pass-through detection.

use super::bird::Bird;
use super::obstacles::ObstacleQueue;
use serde::Serialize;
use std::fmt;

/// What ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CrashCause {
    UpperObstacle,
    LowerObstacle,
    Floor,
}

impl fmt::Display for CrashCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrashCause::UpperObstacle => write!(f, "hit an upper pipe"),
            CrashCause::LowerObstacle => write!(f, "hit a lower pipe"),
            CrashCause::Floor => write!(f, "hit the ground"),
        }
    }
}

/// Outcome of one evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Pairs whose trailing edge lines up with the bird this tick.
    pub passed: u32,
    /// First collision found, if any. Pairs after it were not examined.
    pub crash: Option<CrashCause>,
}

/// Check the bird against the floor and then every pair in queue order.
///
/// A pair counts as passed when the bird's column equals the upper pipe's
/// trailing edge. That exact test is sound only because both move in whole
/// unit steps. Evaluation stops at the first collision; passes found on
/// earlier pairs in the same pass are still reported.
pub fn evaluate(bird: &Bird, obstacles: &ObstacleQueue, floor: f64) -> Evaluation {
    if bird.bottom() > floor {
        return Evaluation {
            passed: 0,
            crash: Some(CrashCause::Floor),
        };
    }

    let bounds = bird.bounds();
    let mut evaluation = Evaluation::default();

    for pair in obstacles.pairs() {
        if bounds.overlaps(&pair.upper) {
            evaluation.crash = Some(CrashCause::UpperObstacle);
            return evaluation;
        }
        if bounds.overlaps(&pair.lower) {
            evaluation.crash = Some(CrashCause::LowerObstacle);
            return evaluation;
        }
        if bird.x == pair.trailing_edge() {
            evaluation.passed += 1;
        }
    }

    evaluation
}
