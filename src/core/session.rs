//! One play session: bird, pipes, score and the phase state machine.
//!
//! ```text
//! Ready ──flap──► Flying ──collision──► GameOver
//!   └──────────────collision──────────────┘
//! ```
//!
//! `GameOver` is absorbing. A new session is a fresh [`Session`].

use super::bird::Bird;
use super::collision::CrashCause;
use super::config::GameConfig;
use super::constants::FOREGROUND_STEP;
use super::obstacles::{ObstacleLayout, ObstacleQueue};
use crate::assets::SpriteSheet;

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Running, but nothing moves until the first flap.
    Ready,
    /// Gravity and pipes are live.
    Flying,
    /// Terminal. Holds the final score.
    GameOver { score: u32, cause: CrashCause },
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    sprites: SpriteSheet,
    pub(crate) bird: Bird,
    pub(crate) obstacles: ObstacleQueue,
    pub(crate) score: u32,
    phase: Phase,
    started: bool,
    /// Foreground scroll offset, wraps at minus the foreground width.
    pub(crate) foreground_x: i32,
    pub(crate) tick_count: u64,
}

impl Session {
    pub fn new(config: &GameConfig, sprites: SpriteSheet) -> Self {
        let bird = Bird::new(config.bird_start_x, config.bird_start_y, sprites.bird());
        let obstacles = ObstacleQueue::new(ObstacleLayout::new(config, &sprites));
        let (phase, started) = if config.wait_for_first_flap {
            (Phase::Ready, false)
        } else {
            (Phase::Flying, true)
        };

        Self {
            config: config.clone(),
            sprites,
            bird,
            obstacles,
            score: 0,
            phase,
            started,
            foreground_x: 0,
            tick_count: 0,
        }
    }

    /// A brand-new session with the same config and sprites.
    pub fn restarted(&self) -> Self {
        Self::new(&self.config, self.sprites)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn sprites(&self) -> &SpriteSheet {
        &self.sprites
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    /// Mutable access for scripted scenarios and tools.
    pub fn bird_mut(&mut self) -> &mut Bird {
        &mut self.bird
    }

    pub fn obstacles(&self) -> &ObstacleQueue {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut ObstacleQueue {
        &mut self.obstacles
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// False once the session has ended. Never becomes true again.
    pub fn is_running(&self) -> bool {
        !matches!(self.phase, Phase::GameOver { .. })
    }

    /// Whether the first flap has happened (or was not required).
    pub fn has_started(&self) -> bool {
        self.started
    }

    pub fn foreground_x(&self) -> i32 {
        self.foreground_x
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Bottom edge of the playable area.
    pub fn floor(&self) -> f64 {
        self.config.surface_height as f64
    }

    /// Player input. Applied immediately, independent of the tick boundary.
    ///
    /// Returns false (and changes nothing) once the session is over.
    pub fn flap(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if self.phase == Phase::Ready {
            self.phase = Phase::Flying;
            self.started = true;
        }
        self.bird.apply_impulse(self.config.flap_velocity);
        true
    }

    /// Enter `GameOver`. Returns true only on the transition itself.
    pub(crate) fn end(&mut self, cause: CrashCause) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = Phase::GameOver {
            score: self.score,
            cause,
        };
        true
    }

    pub(crate) fn scroll_foreground(&mut self) {
        let width = self.sprites.foreground().width as i32;
        self.foreground_x -= FOREGROUND_STEP;
        if self.foreground_x <= -width {
            self.foreground_x = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&GameConfig::default(), SpriteSheet::builtin())
    }

    #[test]
    fn test_new_session_defaults() {
        let s = session();
        assert_eq!(s.phase(), Phase::Ready);
        assert!(s.is_running());
        assert!(!s.has_started());
        assert_eq!(s.score(), 0);
        assert!(s.obstacles().is_empty());
        assert_eq!(s.bird().x, 10);
        assert_eq!(s.bird().width, 38);
        assert_eq!(s.floor(), 512.0);
    }

    #[test]
    fn test_immediate_config_skips_ready() {
        let s = Session::new(&GameConfig::immediate(), SpriteSheet::builtin());
        assert_eq!(s.phase(), Phase::Flying);
        assert!(s.has_started());
    }

    #[test]
    fn test_first_flap_starts_flight() {
        let mut s = session();
        assert!(s.flap());
        assert_eq!(s.phase(), Phase::Flying);
        assert!(s.has_started());
        assert_eq!(s.bird().velocity, -6.0);
    }

    #[test]
    fn test_end_is_one_way() {
        let mut s = session();
        s.score = 3;
        assert!(s.end(CrashCause::Floor));
        assert!(!s.is_running());
        assert_eq!(
            s.phase(),
            Phase::GameOver {
                score: 3,
                cause: CrashCause::Floor
            }
        );

        assert!(!s.end(CrashCause::UpperObstacle));
        assert_eq!(
            s.phase(),
            Phase::GameOver {
                score: 3,
                cause: CrashCause::Floor
            }
        );
    }

    #[test]
    fn test_flap_ignored_after_game_over() {
        let mut s = session();
        s.flap();
        s.bird.velocity = 3.0;
        s.end(CrashCause::LowerObstacle);
        assert!(!s.flap());
        assert_eq!(s.bird().velocity, 3.0);
    }

    #[test]
    fn test_foreground_wraps() {
        let mut s = session();
        let width = s.sprites().foreground().width as i32;
        for _ in 0..width - 1 {
            s.scroll_foreground();
        }
        assert_eq!(s.foreground_x(), -(width - 1));
        s.scroll_foreground();
        assert_eq!(s.foreground_x(), 0);
    }

    #[test]
    fn test_restarted_is_fresh() {
        let mut s = session();
        s.flap();
        s.score = 9;
        s.end(CrashCause::Floor);
        let fresh = s.restarted();
        assert_eq!(fresh.phase(), Phase::Ready);
        assert_eq!(fresh.score(), 0);
        assert_eq!(fresh.bird().velocity, 0.0);
        assert_eq!(fresh.config(), s.config());
    }
}
