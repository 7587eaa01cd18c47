//! Session configuration.

use super::constants::*;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Tunables for one game session and the loop that drives it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameConfig {
    /// Logical drawing surface width
    pub surface_width: u32,

    /// Logical drawing surface height; also the floor the bird must stay above
    pub surface_height: u32,

    /// Velocity added every tick
    pub gravity: f64,

    /// Velocity the bird is set to on a flap (negative = upward)
    pub flap_velocity: f64,

    /// Vertical opening between the upper and lower pipe
    pub pipe_gap: u32,

    /// Smallest height the upper pipe may reach into the surface
    pub min_pipe_height: u32,

    /// Leftward pipe movement per tick. Pass-through is an exact column
    /// match, so only 1 is accepted.
    pub pipe_step: i32,

    /// Spawn once the newest pair is this many pipe widths from the right edge
    pub pipe_spacing_factor: u32,

    /// Fixed horizontal bird position
    pub bird_start_x: i32,

    /// Initial vertical bird position
    pub bird_start_y: f64,

    /// Hold the bird and pipes still until the first flap
    pub wait_for_first_flap: bool,

    /// Time between simulation ticks
    pub frame_interval: Duration,

    /// How long to wait for images before giving up
    pub asset_timeout: Duration,

    /// Random seed for pipe heights (None = random)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            pipe_gap: PIPE_GAP,
            min_pipe_height: MIN_PIPE_HEIGHT,
            pipe_step: PIPE_STEP,
            pipe_spacing_factor: PIPE_SPACING_FACTOR,
            bird_start_x: BIRD_START_X,
            bird_start_y: BIRD_START_Y,
            wait_for_first_flap: true,
            frame_interval: Duration::from_millis(REALTIME_FRAME_MS),
            asset_timeout: Duration::from_secs(ASSET_TIMEOUT_SECONDS),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Motion starts on the first tick without waiting for input.
    pub fn immediate() -> Self {
        Self {
            wait_for_first_flap: false,
            ..Default::default()
        }
    }

    /// Reproducible pipe layout.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Check the values can produce a playable session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Err(ConfigError::EmptySurface);
        }
        if self.pipe_gap >= self.surface_height {
            return Err(ConfigError::GapTooLarge {
                gap: self.pipe_gap,
                surface_height: self.surface_height,
            });
        }
        if self.pipe_step != PIPE_STEP {
            return Err(ConfigError::NonUnitStep(self.pipe_step));
        }
        if !self.gravity.is_finite() || !self.flap_velocity.is_finite() {
            return Err(ConfigError::NonFinitePhysics);
        }
        if self.frame_interval.is_zero() {
            return Err(ConfigError::ZeroFrameInterval);
        }
        Ok(())
    }
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptySurface,
    GapTooLarge { gap: u32, surface_height: u32 },
    NonUnitStep(i32),
    NonFinitePhysics,
    ZeroFrameInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySurface => write!(f, "surface width and height must be non-zero"),
            Self::GapTooLarge {
                gap,
                surface_height,
            } => write!(
                f,
                "pipe gap {gap} does not fit a surface {surface_height} units tall"
            ),
            Self::NonUnitStep(step) => write!(f, "pipe step must be 1, got {step}"),
            Self::NonFinitePhysics => write!(f, "gravity and flap velocity must be finite"),
            Self::ZeroFrameInterval => write!(f, "frame interval must be non-zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.bird_start_x, 10);
        assert!((config.bird_start_y - 150.0).abs() < f64::EPSILON);
        assert!((config.gravity - 0.15).abs() < f64::EPSILON);
        assert!((config.flap_velocity - (-6.0)).abs() < f64::EPSILON);
        assert_eq!(config.pipe_gap, 200);
        assert_eq!(config.min_pipe_height, 50);
        assert!(config.wait_for_first_flap);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert!(!GameConfig::immediate().wait_for_first_flap);
        assert_eq!(GameConfig::seeded(7).seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_oversized_gap() {
        let config = GameConfig {
            pipe_gap: 600,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::GapTooLarge {
                gap: 600,
                surface_height: 512
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_unit_step() {
        for step in [2, 4, 7, -1] {
            let config = GameConfig {
                pipe_step: step,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::NonUnitStep(step)));
        }
    }

    #[test]
    fn test_validate_rejects_bad_step_and_interval() {
        let config = GameConfig {
            pipe_step: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonUnitStep(0)));

        let config = GameConfig {
            frame_interval: Duration::ZERO,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameInterval));

        let config = GameConfig {
            gravity: f64::NAN,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NonFinitePhysics));
    }
}
