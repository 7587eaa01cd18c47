//! Core simulation: bird, pipes, collisions and the session state machine.
//!
//! Nothing in here touches the terminal, the clock or the filesystem. The
//! driver owns a [`Session`] and calls [`tick`] once per frame.

pub mod bird;
pub mod collision;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod obstacles;
pub mod session;
pub mod tick;

pub use bird::Bird;
pub use collision::{evaluate, CrashCause, Evaluation};
pub use config::{ConfigError, GameConfig};
pub use geometry::Rect;
pub use obstacles::{ObstacleLayout, ObstaclePair, ObstacleQueue};
pub use session::{Phase, Session};
pub use tick::{tick, TickEvent};
