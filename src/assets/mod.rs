//! Image and sound resources.
//!
//! The simulation only needs two things from its assets: a signal that every
//! image is ready, and each image's pixel dimensions. [`gate::AssetGate`]
//! turns unordered completion reports into that single signal, and
//! [`loader::AssetLoader`] produces the reports.

pub mod error;
pub mod gate;
pub mod loader;
pub mod types;

pub use error::AssetError;
pub use gate::{AssetEvent, AssetGate, AssetStatus, GateTransition};
pub use loader::{AssetLoader, AssetSource};
pub use types::{Dimensions, ImageAsset, SoundClip, SpriteSheet};
