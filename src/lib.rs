//! Skyward - a side-scrolling flap-through-the-pipes game for the terminal.
//!
//! The library exposes the simulation, asset pipeline and screens so the
//! binaries and integration tests share one implementation.

pub mod assets;
pub mod audio;
pub mod build_info;
pub mod core;
pub mod driver;
pub mod input;
pub mod logging;
pub mod simulator;
pub mod ui;
