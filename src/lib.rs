//! Spacewar - two ships, one planet, unlimited rounds
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, collisions, round state machine)
//! - `tuning`: Data-driven game balance
//! - `settings`: Host preferences toggled from the console
//! - `console`: Administrative console commands

pub mod console;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use console::ConsoleCommand;
pub use settings::Settings;
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per displayed frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Number of ships (and torpedoes) in a match
    pub const SHIP_COUNT: usize = 2;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit facing vector for a rotation in degrees.
///
/// 0° points up (north) and angles grow clockwise on screen, where y grows downward.
#[inline]
pub fn heading(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.sin(), -radians.cos())
}
