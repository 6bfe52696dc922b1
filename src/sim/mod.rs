//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-supplied timestep only, no clock reads
//! - No randomness
//! - Fixed evaluation order (ship one before ship two, hazards in priority order)
//! - No rendering, audio or input dependencies; those are reported as events

pub mod body;
pub mod collision;
pub mod planet;
pub mod ship;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod torpedo;

pub use body::Body;
pub use collision::resolve_collisions;
pub use planet::Planet;
pub use ship::{DamageSource, Ship, ShipId, Turn};
pub use snapshot::{PlanetView, ShipView, Snapshot, TorpedoView};
pub use state::{Cue, GameEvent, GameState, Motor, RoundPhase, RoundState, Vibration};
pub use tick::{ShipControls, TickInput, tick};
pub use torpedo::Torpedo;
