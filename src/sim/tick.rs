//! Fixed timestep simulation tick
//!
//! Core game loop that advances the match by one host-supplied timestep.

use serde::{Deserialize, Serialize};

use super::collision::resolve_collisions;
use super::ship::{ShipId, Turn};
use super::state::{Cue, GameEvent, GameState, RoundPhase};
use crate::consts::SHIP_COUNT;

/// One pilot's buttons for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipControls {
    pub thrust: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl ShipControls {
    /// Right wins when both turn buttons are held
    pub fn turn(&self) -> Turn {
        if self.right {
            Turn::Right
        } else if self.left {
            Turn::Left
        } else {
            Turn::None
        }
    }
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Controls per ship, indexed by `ShipId::index`
    pub ships: [ShipControls; SHIP_COUNT],
    /// Any key at all (leaves the menu)
    pub any_key: bool,
}

impl TickInput {
    pub fn controls(&self, ship: ShipId) -> ShipControls {
        self.ships[ship.index()]
    }
}

/// Advance the game state by one timestep and return what happened
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match state.phase() {
        RoundPhase::Menu => {
            // Nothing moves behind the menu
            if input.any_key {
                state.round_start(&mut events);
            }
            return events;
        }
        RoundPhase::Countdown => state.round.advance_countdown(dt, &mut events),
        RoundPhase::Playing => apply_controls(state, input, &mut events),
        RoundPhase::RoundOver => {
            // The survivor keeps flying until the next round
            apply_controls(state, input, &mut events);
            if state.round.advance_round_over(dt) {
                state.round_start(&mut events);
            }
        }
    }

    state.time_ticks += 1;
    step_physics(state, dt);
    resolve_collisions(state, &mut events);

    // Score any ship that is out of play; RoundState ignores repeats
    let round_over_time = state.tuning.round_over_time;
    for id in ShipId::ALL {
        if !state.ship(id).is_active() {
            state
                .round
                .credit_destruction(id, round_over_time, &mut events);
        }
    }

    events
}

/// Engine, turning and fire for every ship still in play
fn apply_controls(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let GameState {
        tuning,
        ships,
        torpedoes,
        ..
    } = state;

    for (ship, torpedo) in ships.iter_mut().zip(torpedoes.iter_mut()) {
        if !ship.is_active() {
            continue;
        }
        let controls = input.controls(ship.id);

        if controls.thrust != ship.engine_on {
            events.push(GameEvent::Cue(if controls.thrust {
                Cue::EngineOn(ship.id)
            } else {
                Cue::EngineOff(ship.id)
            }));
        }
        ship.set_engine_on(controls.thrust);
        ship.rotate(controls.turn());

        if controls.fire && torpedo.fire(ship, tuning) {
            events.push(GameEvent::TorpedoFired { ship: ship.id });
        }
    }
}

/// Gravity for every body, then integrate
fn step_physics(state: &mut GameState, dt: f32) {
    let GameState {
        tuning,
        planet,
        ships,
        torpedoes,
        ..
    } = state;

    for ship in ships.iter_mut() {
        ship.body.apply_gravity(planet, dt);
    }
    for torpedo in torpedoes.iter_mut() {
        torpedo.body.apply_gravity(planet, dt);
    }

    for ship in ships.iter_mut() {
        ship.update(dt, tuning);
    }
    for torpedo in torpedoes.iter_mut() {
        torpedo.update(dt, tuning);
    }
}
