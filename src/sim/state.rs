//! Game state and round life-cycle
//!
//! `RoundState` is the only place that changes the phase or the scores; every
//! other part of the simulation reports what happened through `GameEvent`s and
//! return values.

use serde::{Deserialize, Serialize};

use super::planet::Planet;
use super::ship::{DamageSource, Ship, ShipId};
use super::torpedo::Torpedo;
use crate::tuning::Tuning;

/// Current phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Title screen, nothing moves until a key is pressed
    Menu,
    /// Ships orbit but ignore controls
    Countdown,
    /// Active combat
    Playing,
    /// A ship was destroyed; the next round starts when the timer runs out
    RoundOver,
}

/// Audio cues (fire-and-forget)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    EngineOn(ShipId),
    EngineOff(ShipId),
    /// Torpedo hit the planet
    TorpedoCrash,
}

/// Controller rumble motor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motor {
    /// Heavy, low frequency
    Left,
    /// Light, high frequency
    Right,
}

/// Controller vibration request (fire-and-forget)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vibration {
    /// Controller number (same as the ship index)
    pub controller: usize,
    pub motor: Motor,
    /// 0 = off, 65535 = full
    pub intensity: u16,
    /// Seconds
    pub duration: f32,
}

/// Something the host may want to react to, emitted in tick order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: RoundPhase, to: RoundPhase },
    RoundStarted { round: u32 },
    TorpedoFired { ship: ShipId },
    ShipHit { ship: ShipId, source: DamageSource },
    ShipDestroyed { ship: ShipId },
    Scored { ship: ShipId, score: u32 },
    Cue(Cue),
    Vibrate(Vibration),
}

/// Phase, timers and scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: RoundPhase,
    /// Seconds left before play starts (Countdown only)
    pub countdown_timer: f32,
    /// Seconds left before the next round (RoundOver only)
    pub round_over_timer: f32,
    /// Score per ship, indexed by `ShipId::index`
    pub scores: [u32; 2],
    /// Whether a ship's destruction this round has already been scored
    pub destruction_credited: [bool; 2],
    /// Rounds started so far (1 = first round)
    pub round: u32,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::Menu,
            countdown_timer: 0.0,
            round_over_timer: 0.0,
            scores: [0; 2],
            destruction_credited: [false; 2],
            round: 0,
        }
    }

    pub fn score(&self, ship: ShipId) -> u32 {
        self.scores[ship.index()]
    }

    fn set_phase(&mut self, to: RoundPhase, events: &mut Vec<GameEvent>) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        log::info!("Phase {:?} -> {:?}", from, to);
        events.push(GameEvent::PhaseChanged { from, to });
    }

    /// Start a round, with a countdown or straight into play
    pub fn begin_round(&mut self, countdown: Option<f32>, events: &mut Vec<GameEvent>) {
        self.round += 1;
        self.destruction_credited = [false; 2];
        self.round_over_timer = 0.0;
        log::info!(
            "Round {} starting (score {} - {})",
            self.round,
            self.scores[0],
            self.scores[1]
        );
        events.push(GameEvent::RoundStarted { round: self.round });

        match countdown {
            Some(seconds) => {
                self.countdown_timer = seconds;
                self.set_phase(RoundPhase::Countdown, events);
            }
            None => {
                self.countdown_timer = 0.0;
                self.set_phase(RoundPhase::Playing, events);
            }
        }
    }

    /// Run the countdown; play starts once it reaches zero
    pub fn advance_countdown(&mut self, dt: f32, events: &mut Vec<GameEvent>) {
        if self.phase != RoundPhase::Countdown {
            return;
        }
        self.countdown_timer -= dt;
        if self.countdown_timer <= 0.0 {
            self.countdown_timer = 0.0;
            self.set_phase(RoundPhase::Playing, events);
        }
    }

    /// Run the round-over timer; returns true when the next round is due
    pub fn advance_round_over(&mut self, dt: f32) -> bool {
        if self.phase != RoundPhase::RoundOver {
            return false;
        }
        self.round_over_timer -= dt;
        self.round_over_timer <= 0.0
    }

    /// Award the opponent of a destroyed ship, once per round.
    ///
    /// The first destruction of a round also starts the round-over timer.
    /// Returns true if a point was awarded.
    pub fn credit_destruction(
        &mut self,
        destroyed: ShipId,
        round_over_time: f32,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        if self.destruction_credited[destroyed.index()] {
            return false;
        }
        self.destruction_credited[destroyed.index()] = true;

        let winner = destroyed.opponent();
        self.scores[winner.index()] += 1;
        let score = self.scores[winner.index()];
        log::info!("{:?} scores ({} point(s))", winner, score);
        events.push(GameEvent::Scored {
            ship: winner,
            score,
        });

        if self.phase != RoundPhase::RoundOver {
            self.round_over_timer = round_over_time;
            self.set_phase(RoundPhase::RoundOver, events);
        }
        true
    }
}

/// Everything in one session: entities, round state and balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub round: RoundState,
    pub planet: Planet,
    /// Indexed by `ShipId::index`
    pub ships: [Ship; 2],
    /// Torpedo `i` belongs to ship `i`
    pub torpedoes: [Torpedo; 2],
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// New session at the menu, ships already circling the planet
    pub fn new(tuning: Tuning) -> Self {
        let planet = Planet::new(&tuning);
        let mut ships = ShipId::ALL.map(|id| Ship::new(id, &tuning));
        for ship in &mut ships {
            ship.place_in_orbit(planet.center(), &tuning);
        }
        let torpedoes = [Torpedo::new(&tuning), Torpedo::new(&tuning)];

        Self {
            tuning,
            round: RoundState::new(),
            planet,
            ships,
            torpedoes,
            time_ticks: 0,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase
    }

    pub fn ship(&self, id: ShipId) -> &Ship {
        &self.ships[id.index()]
    }

    pub fn ship_mut(&mut self, id: ShipId) -> &mut Ship {
        &mut self.ships[id.index()]
    }

    pub fn torpedo(&self, owner: ShipId) -> &Torpedo {
        &self.torpedoes[owner.index()]
    }

    /// Reset both ships into the starting orbit at full health and start a round.
    ///
    /// Only the first round counts down unless `countdown_every_round` is set.
    pub fn round_start(&mut self, events: &mut Vec<GameEvent>) {
        let center = self.planet.center();
        for ship in &mut self.ships {
            if ship.engine_on {
                events.push(GameEvent::Cue(Cue::EngineOff(ship.id)));
            }
            ship.place_in_orbit(center, &self.tuning);
            ship.repair();
        }

        let countdown = (self.round.round == 0 || self.tuning.countdown_every_round)
            .then_some(self.tuning.countdown_time);
        self.round.begin_round(countdown, events);
    }
}
