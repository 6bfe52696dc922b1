//! Read-only view of a session for the presentation layer

use glam::Vec2;
use serde::Serialize;

use super::ship::ShipId;
use super::state::{GameState, RoundPhase};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipView {
    pub id: ShipId,
    pub pos: Vec2,
    pub rotation: f32,
    pub visible: bool,
    pub health: f32,
    /// Health as a 0-1 fraction (for the health bar)
    pub health_fraction: f32,
    pub engine_on: bool,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TorpedoView {
    pub owner: ShipId,
    pub pos: Vec2,
    pub rotation: f32,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetView {
    pub pos: Vec2,
    pub radius: f32,
    pub visible: bool,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: RoundPhase,
    pub round: u32,
    /// Whole seconds left on the countdown, shown only while counting down
    pub countdown: Option<u32>,
    pub ships: [ShipView; 2],
    pub torpedoes: [TorpedoView; 2],
    pub planet: PlanetView,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        let countdown = (self.round.phase == RoundPhase::Countdown)
            .then(|| self.round.countdown_timer.max(0.0).ceil() as u32);

        let ships = ShipId::ALL.map(|id| {
            let ship = self.ship(id);
            ShipView {
                id,
                pos: ship.body.pos,
                rotation: ship.body.rotation,
                visible: ship.body.visible,
                health: ship.health,
                health_fraction: ship.health_fraction(),
                engine_on: ship.engine_on,
                score: self.round.score(id),
            }
        });

        let torpedoes = ShipId::ALL.map(|owner| {
            let torpedo = self.torpedo(owner);
            TorpedoView {
                owner,
                pos: torpedo.body.pos,
                rotation: torpedo.body.rotation,
                visible: torpedo.body.visible,
            }
        });

        Snapshot {
            phase: self.round.phase,
            round: self.round.round,
            countdown,
            ships,
            torpedoes,
            planet: PlanetView {
                pos: self.planet.center(),
                radius: self.planet.body.radius,
                visible: self.planet.body.visible,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::tick::{TickInput, tick};

    #[test]
    fn test_menu_snapshot_has_no_countdown() {
        let state = GameState::default();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.phase, RoundPhase::Menu);
        assert_eq!(snapshot.countdown, None);
        assert!(snapshot.ships.iter().all(|s| s.visible && s.health_fraction == 1.0));
        assert!(snapshot.torpedoes.iter().all(|t| !t.visible));
    }

    #[test]
    fn test_countdown_rounds_up() {
        let mut state = GameState::default();
        let start = TickInput {
            any_key: true,
            ..Default::default()
        };
        tick(&mut state, &start, SIM_DT);
        assert_eq!(state.snapshot().countdown, Some(5));

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.snapshot().countdown, Some(5));

        state.round.countdown_timer = 0.2;
        assert_eq!(state.snapshot().countdown, Some(1));
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let state = GameState::default();
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["phase"], "Menu");
        assert_eq!(json["ships"][0]["id"], "One");
        assert_eq!(json["planet"]["radius"], 60.0);
    }
}
