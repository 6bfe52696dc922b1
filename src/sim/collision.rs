//! Per-tick collision pass
//!
//! Hazards are resolved in a fixed order: ship/planet, ship/ship,
//! torpedo/ship, torpedo/planet. A torpedo touching both a ship and the
//! planet therefore always hits the ship.

use super::ship::{DamageSource, Ship, ShipId};
use super::state::{Cue, GameEvent, GameState, Motor, Vibration};
use crate::tuning::Tuning;

/// Rumble for a ship hitting the planet
pub const PLANET_RUMBLE: (Motor, u16, f32) = (Motor::Left, 65535, 1.0);
/// Rumble for both pilots when ships collide
pub const SHIP_RUMBLE: (Motor, u16, f32) = (Motor::Right, 30000, 0.5);
/// Rumble for a pilot hit by a torpedo
pub const TORPEDO_RUMBLE: (Motor, u16, f32) = (Motor::Right, 20000, 0.5);

fn rumble(ship: ShipId, (motor, intensity, duration): (Motor, u16, f32)) -> GameEvent {
    GameEvent::Vibrate(Vibration {
        controller: ship.index(),
        motor,
        intensity,
        duration,
    })
}

/// Damage a ship and report what happened
fn hit(ship: &mut Ship, source: DamageSource, tuning: &Tuning, events: &mut Vec<GameEvent>) {
    if !ship.is_active() {
        return;
    }
    events.push(GameEvent::ShipHit {
        ship: ship.id,
        source,
    });
    if ship.damage(source, tuning) {
        if ship.engine_on {
            ship.set_engine_on(false);
            events.push(GameEvent::Cue(Cue::EngineOff(ship.id)));
        }
        events.push(GameEvent::ShipDestroyed { ship: ship.id });
    }
}

/// Resolve every overlap between active entities for this tick
pub fn resolve_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let GameState {
        tuning,
        planet,
        ships,
        torpedoes,
        ..
    } = state;

    // Ships against the planet: step back out and take damage
    for ship in ships.iter_mut() {
        if ship.body.collides_with(&planet.body).is_some() {
            ship.body.to_old_position();
            log::debug!("{:?} hit the planet", ship.id);
            hit(ship, DamageSource::Planet, tuning, events);
            events.push(rumble(ship.id, PLANET_RUMBLE));
        }
    }

    // Ships against each other: bounce on pre-collision velocities, both take damage
    let [one, two] = &mut *ships;
    if let Some(normal) = one.body.collides_with(&two.body) {
        let (before_one, before_two) = (one.body, two.body);
        one.body.bounce(normal, &before_two);
        two.body.bounce(-normal, &before_one);
        log::debug!("Ships collided");

        hit(one, DamageSource::Ship, tuning, events);
        hit(two, DamageSource::Ship, tuning, events);
        events.push(rumble(one.id, SHIP_RUMBLE));
        events.push(rumble(two.id, SHIP_RUMBLE));
    }

    // Torpedoes against the opponent of whoever fired them
    for torpedo in torpedoes.iter_mut() {
        let Some(launcher) = torpedo.launcher else {
            continue;
        };
        let target = &mut ships[launcher.opponent().index()];
        if torpedo.body.collides_with(&target.body).is_some() {
            torpedo.deactivate();
            log::debug!("{:?} torpedo hit {:?}", launcher, target.id);
            hit(target, DamageSource::Torpedo, tuning, events);
            events.push(rumble(target.id, TORPEDO_RUMBLE));
        }
    }

    // Torpedoes against the planet
    for torpedo in torpedoes.iter_mut() {
        if torpedo.body.collides_with(&planet.body).is_some() {
            torpedo.deactivate();
            events.push(GameEvent::Cue(Cue::TorpedoCrash));
        }
    }
}
