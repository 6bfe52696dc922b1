//! The planet: a fixed gravity source in the middle of the arena

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::tuning::Tuning;

/// Fixed gravity source with a solid surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    /// Collision shape; `body.active` doubles as the enabled flag
    pub body: Body,
    /// Mass restored when gravity is switched back on
    pub nominal_mass: f32,
    /// Gravitational constant `G`
    pub gravity_constant: f32,
    /// Distance floor for the inverse-square law
    pub min_distance: f32,
}

impl Planet {
    pub fn new(tuning: &Tuning) -> Self {
        let mut body = Body::new(tuning.planet_radius, tuning.planet_mass);
        body.pos = Vec2::new(tuning.arena_width / 2.0, tuning.arena_height / 2.0);
        body.old_pos = body.pos;
        Self {
            body,
            nominal_mass: tuning.planet_mass,
            gravity_constant: tuning.gravity_constant,
            min_distance: tuning.min_gravity_distance,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.body.pos
    }

    pub fn mass(&self) -> f32 {
        self.body.mass
    }

    pub fn is_enabled(&self) -> bool {
        self.body.active
    }

    /// A disabled planet neither attracts nor collides
    pub fn set_enabled(&mut self, enabled: bool) {
        self.body.active = enabled;
        self.body.visible = enabled;
    }

    /// Switch gravity off (mass 0) or back to the nominal mass; collisions are unaffected
    pub fn set_gravity(&mut self, on: bool) {
        self.body.mass = if on { self.nominal_mass } else { 0.0 };
    }

    pub fn gravity_on(&self) -> bool {
        self.body.mass > 0.0
    }

    /// Gravitational acceleration felt at `pos`.
    ///
    /// `G * M / d²` toward the centre, with `d` floored at `min_distance`.
    /// Zero when the planet is disabled or massless.
    pub fn acceleration_at(&self, pos: Vec2) -> Vec2 {
        if !self.body.active || self.body.mass <= 0.0 {
            return Vec2::ZERO;
        }
        let offset = self.body.pos - pos;
        let distance = offset.length().max(self.min_distance);
        let magnitude = self.gravity_constant * self.body.mass / (distance * distance);
        offset.normalize_or_zero() * magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_planet_starts_at_arena_center() {
        let planet = Planet::new(&Tuning::default());
        assert_eq!(planet.center(), Vec2::new(640.0, 360.0));
        assert!(planet.is_enabled());
        assert!(planet.gravity_on());
    }

    #[test]
    fn test_inverse_square_falloff() {
        let planet = Planet::new(&Tuning::default());
        let near = planet.acceleration_at(planet.center() + Vec2::new(100.0, 0.0));
        let far = planet.acceleration_at(planet.center() + Vec2::new(200.0, 0.0));

        // Points back toward the centre
        assert!(near.x < 0.0 && near.y.abs() < 1e-6);
        assert!((near.length() / far.length() - 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_distance_floor_prevents_singularity() {
        let planet = Planet::new(&Tuning::default());
        let at_center = planet.acceleration_at(planet.center());
        assert!(at_center.is_finite());

        let close = planet.acceleration_at(planet.center() + Vec2::new(0.001, 0.0));
        let floor = planet.acceleration_at(planet.center() + Vec2::new(planet.min_distance, 0.0));
        assert!(close.is_finite());
        assert!((close.length() - floor.length()).abs() / floor.length() < 1e-4);
    }

    #[test]
    fn test_gravity_toggle_restores_nominal_mass() {
        let mut planet = Planet::new(&Tuning::default());
        planet.set_gravity(false);
        assert_eq!(planet.mass(), 0.0);
        assert_eq!(planet.acceleration_at(Vec2::ZERO), Vec2::ZERO);
        // Still solid
        assert!(planet.is_enabled());

        planet.set_gravity(true);
        assert_eq!(planet.mass(), planet.nominal_mass);
    }

    #[test]
    fn test_disabled_planet_is_inert() {
        let mut planet = Planet::new(&Tuning::default());
        planet.set_enabled(false);
        assert_eq!(planet.acceleration_at(Vec2::ZERO), Vec2::ZERO);

        let mut probe = Body::new(5.0, 1.0);
        probe.pos = planet.center();
        assert!(probe.collides_with(&planet.body).is_none());
    }

    proptest! {
        #[test]
        fn prop_inert_planet_never_changes_velocity(
            x in 0.0f32..1280.0, y in 0.0f32..720.0,
            vx in -300.0f32..300.0, vy in -300.0f32..300.0,
            disable in any::<bool>(),
        ) {
            let mut planet = Planet::new(&Tuning::default());
            if disable {
                planet.set_enabled(false);
            } else {
                planet.set_gravity(false);
            }

            let mut body = Body::new(16.0, 300.0);
            body.pos = Vec2::new(x, y);
            body.vel = Vec2::new(vx, vy);
            body.apply_gravity(&planet, 1.0 / 60.0);
            prop_assert_eq!(body.vel, Vec2::new(vx, vy));
        }

        #[test]
        fn prop_massless_body_ignores_gravity(x in 0.0f32..1280.0, y in 0.0f32..720.0) {
            let planet = Planet::new(&Tuning::default());
            let mut body = Body::new(4.0, 0.0);
            body.pos = Vec2::new(x, y);
            body.apply_gravity(&planet, 1.0 / 60.0);
            prop_assert_eq!(body.vel, Vec2::ZERO);
        }
    }
}
