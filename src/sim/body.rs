//! Shared physics state for everything that moves (or could)
//!
//! Ships, torpedoes and the planet all embed a [`Body`]. Type-specific data
//! (health, reload timers) stays on the owning type.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::planet::Planet;

/// Position, velocity and collision shape of one entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Centre position
    pub pos: Vec2,
    /// Position before the last integration step
    pub old_pos: Vec2,
    pub vel: Vec2,
    /// Facing, degrees clockwise from north
    pub rotation: f32,
    pub mass: f32,
    /// Collision circle radius
    pub radius: f32,
    /// Takes part in gravity, collisions and control
    pub active: bool,
    /// Drawn by the presentation layer
    pub visible: bool,
}

impl Body {
    pub fn new(radius: f32, mass: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            old_pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            rotation: 0.0,
            mass,
            radius,
            active: true,
            visible: true,
        }
    }

    /// Pull this body toward the planet.
    ///
    /// No-op when either side is inactive or massless.
    pub fn apply_gravity(&mut self, source: &Planet, dt: f32) {
        if !self.active || self.mass <= 0.0 {
            return;
        }
        self.vel += source.acceleration_at(self.pos) * dt;
    }

    /// Advance position by one step, remembering where we came from
    pub fn integrate(&mut self, dt: f32) {
        self.old_pos = self.pos;
        self.pos += self.vel * dt;
    }

    /// Circle-circle overlap test.
    ///
    /// Returns the unit normal pointing from `other` toward `self` when both
    /// bodies are active and overlapping.
    pub fn collides_with(&self, other: &Body) -> Option<Vec2> {
        if !self.active || !other.active {
            return None;
        }
        let offset = self.pos - other.pos;
        let reach = self.radius + other.radius;
        if offset.length_squared() < reach * reach {
            Some(offset.normalize_or_zero())
        } else {
            None
        }
    }

    /// Undo the last integration step
    pub fn to_old_position(&mut self) {
        self.pos = self.old_pos;
    }

    /// Arcade bounce off `other` along `normal` (pointing from `other` toward `self`).
    ///
    /// Velocity is exchanged along the normal in proportion to the other body's
    /// share of the total mass, so equal masses swap their normal components and
    /// the heavier body is deflected less. If the pair is already separating
    /// (a previous bounce left them overlapping), `self` is pushed out along the
    /// normal instead.
    pub fn bounce(&mut self, normal: Vec2, other: &Body) {
        let normal = normal.normalize_or_zero();
        if normal == Vec2::ZERO {
            return;
        }

        let total_mass = self.mass + other.mass;
        let mass_ratio = if total_mass > 0.0 {
            2.0 * other.mass / total_mass
        } else {
            // Massless pair: full reflection
            2.0
        };

        // Positive when `other` closes in on `self`
        let closing = normal.dot(other.vel - self.vel);
        if closing > 0.0 {
            self.vel += normal * closing * mass_ratio;
        } else {
            self.pos += normal * mass_ratio;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body_at(x: f32, y: f32, radius: f32) -> Body {
        let mut body = Body::new(radius, 1.0);
        body.pos = Vec2::new(x, y);
        body.old_pos = body.pos;
        body
    }

    #[test]
    fn test_integrate_records_old_position() {
        let mut body = body_at(10.0, 20.0, 4.0);
        body.vel = Vec2::new(60.0, -30.0);

        body.integrate(0.5);
        assert_eq!(body.old_pos, Vec2::new(10.0, 20.0));
        assert_eq!(body.pos, Vec2::new(40.0, 5.0));

        body.to_old_position();
        assert_eq!(body.pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_collision_normal_points_away_from_other() {
        let a = body_at(0.0, 0.0, 10.0);
        let b = body_at(15.0, 0.0, 10.0);

        let normal = a.collides_with(&b).expect("overlapping circles collide");
        assert!(normal.abs_diff_eq(Vec2::new(-1.0, 0.0), 1e-6));

        let far = body_at(25.0, 0.0, 10.0);
        assert!(a.collides_with(&far).is_none());
    }

    #[test]
    fn test_inactive_bodies_never_collide() {
        let a = body_at(0.0, 0.0, 10.0);
        let mut b = body_at(1.0, 0.0, 10.0);
        b.active = false;

        assert!(a.collides_with(&b).is_none());
        assert!(b.collides_with(&a).is_none());
    }

    #[test]
    fn test_equal_mass_head_on_bounce_swaps_velocity() {
        let mut a = body_at(0.0, 0.0, 10.0);
        let mut b = body_at(15.0, 0.0, 10.0);
        a.vel = Vec2::new(50.0, 0.0);
        b.vel = Vec2::new(-20.0, 0.0);

        let normal = a.collides_with(&b).unwrap();
        let (before_a, before_b) = (a, b);
        a.bounce(normal, &before_b);
        b.bounce(-normal, &before_a);

        assert!(a.vel.abs_diff_eq(Vec2::new(-20.0, 0.0), 1e-4));
        assert!(b.vel.abs_diff_eq(Vec2::new(50.0, 0.0), 1e-4));
    }

    #[test]
    fn test_bounce_conserves_momentum_with_unequal_masses() {
        let mut light = body_at(0.0, 0.0, 10.0);
        let mut heavy = body_at(12.0, 5.0, 10.0);
        light.mass = 1.0;
        heavy.mass = 4.0;
        light.vel = Vec2::new(30.0, 10.0);
        heavy.vel = Vec2::new(-5.0, 0.0);

        let momentum = light.vel * light.mass + heavy.vel * heavy.mass;
        let normal = light.collides_with(&heavy).unwrap();
        let (before_light, before_heavy) = (light, heavy);
        light.bounce(normal, &before_heavy);
        heavy.bounce(-normal, &before_light);

        let after = light.vel * light.mass + heavy.vel * heavy.mass;
        assert!(after.abs_diff_eq(momentum, 1e-3));
        // Heavier body changes speed less
        let light_change = (light.vel - before_light.vel).length();
        let heavy_change = (heavy.vel - before_heavy.vel).length();
        assert!(heavy_change < light_change);
    }

    #[test]
    fn test_separating_overlap_pushes_apart() {
        let mut a = body_at(0.0, 0.0, 10.0);
        let b = body_at(15.0, 0.0, 10.0);
        a.vel = Vec2::new(-10.0, 0.0);

        let normal = a.collides_with(&b).unwrap();
        a.bounce(normal, &b);

        assert_eq!(a.vel, Vec2::new(-10.0, 0.0));
        assert!(a.pos.x < 0.0);
    }

    #[test]
    fn test_massless_bounce_fully_reflects() {
        let mut a = body_at(0.0, 0.0, 10.0);
        let mut b = body_at(15.0, 0.0, 10.0);
        a.mass = 0.0;
        b.mass = 0.0;
        a.vel = Vec2::new(30.0, 0.0);

        let normal = a.collides_with(&b).unwrap();
        a.bounce(normal, &b);

        // Approach speed comes straight back out along the normal
        assert!(a.vel.abs_diff_eq(Vec2::new(-30.0, 0.0), 1e-4));
    }

    proptest! {
        #[test]
        fn prop_collision_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            ra in 1.0f32..100.0, rb in 1.0f32..100.0,
        ) {
            let a = body_at(ax, ay, ra);
            let b = body_at(bx, by, rb);

            let ab = a.collides_with(&b);
            let ba = b.collides_with(&a);
            prop_assert_eq!(ab.is_some(), ba.is_some());
            if let (Some(n1), Some(n2)) = (ab, ba) {
                prop_assert!((n1 + n2).length() < 1e-5);
            }
        }
    }
}
