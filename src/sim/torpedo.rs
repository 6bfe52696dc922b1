//! Torpedoes: one per ship, reloaded on a fixed cooldown

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::ship::{Ship, ShipId};
use crate::tuning::Tuning;

/// A torpedo slot belonging to one ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Torpedo {
    pub body: Body,
    /// Ship that fired the torpedo currently in flight
    pub launcher: Option<ShipId>,
    /// Seconds until the launcher may fire again
    pub cooldown: f32,
}

impl Torpedo {
    /// A spent torpedo, ready to fire
    pub fn new(tuning: &Tuning) -> Self {
        let mut body = Body::new(tuning.torpedo_radius, tuning.torpedo_mass);
        body.active = false;
        body.visible = false;
        Self {
            body,
            launcher: None,
            cooldown: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.body.active
    }

    pub fn can_fire(&self) -> bool {
        self.cooldown <= 0.0
    }

    /// Launch from the nose of `launcher`.
    ///
    /// The torpedo inherits the launcher's velocity plus `torpedo_speed` along its
    /// heading. Returns false (and does nothing) while reloading or when the
    /// launcher is out of play.
    pub fn fire(&mut self, launcher: &Ship, tuning: &Tuning) -> bool {
        if !self.can_fire() || !launcher.is_active() {
            return false;
        }

        let facing = launcher.facing();
        let nose = launcher.body.pos + facing * (launcher.body.radius + self.body.radius);

        self.body.pos = nose;
        self.body.old_pos = nose;
        self.body.vel = launcher.body.vel + facing * tuning.torpedo_speed;
        self.body.rotation = launcher.body.rotation;
        self.body.active = true;
        self.body.visible = true;
        self.cooldown = tuning.torpedo_reload;
        self.launcher = Some(launcher.id);

        log::debug!("{:?} fired torpedo from {:?}", launcher.id, nose);
        true
    }

    /// Take the torpedo out of play (hit something or expired)
    pub fn deactivate(&mut self) {
        self.body.active = false;
        self.body.visible = false;
    }

    /// Count down the reload, move, and expire once the reload completes
    pub fn update(&mut self, dt: f32, tuning: &Tuning) {
        self.cooldown = (self.cooldown - dt).max(0.0);
        if !self.body.active {
            return;
        }

        self.body.integrate(dt);
        self.wrap_around(tuning.arena_width, tuning.arena_height);

        if self.cooldown <= 0.0 {
            self.deactivate();
        }
    }

    /// Leaving one edge re-enters from the opposite one
    fn wrap_around(&mut self, width: f32, height: f32) {
        let r = self.body.radius;
        let pos = &mut self.body.pos;
        let before = *pos;

        if pos.x < -r {
            pos.x = width + r;
        } else if pos.x > width + r {
            pos.x = -r;
        }
        if pos.y < -r {
            pos.y = height + r;
        } else if pos.y > height + r {
            pos.y = -r;
        }

        // A wrap is a teleport, not a move
        if *pos != before {
            self.body.old_pos = *pos;
        }
    }
}
