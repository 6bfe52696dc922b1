//! Player ships: health, engine, discrete turning and orbit insertion

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::tuning::Tuning;
use crate::{heading, normalize_degrees};

/// Handle identifying one of the two ships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipId {
    One,
    Two,
}

impl ShipId {
    pub const ALL: [ShipId; 2] = [ShipId::One, ShipId::Two];

    /// Slot in per-ship arrays (also the controller number)
    pub fn index(self) -> usize {
        match self {
            ShipId::One => 0,
            ShipId::Two => 1,
        }
    }

    pub fn opponent(self) -> ShipId {
        match self {
            ShipId::One => ShipId::Two,
            ShipId::Two => ShipId::One,
        }
    }
}

/// Turning command for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Turn {
    #[default]
    None,
    Left,
    Right,
}

/// What hit a ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageSource {
    Planet,
    Ship,
    Torpedo,
}

impl DamageSource {
    pub fn amount(self, tuning: &Tuning) -> f32 {
        match self {
            DamageSource::Planet => tuning.planet_damage,
            DamageSource::Ship => tuning.ship_damage,
            DamageSource::Torpedo => tuning.torpedo_damage,
        }
    }
}

/// A player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub id: ShipId,
    pub body: Body,
    /// Always within [0, max_health]
    pub health: f32,
    pub max_health: f32,
    pub engine_on: bool,
    pub turn: Turn,
}

impl Ship {
    pub fn new(id: ShipId, tuning: &Tuning) -> Self {
        Self {
            id,
            body: Body::new(tuning.ship_radius, tuning.ship_mass),
            health: tuning.ship_max_health,
            max_health: tuning.ship_max_health,
            engine_on: false,
            turn: Turn::None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.body.active
    }

    pub fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 {
            self.health / self.max_health
        } else {
            0.0
        }
    }

    /// Nose of the ship (where torpedoes leave)
    pub fn facing(&self) -> Vec2 {
        heading(self.body.rotation)
    }

    /// Apply damage from `source`.
    ///
    /// Returns true if this hit destroyed the ship. Already destroyed ships
    /// are left untouched.
    pub fn damage(&mut self, source: DamageSource, tuning: &Tuning) -> bool {
        if !self.body.active {
            return false;
        }
        self.health = (self.health - source.amount(tuning)).clamp(0.0, self.max_health);
        if self.health <= 0.0 {
            self.body.active = false;
            self.body.visible = false;
            log::debug!("{:?} destroyed by {:?}", self.id, source);
            return true;
        }
        false
    }

    /// Full health and back in play (round start only)
    pub fn repair(&mut self) {
        self.health = self.max_health;
        self.body.active = true;
        self.body.visible = true;
    }

    pub fn rotate(&mut self, turn: Turn) {
        self.turn = turn;
    }

    pub fn set_engine_on(&mut self, on: bool) {
        self.engine_on = on;
    }

    /// Put the ship into the stable starting orbit.
    ///
    /// Ship one sits left of the planet heading up, ship two right of it heading
    /// down; both circle clockwise on screen.
    pub fn place_in_orbit(&mut self, planet_center: Vec2, tuning: &Tuning) {
        let (side, rotation) = match self.id {
            ShipId::One => (-1.0, 0.0),
            ShipId::Two => (1.0, 180.0),
        };
        self.body.pos = planet_center + Vec2::new(side * tuning.orbit_radius, 0.0);
        self.body.old_pos = self.body.pos;
        self.body.vel = Vec2::new(0.0, side * tuning.orbit_speed);
        self.body.rotation = rotation;
        self.turn = Turn::None;
        self.engine_on = false;
    }

    /// Turn, thrust, move, then bounce off the arena edges
    pub fn update(&mut self, dt: f32, tuning: &Tuning) {
        if !self.body.active {
            return;
        }

        // One fixed step per tick, independent of dt
        match self.turn {
            Turn::None => {}
            Turn::Left => self.body.rotation -= tuning.ship_turn_step,
            Turn::Right => self.body.rotation += tuning.ship_turn_step,
        }
        self.body.rotation = normalize_degrees(self.body.rotation);

        if self.engine_on {
            self.body.vel += self.facing() * tuning.ship_thrust * dt;
        }

        self.body.integrate(dt);
        self.bounce_off_walls(tuning.arena_width, tuning.arena_height);
    }

    fn bounce_off_walls(&mut self, width: f32, height: f32) {
        let r = self.body.radius;
        let body = &mut self.body;

        if body.pos.x - r < 0.0 {
            body.pos.x = r;
            body.vel.x = body.vel.x.abs();
        } else if body.pos.x + r > width {
            body.pos.x = width - r;
            body.vel.x = -body.vel.x.abs();
        }

        if body.pos.y - r < 0.0 {
            body.pos.y = r;
            body.vel.y = body.vel.y.abs();
        } else if body.pos.y + r > height {
            body.pos.y = height - r;
            body.vel.y = -body.vel.y.abs();
        }
    }
}
