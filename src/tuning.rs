//! Data-driven game balance
//!
//! Every constant the simulation uses lives here so a match can be rebalanced
//! from a JSON file without recompiling. Missing fields fall back to defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Error raised when a tuning file cannot be used.
#[derive(Debug)]
pub enum TuningError {
    /// The file could not be read.
    Io {
        /// Path as given by the caller.
        path: String,
        source: std::io::Error,
    },
    /// The contents are not valid tuning JSON.
    Parse(serde_json::Error),
    /// A value is outside its usable range.
    Invalid {
        /// Field name (matches the JSON key).
        field: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io { path, source } => {
                write!(f, "failed to read tuning file '{}': {}", path, source)
            }
            TuningError::Parse(err) => write!(f, "invalid tuning JSON: {}", err),
            TuningError::Invalid {
                field,
                value,
                expected,
            } => write!(f, "tuning field '{}' = {} must be {}", field, value, expected),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io { source, .. } => Some(source),
            TuningError::Parse(err) => Some(err),
            TuningError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        TuningError::Parse(err)
    }
}

/// All balance constants for a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Planet ===
    /// Gravitational constant `G`
    pub gravity_constant: f32,
    /// Nominal planet mass (restored by "gravity on")
    pub planet_mass: f32,
    pub planet_radius: f32,
    /// Distance floor for the inverse-square law
    pub min_gravity_distance: f32,

    // === Ships ===
    pub ship_radius: f32,
    pub ship_mass: f32,
    pub ship_max_health: f32,
    /// Engine acceleration along the facing direction (px/s²)
    pub ship_thrust: f32,
    /// Rotation applied per tick while turning (degrees)
    pub ship_turn_step: f32,
    /// Distance from planet centre at round start
    pub orbit_radius: f32,
    /// Tangential speed at round start
    pub orbit_speed: f32,

    // === Torpedoes ===
    pub torpedo_radius: f32,
    pub torpedo_mass: f32,
    /// Forward speed added on top of the launcher's velocity
    pub torpedo_speed: f32,
    /// Seconds before the same ship can fire again
    pub torpedo_reload: f32,

    // === Damage ===
    pub planet_damage: f32,
    pub ship_damage: f32,
    pub torpedo_damage: f32,

    // === Rounds ===
    pub countdown_time: f32,
    pub round_over_time: f32,
    /// Show the countdown before every round, not only the first
    pub countdown_every_round: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            gravity_constant: 6.67428e-11,
            // G * M ≈ orbit_speed² * orbit_radius, which keeps the start orbit circular
            planet_mass: 5.034e16,
            planet_radius: 60.0,
            min_gravity_distance: 8.0,

            ship_radius: 16.0,
            ship_mass: 300.0,
            ship_max_health: 100.0,
            ship_thrust: 100.0,
            ship_turn_step: 3.0,
            orbit_radius: 336.0,
            orbit_speed: 100.0,

            torpedo_radius: 4.0,
            torpedo_mass: 300.0,
            torpedo_speed: 200.0,
            torpedo_reload: 4.0,

            planet_damage: 60.0,
            ship_damage: 40.0,
            torpedo_damage: 25.0,

            countdown_time: 5.0,
            round_over_time: 5.0,
            countdown_every_round: false,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check that every value is usable by the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("gravity_constant", self.gravity_constant),
            ("planet_radius", self.planet_radius),
            ("min_gravity_distance", self.min_gravity_distance),
            ("ship_radius", self.ship_radius),
            ("ship_mass", self.ship_mass),
            ("ship_max_health", self.ship_max_health),
            ("ship_turn_step", self.ship_turn_step),
            ("orbit_speed", self.orbit_speed),
            ("torpedo_radius", self.torpedo_radius),
            ("torpedo_speed", self.torpedo_speed),
            ("torpedo_reload", self.torpedo_reload),
            ("countdown_time", self.countdown_time),
            ("round_over_time", self.round_over_time),
        ];
        for (field, value) in positive {
            // written as a negation so NaN is rejected too
            if !(value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    value,
                    expected: "greater than zero",
                });
            }
        }

        let non_negative = [
            ("planet_mass", self.planet_mass),
            ("torpedo_mass", self.torpedo_mass),
            ("ship_thrust", self.ship_thrust),
            ("planet_damage", self.planet_damage),
            ("ship_damage", self.ship_damage),
            ("torpedo_damage", self.torpedo_damage),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    value,
                    expected: "zero or greater",
                });
            }
        }

        let clearance = self.planet_radius + self.ship_radius;
        if !(self.orbit_radius > clearance) {
            return Err(TuningError::Invalid {
                field: "orbit_radius",
                value: self.orbit_radius,
                expected: "larger than planet_radius + ship_radius",
            });
        }

        Ok(())
    }

    /// Tangential speed of a circular orbit at `orbit_radius` under the nominal planet
    pub fn circular_orbit_speed(&self) -> f32 {
        (self.gravity_constant * self.planet_mass / self.orbit_radius).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_default_orbit_is_circular() {
        let tuning = Tuning::default();
        let circular = tuning.circular_orbit_speed();
        assert!(
            (circular - tuning.orbit_speed).abs() / tuning.orbit_speed < 0.001,
            "circular speed {} vs insertion speed {}",
            circular,
            tuning.orbit_speed
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "torpedo_damage": 10.0 }"#).unwrap();
        assert_eq!(tuning.torpedo_damage, 10.0);
        assert_eq!(tuning.ship_max_health, Tuning::default().ship_max_health);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Tuning::from_json(r#"{ "ship_radius": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "ship_radius",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "ship_damage": -5.0 }"#).unwrap_err();
        assert!(err.to_string().contains("ship_damage"));

        let err = Tuning::from_json(r#"{ "orbit_radius": 50.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "orbit_radius",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Tuning::load("/nonexistent/spacewar-tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io { .. }));
    }
}
