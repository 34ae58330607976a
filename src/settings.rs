//! Game tuning
//!
//! Every gameplay number lives here so rounds can be rebalanced without a
//! rebuild. Persisted under its own storage key.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::{self, Storage};
use crate::sim::EntityKind;

/// Per-kind entity parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityTuning {
    /// Bounding box size (width, height)
    pub size: Vec2,
    pub mass: f32,
    /// Seconds between wander direction changes (None = not AI driven)
    pub wander_interval: Option<f32>,
    /// Face the direction of travel
    pub turn_while_moving: bool,
    pub ignores_gravity: bool,
    /// Candidate sprites; one is picked per spawn
    pub sprites: Vec<String>,
}

/// Gameplay tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub field_size: Vec2,
    pub player_speed: f32,
    pub gravity: Vec2,
    pub wander_speed: f32,
    /// Collectible spawn band, min inclusive, max exclusive
    pub spawn_band: (i32, i32),
    pub collectibles_per_kind: usize,
    pub player_spawn: Vec2,
    pub hazard_spawn: Vec2,
    pub score_kind_a: u64,
    pub score_kind_b: u64,
    pub message_time: f32,
    pub player: EntityTuning,
    pub kind_a: EntityTuning,
    pub kind_b: EntityTuning,
    pub hazard: EntityTuning,
}

fn sprites(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_size: Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
            player_speed: PLAYER_SPEED,
            gravity: Vec2::new(0.0, GRAVITY_Y),
            wander_speed: WANDER_SPEED,
            spawn_band: (SPAWN_MIN_Y, SPAWN_MAX_Y),
            collectibles_per_kind: COLLECTIBLES_PER_KIND,
            player_spawn: Vec2::new(0.0, -400.0),
            hazard_spawn: Vec2::new(0.0, 400.0),
            score_kind_a: 1,
            score_kind_b: 5,
            message_time: MESSAGE_TIME_SECS,

            player: EntityTuning {
                size: Vec2::splat(150.0),
                mass: 2000.0,
                wander_interval: None,
                turn_while_moving: false,
                ignores_gravity: false,
                sprites: sprites(&["sammakko.png"]),
            },
            // Bugs
            kind_a: EntityTuning {
                size: Vec2::splat(80.0),
                mass: 1.0,
                wander_interval: Some(1.0),
                turn_while_moving: true,
                ignores_gravity: true,
                sprites: sprites(&["hamahakki.png", "leppakerttu.png", "hottiainen.png"]),
            },
            // Butterflies
            kind_b: EntityTuning {
                size: Vec2::splat(80.0),
                mass: 1.0,
                wander_interval: Some(3.0),
                turn_while_moving: true,
                ignores_gravity: true,
                sprites: sprites(&["perhonen1.png", "perhonen2.png", "perhonen3.png"]),
            },
            // The cat
            hazard: EntityTuning {
                size: Vec2::splat(120.0),
                mass: 1000.0,
                wander_interval: Some(2.0),
                turn_while_moving: true,
                ignores_gravity: true,
                sprites: sprites(&["kisse.png"]),
            },
        }
    }
}

impl Tuning {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "froggy_tuning";

    /// Parameters for one entity kind
    pub fn entity(&self, kind: EntityKind) -> &EntityTuning {
        match kind {
            EntityKind::Player => &self.player,
            EntityKind::CollectibleKindA => &self.kind_a,
            EntityKind::CollectibleKindB => &self.kind_b,
            EntityKind::Hazard => &self.hazard,
        }
    }

    /// Half extents of the playing field
    pub fn half_field(&self) -> Vec2 {
        self.field_size / 2.0
    }

    /// Load tuning, falling back to defaults
    pub fn load(storage: &impl Storage) -> Self {
        persistence::try_load(storage, Self::STORAGE_KEY, Self::default())
    }

    pub fn save(&self, storage: &mut impl Storage) {
        persistence::save(storage, Self::STORAGE_KEY, self);
    }
}
