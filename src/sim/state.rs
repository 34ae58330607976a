//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::wander::WanderState;

pub type EntityId = u32;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed, round not yet built
    Initializing,
    /// Active gameplay
    Running,
    /// Player caught; leaderboard window open
    GameOver,
}

/// What an entity is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// The frog
    Player,
    /// Bug, worth a little
    CollectibleKindA,
    /// Butterfly, worth more
    CollectibleKindB,
    /// The cat
    Hazard,
}

impl EntityKind {
    /// Collision tag
    pub fn tag(&self) -> &'static str {
        match self {
            EntityKind::Player => "sammakko",
            EntityKind::CollectibleKindA => "ötökkä",
            EntityKind::CollectibleKindB => "perhonen",
            EntityKind::Hazard => "kissa",
        }
    }

    pub fn is_collectible(&self) -> bool {
        matches!(self, EntityKind::CollectibleKindA | EntityKind::CollectibleKindB)
    }
}

/// A positioned game object. Collision shape is its axis-aligned box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Box size (width, height)
    pub size: Vec2,
    pub mass: f32,
    /// Facing, radians
    pub angle: f32,
    pub ignores_gravity: bool,
    pub turn_while_moving: bool,
    /// Image asset name
    pub sprite: String,
    pub wander: Option<WanderState>,
    pub alive: bool,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            vel: Vec2::ZERO,
            size,
            mass: 1.0,
            angle: 0.0,
            ignores_gravity: false,
            turn_while_moving: false,
            sprite: String::new(),
            wander: None,
            alive: true,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Mark for removal before the next collision pass
    pub fn destroy(&mut self) {
        self.alive = false;
        self.vel = Vec2::ZERO;
    }
}
