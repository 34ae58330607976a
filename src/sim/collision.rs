//! Overlap tests and the player collision rules

use glam::Vec2;

use super::state::{Entity, EntityKind};
use crate::settings::Tuning;

/// Whether two axis-aligned boxes overlap (touching edges do not)
pub fn boxes_overlap(pos_a: Vec2, half_a: Vec2, pos_b: Vec2, half_b: Vec2) -> bool {
    let d = (pos_a - pos_b).abs();
    let reach = half_a + half_b;
    d.x < reach.x && d.y < reach.y
}

#[inline]
pub fn entities_overlap(a: &Entity, b: &Entity) -> bool {
    boxes_overlap(a.pos, a.half_extents(), b.pos, b.half_extents())
}

/// Which side of a player collision is destroyed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destroyed {
    Other,
    Player,
}

/// Result of the player touching another entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub destroyed: Destroyed,
    pub score_delta: u64,
    /// Kind to spawn one replacement of
    pub respawn: Option<EntityKind>,
    /// Ends the round
    pub terminal: bool,
}

impl CollisionOutcome {
    fn collect(kind: EntityKind, points: u64) -> Self {
        Self {
            destroyed: Destroyed::Other,
            score_delta: points,
            respawn: Some(kind),
            terminal: false,
        }
    }

    fn caught() -> Self {
        Self {
            destroyed: Destroyed::Player,
            score_delta: 0,
            respawn: None,
            terminal: true,
        }
    }
}

/// Outcome of the player touching an entity of kind `other`.
/// None for the player itself.
pub fn player_collision(other: EntityKind, tuning: &Tuning) -> Option<CollisionOutcome> {
    match other {
        EntityKind::Player => None,
        EntityKind::CollectibleKindA => Some(CollisionOutcome::collect(other, tuning.score_kind_a)),
        EntityKind::CollectibleKindB => Some(CollisionOutcome::collect(other, tuning.score_kind_b)),
        EntityKind::Hazard => Some(CollisionOutcome::caught()),
    }
}
