//! Physics collaborator
//!
//! The game loop only talks to physics through [`Physics`], so a real engine
//! can stand in for [`ArcadePhysics`].

use glam::Vec2;

use super::collision::entities_overlap;
use super::state::{Entity, EntityId};

pub trait Physics {
    /// Build walls around a field with the given half extents, centered on the origin
    fn create_borders(&mut self, half_extents: Vec2);

    /// Global gravity for entities that do not ignore it
    fn set_gravity(&mut self, gravity: Vec2);

    fn gravity(&self) -> Vec2;

    /// Advance every live entity by `dt` seconds
    fn step(&mut self, entities: &mut [Entity], dt: f32);

    /// Overlapping pairs of live entities as `(lower id, higher id)`, sorted
    fn overlaps(&self, entities: &[Entity]) -> Vec<(EntityId, EntityId)>;
}

/// Minimal arcade physics: Euler integration, gravity, and walls that stop
/// entities dead (no bounce). Entities pass through each other; overlaps are
/// only reported.
#[derive(Debug, Clone, Default)]
pub struct ArcadePhysics {
    gravity: Vec2,
    borders: Option<Vec2>,
}

impl ArcadePhysics {
    pub fn new() -> Self {
        Self::default()
    }

    fn confine(&self, entity: &mut Entity) {
        let Some(field) = self.borders else {
            return;
        };
        let half = entity.half_extents();
        let max = (field - half).max(Vec2::ZERO);
        let clamped = entity.pos.clamp(-max, max);
        if clamped.x != entity.pos.x {
            entity.vel.x = 0.0;
        }
        if clamped.y != entity.pos.y {
            entity.vel.y = 0.0;
        }
        entity.pos = clamped;
    }
}

impl Physics for ArcadePhysics {
    fn create_borders(&mut self, half_extents: Vec2) {
        self.borders = Some(half_extents);
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn gravity(&self) -> Vec2 {
        self.gravity
    }

    fn step(&mut self, entities: &mut [Entity], dt: f32) {
        for entity in entities.iter_mut().filter(|e| e.alive) {
            if !entity.ignores_gravity {
                entity.vel += self.gravity * dt;
            }
            entity.pos += entity.vel * dt;
            self.confine(entity);
        }
    }

    fn overlaps(&self, entities: &[Entity]) -> Vec<(EntityId, EntityId)> {
        let mut pairs = Vec::new();
        for (i, a) in entities.iter().enumerate().filter(|(_, e)| e.alive) {
            for b in entities[i + 1..].iter().filter(|e| e.alive) {
                if entities_overlap(a, b) {
                    pairs.push((a.id.min(b.id), a.id.max(b.id)));
                }
            }
        }
        pairs.sort_unstable();
        pairs
    }
}
