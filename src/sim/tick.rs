//! Simulation tick
//!
//! One Running tick: held-key movement, wandering, physics, then collision
//! rules for every overlap involving the player.

use super::collision::{Destroyed, player_collision};
use super::game::Game;
use super::physics::Physics;
use super::state::{EntityId, GamePhase};
use crate::heading;
use crate::persistence::Storage;

impl<P: Physics, S: Storage> Game<P, S> {
    /// Advance the game by `dt` seconds. Only Running ticks; GameOver is frozen.
    pub fn tick(&mut self, dt: f32) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.time_ticks += 1;
        self.messages.update(dt);

        self.fire_held();
        self.wander(dt);
        self.physics.step(&mut self.entities, dt);

        let overlaps = self.physics.overlaps(&self.entities);
        self.resolve_player_collisions(&overlaps);
    }

    fn wander(&mut self, dt: f32) {
        let speed = self.tuning.wander_speed;
        for entity in self.entities.iter_mut().filter(|e| e.alive) {
            let Some(wander) = entity.wander.as_mut() else {
                continue;
            };
            if let Some(vel) = wander.advance(dt, speed, &mut self.rng) {
                entity.vel = vel;
                if entity.turn_while_moving {
                    entity.angle = heading(vel);
                }
            }
        }
    }

    fn resolve_player_collisions(&mut self, overlaps: &[(EntityId, EntityId)]) {
        let Some(player_id) = self.player else {
            return;
        };
        let mut respawns = Vec::new();

        for &(a, b) in overlaps {
            let other_id = match (a == player_id, b == player_id) {
                (true, _) => b,
                (_, true) => a,
                _ => continue,
            };
            let Some(other) = self.entity(other_id).filter(|e| e.alive) else {
                continue;
            };
            let Some(outcome) = player_collision(other.kind, &self.tuning) else {
                continue;
            };
            log::debug!("Player hit {} #{}", other.kind.tag(), other_id);

            let destroyed = match outcome.destroyed {
                Destroyed::Other => other_id,
                Destroyed::Player => player_id,
            };
            if let Some(entity) = self.entity_mut(destroyed) {
                entity.destroy();
            }
            self.scores.increment(outcome.score_delta);
            respawns.extend(outcome.respawn);

            if outcome.terminal {
                self.enter_game_over();
                break;
            }
        }

        self.entities.retain(|e| e.alive);
        if self.phase != GamePhase::Running {
            return;
        }
        for kind in respawns {
            self.spawn(kind);
        }
    }
}
