//! Demo autopilot
//!
//! Picks which direction key to hold: run from the cat when it is close,
//! otherwise chase the nearest collectible.

use glam::Vec2;

use super::game::Game;
use super::physics::Physics;
use crate::persistence::Storage;
use crate::platform::{Key, KeyState};

/// Distance at which the autopilot stops hunting and flees
pub const FLEE_DISTANCE: f32 = 260.0;

/// Key for travelling along the dominant axis of `delta`
fn key_toward(delta: Vec2) -> Option<Key> {
    if delta.length_squared() < 1.0 {
        return None;
    }
    Some(if delta.x.abs() >= delta.y.abs() {
        if delta.x < 0.0 { Key::Left } else { Key::Right }
    } else if delta.y < 0.0 {
        Key::Down
    } else {
        Key::Up
    })
}

/// Direction key to hold this tick, or None to let go
pub fn steer<P: Physics, S: Storage>(game: &Game<P, S>) -> Option<Key> {
    let player = game.player()?;

    if let Some(cat) = game.hazard() {
        let away = player.pos - cat.pos;
        if away.length() < FLEE_DISTANCE {
            return key_toward(away);
        }
    }

    let target = game.collectibles().min_by(|a, b| {
        a.pos
            .distance_squared(player.pos)
            .partial_cmp(&b.pos.distance_squared(player.pos))
            .unwrap_or(std::cmp::Ordering::Equal)
    })?;
    key_toward(target.pos - player.pos)
}

/// Feeds autopilot decisions to a game as key events
#[derive(Debug, Default)]
pub struct Autopilot {
    holding: Option<Key>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Steer and deliver the press/release events for the change, if any
    pub fn drive<P: Physics, S: Storage>(&mut self, game: &mut Game<P, S>) {
        let want = steer(game);
        if want == self.holding {
            return;
        }
        if let Some(key) = self.holding.take() {
            game.handle_key(key, KeyState::Released);
        }
        if let Some(key) = want {
            game.handle_key(key, KeyState::Pressed);
        }
        self.holding = want;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_toward_dominant_axis() {
        assert_eq!(key_toward(Vec2::new(-10.0, 3.0)), Some(Key::Left));
        assert_eq!(key_toward(Vec2::new(10.0, -3.0)), Some(Key::Right));
        assert_eq!(key_toward(Vec2::new(1.0, -30.0)), Some(Key::Down));
        assert_eq!(key_toward(Vec2::new(1.0, 30.0)), Some(Key::Up));
        assert_eq!(key_toward(Vec2::ZERO), None);
    }
}
