//! Random wandering AI
//!
//! Every `interval` seconds a wandering entity picks a fresh heading at a
//! fixed speed. A new state is due immediately so entities start moving on
//! their first tick.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::direction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WanderState {
    /// Seconds between direction changes
    pub interval: f32,
    /// Seconds since the last change
    pub elapsed: f32,
    /// Current movement vector
    pub current: Vec2,
}

impl WanderState {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: interval,
            current: Vec2::ZERO,
        }
    }

    /// Advance by `dt`. Returns the new movement vector when the interval
    /// has elapsed, None otherwise.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, speed: f32, rng: &mut R) -> Option<Vec2> {
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return None;
        }
        self.elapsed = 0.0;
        self.current = direction(rng.random_range(0.0..TAU)) * speed;
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_first_advance_picks_a_heading() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut w = WanderState::new(2.0);
        let v = w.advance(0.0, 200.0, &mut rng).expect("due immediately");
        assert!((v.length() - 200.0).abs() < 1e-3);
        assert_eq!(w.elapsed, 0.0);
    }

    #[test]
    fn test_changes_only_after_interval() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut w = WanderState::new(1.0);
        let first = w.advance(0.0, 200.0, &mut rng).unwrap();

        for _ in 0..3 {
            assert!(w.advance(0.25, 200.0, &mut rng).is_none());
            assert_eq!(w.current, first);
        }
        let next = w.advance(0.25, 200.0, &mut rng).expect("interval reached");
        assert_eq!(w.current, next);
        assert_eq!(w.elapsed, 0.0);
    }

    #[test]
    fn test_intervals_are_independent() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut fast = WanderState::new(1.0);
        let mut slow = WanderState::new(3.0);
        fast.advance(0.0, 200.0, &mut rng);
        slow.advance(0.0, 200.0, &mut rng);

        let mut fast_changes = 0;
        let mut slow_changes = 0;
        // 6 seconds in quarter-second steps
        for _ in 0..24 {
            fast_changes += fast.advance(0.25, 200.0, &mut rng).is_some() as u32;
            slow_changes += slow.advance(0.25, 200.0, &mut rng).is_some() as u32;
        }
        assert_eq!(fast_changes, 6);
        assert_eq!(slow_changes, 2);
    }
}
