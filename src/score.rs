//! Current round score plus the persisted leaderboard

use crate::highscores::HighScores;
use crate::persistence::Storage;

#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    current: u64,
    leaderboard: HighScores,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn leaderboard(&self) -> &HighScores {
        &self.leaderboard
    }

    pub fn increment(&mut self, amount: u64) {
        self.current = self.current.saturating_add(amount);
    }

    /// Zero the round score; the leaderboard is left alone
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Put `score` on the leaderboard under `name`, returning the rank if it qualified
    pub fn submit(&mut self, name: &str, score: u64) -> Option<usize> {
        let rank = self.leaderboard.submit(name, score);
        match rank {
            Some(rank) => log::info!("{} entered the leaderboard at #{} with {}", name, rank, score),
            None => log::info!("Score {} did not make the leaderboard", score),
        }
        rank
    }

    /// Replace the in-memory leaderboard with the persisted one
    pub fn load(&mut self, storage: &impl Storage) {
        self.leaderboard = HighScores::load(storage);
    }

    pub fn save(&self, storage: &mut impl Storage) {
        self.leaderboard.save(storage);
    }
}
