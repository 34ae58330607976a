//! High score leaderboard
//!
//! Tracks the top 10 scores, persisted as a single record.

use serde::{Deserialize, Serialize};

use crate::persistence::{self, Storage};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Name the player typed into the leaderboard window
    pub name: String,
    pub score: u64,
}

/// High score leaderboard, sorted descending by score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Storage key of the persisted leaderboard
    pub const STORAGE_KEY: &'static str = "pisteet";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Full board: must beat the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn submit(&mut self, name: &str, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            name: name.to_string(),
            score,
        };

        // Ties go below existing entries
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load high scores; a missing or corrupt record gives an empty board
    pub fn load(storage: &impl Storage) -> Self {
        let mut scores: Self = persistence::try_load(storage, Self::STORAGE_KEY, Self::new());
        // Hand-edited records may be unsorted or overlong
        scores.entries.sort_by(|a, b| b.score.cmp(&a.score));
        scores.entries.truncate(MAX_HIGH_SCORES);
        log::info!("{} high scores on the board", scores.entries.len());
        scores
    }

    pub fn save(&self, storage: &mut impl Storage) {
        persistence::save(storage, Self::STORAGE_KEY, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;
    use proptest::prelude::*;

    fn full_board() -> HighScores {
        let mut board = HighScores::new();
        for score in (10..=100).step_by(10) {
            board.submit("frog", score);
        }
        board
    }

    #[test]
    fn test_zero_score_enters_short_board() {
        let mut board = HighScores::new();
        assert_eq!(board.submit("nobody", 0), Some(1));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_full_board_rejects_score_at_minimum() {
        let mut board = full_board();
        assert_eq!(board.len(), MAX_HIGH_SCORES);
        assert_eq!(board.submit("late", 10), None);
        assert_eq!(board.submit("later", 5), None);
        assert_eq!(board.len(), MAX_HIGH_SCORES);
    }

    #[test]
    fn test_full_board_evicts_lowest() {
        let mut board = full_board();
        assert_eq!(board.potential_rank(55), Some(6));
        assert_eq!(board.submit("mid", 55), Some(6));
        assert_eq!(board.len(), MAX_HIGH_SCORES);
        assert_eq!(board.entries.last().map(|e| e.score), Some(20));
        assert_eq!(board.entries[5].name, "mid");
    }

    #[test]
    fn test_ties_rank_below_existing() {
        let mut board = HighScores::new();
        board.submit("first", 8);
        assert_eq!(board.submit("second", 8), Some(2));
        assert_eq!(board.entries[0].name, "first");
    }

    #[test]
    fn test_load_sorts_and_trims_hand_edited_record() {
        let mut storage = MemoryStorage::new();
        let entries: Vec<_> = (0..15)
            .map(|i| HighScoreEntry {
                name: format!("p{i}"),
                score: i,
            })
            .collect();
        persistence::save(&mut storage, HighScores::STORAGE_KEY, &HighScores { entries });

        let board = HighScores::load(&storage);
        assert_eq!(board.len(), MAX_HIGH_SCORES);
        assert_eq!(board.top_score(), Some(14));
        assert_eq!(board.entries.last().map(|e| e.score), Some(5));
    }

    #[test]
    fn test_save_and_load() {
        let mut storage = MemoryStorage::new();
        let mut board = HighScores::new();
        board.submit("frog", 8);
        board.save(&mut storage);
        assert_eq!(HighScores::load(&storage), board);
    }

    proptest! {
        #[test]
        fn prop_board_stays_sorted_and_bounded(scores in prop::collection::vec(0u64..1000, 0..40)) {
            let mut board = HighScores::new();
            for score in scores {
                let before = board.clone();
                let min = before.entries.last().map(|e| e.score);
                let inserted = board.submit("p", score).is_some();

                if before.len() < MAX_HIGH_SCORES {
                    prop_assert!(inserted);
                } else {
                    prop_assert_eq!(inserted, score > min.unwrap_or(0));
                }
                prop_assert!(board.len() <= MAX_HIGH_SCORES);
                prop_assert!(board.entries.windows(2).all(|w| w[0].score >= w[1].score));
            }
        }
    }
}
