//! High score leaderboard system
//!
//! Persisted to LocalStorage, tracks the top 5 scores.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 5;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Name entered at session start
    pub name: String,
    /// Final score
    pub score: u64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "orb_blaster_highscores";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score would make the table
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a score. The table stays sorted descending and capped at
    /// [`MAX_HIGH_SCORES`]. Returns the rank achieved (1-indexed) if the
    /// entry survived the cut.
    pub fn add_score(&mut self, name: &str, score: u64) -> Option<usize> {
        let entry = HighScoreEntry {
            name: name.to_string(),
            score,
        };

        // Insertion point: after every strictly greater score
        let pos = self
            .entries
            .iter()
            .position(|e| score > e.score)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);

        (pos < MAX_HIGH_SCORES).then_some(pos + 1)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load high scores from LocalStorage (WASM only).
    /// Missing or unparseable data falls back to an empty table.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(scores) = serde_json::from_str::<HighScores>(&json) {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    return scores;
                }
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("High scores saved ({} entries)", self.entries.len());
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_descending(scores: &HighScores) -> bool {
        scores.entries.windows(2).all(|w| w[0].score >= w[1].score)
    }

    #[test]
    fn test_capped_and_sorted() {
        let mut scores = HighScores::new();
        for (i, s) in [30, 10, 50, 20, 40, 60, 5].iter().enumerate() {
            scores.add_score(&format!("P{i}"), *s);
            assert!(scores.entries.len() <= MAX_HIGH_SCORES);
            assert!(sorted_descending(&scores));
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.top_score(), Some(60));
        // 10 and 5 fell off the bottom
        assert_eq!(scores.entries.last().unwrap().score, 20);
    }

    #[test]
    fn test_rank_reporting() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score("A", 100), Some(1));
        assert_eq!(scores.add_score("B", 200), Some(1));
        assert_eq!(scores.add_score("C", 150), Some(2));

        for i in 0..3 {
            scores.add_score(&format!("D{i}"), 300);
        }
        // Table is full of better scores now
        assert!(!scores.qualifies(50));
        assert_eq!(scores.add_score("E", 50), None);
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
    }

    #[test]
    fn test_ties_keep_earlier_entry_first() {
        let mut scores = HighScores::new();
        scores.add_score("first", 100);
        scores.add_score("second", 100);
        assert_eq!(scores.entries[0].name, "first");
        assert_eq!(scores.entries[1].name, "second");
    }

    #[test]
    fn test_zero_score_is_recorded() {
        // Every game over records an entry, even a scoreless one
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score("Guest", 0), Some(1));
        assert_eq!(scores.entries.len(), 1);
    }
}
