//! JSON-backed history of finished games.
//!
//! Each finished game is recorded as a [`GameResult`] holding the player's
//! name, whether the puzzle was solved, the number of moves committed, and
//! the wall-clock duration of the session. [`JsonResultStore`] appends
//! results to a JSON file and can report the best solved games by move
//! count. A missing file simply reads as an empty history.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Outcome metadata for one finished game.
///
/// This is caller-tracked data; nothing here is part of the rules engine's
/// own state model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Name of the player.
    pub player: String,
    /// Whether the puzzle was solved (as opposed to abandoned or stuck).
    pub solved: bool,
    /// Number of moves the player committed.
    pub moves: u32,
    /// Wall-clock duration of the session.
    pub duration: Duration,
}

/// Failures while reading or writing the result file.
#[derive(Debug, Error)]
pub enum ResultStoreError {
    /// The result file could not be read or written.
    #[error("failed to access result file: {0}")]
    Io(#[from] std::io::Error),
    /// The result file exists but does not contain a valid result list.
    #[error("failed to decode result file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Stores game results in a JSON file.
pub struct JsonResultStore {
    path: PathBuf,
}

impl JsonResultStore {
    /// Creates a store backed by the file at `path`. The file is not touched
    /// until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonResultStore { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `result` to the stored history and returns the updated list.
    ///
    /// # Errors
    /// Returns a [`ResultStoreError`] if the existing file cannot be read or
    /// decoded, or the updated list cannot be written back.
    pub fn add(&self, result: GameResult) -> Result<Vec<GameResult>, ResultStoreError> {
        let mut results = self.all()?;
        results.push(result);
        fs::write(&self.path, serde_json::to_string_pretty(&results)?)?;
        debug!(path = %self.path.display(), count = results.len(), "result recorded");
        Ok(results)
    }

    /// Reads every stored result. A missing file yields an empty list.
    ///
    /// # Errors
    /// Returns a [`ResultStoreError`] if the file exists but cannot be read
    /// or decoded.
    pub fn all(&self) -> Result<Vec<GameResult>, ResultStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// The best solved results, ordered by ascending move count, at most
    /// `limit` of them. Unsolved games never appear.
    ///
    /// # Errors
    /// Propagates read failures from [`JsonResultStore::all`].
    pub fn best(&self, limit: usize) -> Result<Vec<GameResult>, ResultStoreError> {
        let mut solved: Vec<GameResult> =
            self.all()?.into_iter().filter(|r| r.solved).collect();
        solved.sort_by_key(|r| r.moves);
        solved.truncate(limit);
        Ok(solved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn result(player: &str, solved: bool, moves: u32) -> GameResult {
        GameResult {
            player: player.to_string(),
            solved,
            moves,
            duration: Duration::from_secs(90),
        }
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let store = JsonResultStore::new(dir.path().join("results.json"));
        assert_eq!(store.all().unwrap(), Vec::new());
        assert_eq!(store.best(10).unwrap(), Vec::new());
    }

    #[test]
    fn test_add_then_read_back() {
        let dir = tempdir().unwrap();
        let store = JsonResultStore::new(dir.path().join("results.json"));

        let first = result("alice", true, 11);
        let second = result("bob", false, 4);
        assert_eq!(store.add(first.clone()).unwrap(), vec![first.clone()]);
        let updated = store.add(second.clone()).unwrap();
        assert_eq!(updated, vec![first.clone(), second.clone()]);

        // A fresh store on the same file sees the same history.
        let reopened = JsonResultStore::new(store.path());
        assert_eq!(reopened.all().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_best_filters_and_sorts() {
        let dir = tempdir().unwrap();
        let store = JsonResultStore::new(dir.path().join("results.json"));
        store.add(result("slow", true, 20)).unwrap();
        store.add(result("gave-up", false, 2)).unwrap();
        store.add(result("fast", true, 11)).unwrap();
        store.add(result("middling", true, 15)).unwrap();

        let best = store.best(2).unwrap();
        assert_eq!(best.len(), 2);
        assert_eq!(best[0].player, "fast");
        assert_eq!(best[1].player, "middling");
    }

    #[test]
    fn test_garbage_file_is_a_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");
        fs::write(&path, "not json").unwrap();
        let store = JsonResultStore::new(path);
        assert!(matches!(store.all(), Err(ResultStoreError::Format(_))));
    }
}
