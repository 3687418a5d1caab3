//! Persisted spelling-practice statistics.
//!
//! The store is a collaborator of the UI layer, not of the playback core:
//! it is written after each spelling submission and read back for the
//! progress display. The whole structure is loaded, mutated, and saved in
//! one piece under a single fixed namespace, so concurrent writers follow a
//! last-write-wins policy and observers simply re-read periodically.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PhonicsError;
use crate::words::UserType;

/// Namespace under which all progress lives.
pub const STORAGE_NAMESPACE: &str = "phonics-learning-progress";

/// Statistics for one (audience, word length) bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub correct: u32,
    pub incorrect: u32,
    /// Distinct words attempted, lowercased.
    #[serde(default)]
    pub words: BTreeSet<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct AllProgress {
    #[serde(default)]
    kids: BTreeMap<usize, ProgressRecord>,
    #[serde(default)]
    adults: BTreeMap<usize, ProgressRecord>,
}

impl AllProgress {
    fn for_user(&mut self, user: UserType) -> &mut BTreeMap<usize, ProgressRecord> {
        match user {
            UserType::Kids => &mut self.kids,
            UserType::Adults => &mut self.adults,
        }
    }
}

/// JSON-file-backed progress store.
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// A store inside `dir`, named after [`STORAGE_NAMESPACE`].
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(format!("{STORAGE_NAMESPACE}.json")),
        }
    }

    /// A store at an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record one spelling attempt.
    pub fn record_attempt(
        &self,
        user: UserType,
        word: &str,
        correct: bool,
    ) -> Result<(), PhonicsError> {
        let word = word.to_lowercase();
        let length = word.chars().count();
        let mut all = self.load();
        let record = all.for_user(user).entry(length).or_default();
        if correct {
            record.correct += 1;
        } else {
            record.incorrect += 1;
        }
        record.words.insert(word);
        self.save(&all)
    }

    /// Statistics for one (audience, word length) bucket. Missing buckets
    /// read as all-zero.
    pub fn for_length(&self, user: UserType, length: usize) -> ProgressRecord {
        let mut all = self.load();
        all.for_user(user).remove(&length).unwrap_or_default()
    }

    /// Drop one audience's statistics, or everything.
    pub fn clear(&self, user: Option<UserType>) -> Result<(), PhonicsError> {
        match user {
            Some(user) => {
                let mut all = self.load();
                all.for_user(user).clear();
                self.save(&all)
            }
            None => {
                if self.path.exists() {
                    std::fs::remove_file(&self.path)?;
                }
                Ok(())
            }
        }
    }

    /// Load the whole structure. A missing or corrupt file degrades to the
    /// empty structure; losing statistics is better than losing the app.
    fn load(&self) -> AllProgress {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return AllProgress::default();
            }
            Err(err) => {
                log::warn!("Cannot read {}: {err}", self.path.display());
                return AllProgress::default();
            }
        };
        match serde_json::from_str(&content) {
            Ok(all) => all,
            Err(err) => {
                log::warn!("Corrupt progress file {}: {err}", self.path.display());
                AllProgress::default()
            }
        }
    }

    /// Save the whole structure in one write.
    fn save(&self, all: &AllProgress) -> Result<(), PhonicsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(all)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ProgressStore, UserType};

    fn scratch_store(name: &str) -> ProgressStore {
        let path = std::env::temp_dir()
            .join(format!("phonics-rs-test-{}-{name}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);
        ProgressStore::at_path(path)
    }

    #[test]
    fn records_accumulate_per_audience_and_length() {
        let store = scratch_store("accumulate");
        store.record_attempt(UserType::Kids, "cat", true).unwrap();
        store.record_attempt(UserType::Kids, "Cat", false).unwrap();
        store.record_attempt(UserType::Kids, "ship", true).unwrap();
        store.record_attempt(UserType::Adults, "tin", true).unwrap();

        let kids3 = store.for_length(UserType::Kids, 3);
        assert_eq!(kids3.correct, 1);
        assert_eq!(kids3.incorrect, 1);
        assert_eq!(kids3.words.len(), 1); // "cat" deduplicated across case

        let kids4 = store.for_length(UserType::Kids, 4);
        assert_eq!(kids4.correct, 1);
        assert_eq!(store.for_length(UserType::Adults, 3).correct, 1);
        store.clear(None).unwrap();
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = scratch_store("missing");
        let record = store.for_length(UserType::Kids, 3);
        assert_eq!(record.correct, 0);
        assert!(record.words.is_empty());
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let store = scratch_store("corrupt");
        std::fs::write(store.path(), "not json").unwrap();
        assert_eq!(store.for_length(UserType::Kids, 3).correct, 0);
        store.record_attempt(UserType::Kids, "sat", true).unwrap();
        assert_eq!(store.for_length(UserType::Kids, 3).correct, 1);
        store.clear(None).unwrap();
    }

    #[test]
    fn clear_scopes_to_one_audience() {
        let store = scratch_store("clear");
        store.record_attempt(UserType::Kids, "cat", true).unwrap();
        store.record_attempt(UserType::Adults, "map", true).unwrap();
        store.clear(Some(UserType::Kids)).unwrap();
        assert_eq!(store.for_length(UserType::Kids, 3).correct, 0);
        assert_eq!(store.for_length(UserType::Adults, 3).correct, 1);
        store.clear(None).unwrap();
    }
}
