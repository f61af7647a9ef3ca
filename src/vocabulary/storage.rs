//! Storage operations for the vocabulary
//!
//! Directory structure:
//! ```text
//! {data-dir}/
//! ├── vocabulary.json   # Array of all learning items
//! └── stats.json        # Attempt counters
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::collection::merge_items;
use super::defaults::default_vocabulary;
use super::models::{Category, LearningItem, UserStats};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid item: {0}")]
    InvalidItem(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

const VOCABULARY_FILE: &str = "vocabulary.json";
const STATS_FILE: &str = "stats.json";

/// File-backed store for the vocabulary and the user's stats
pub struct VocabularyStore {
    data_dir: PathBuf,
}

impl VocabularyStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn vocabulary_path(&self) -> PathBuf {
        self.data_dir.join(VOCABULARY_FILE)
    }

    fn stats_path(&self) -> PathBuf {
        self.data_dir.join(STATS_FILE)
    }

    /// Load the saved items merged over the built-in set (saved items win)
    pub fn load_vocabulary(&self) -> Result<Vec<LearningItem>> {
        let saved = self.load_saved_items()?;
        let merged = merge_items(default_vocabulary(), saved);
        log::debug!("Loaded {} vocabulary items", merged.len());
        Ok(merged)
    }

    /// Load only what has been saved, without the built-in set
    pub fn load_saved_items(&self) -> Result<Vec<LearningItem>> {
        Ok(read_json(&self.vocabulary_path())?.unwrap_or_default())
    }

    pub fn save_vocabulary(&self, items: &[LearningItem]) -> Result<()> {
        write_json(&self.vocabulary_path(), items)
    }

    pub fn load_stats(&self) -> Result<UserStats> {
        Ok(read_json(&self.stats_path())?.unwrap_or_default())
    }

    pub fn save_stats(&self, stats: &UserStats) -> Result<()> {
        write_json(&self.stats_path(), stats)
    }

    /// Create a custom item, append it after the existing vocabulary and save
    pub fn add_custom_item(
        &self,
        prompt: &str,
        answer: &str,
        category: Category,
    ) -> Result<LearningItem> {
        let item = LearningItem::custom(prompt, answer, category).ok_or_else(|| {
            StorageError::InvalidItem("prompt and answer must not be empty".to_string())
        })?;

        let mut items = self.load_vocabulary()?;
        items.push(item.clone());
        self.save_vocabulary(&items)?;

        log::info!("Added custom item {} ({})", item.id, item.prompt);
        Ok(item)
    }
}

/// Read a JSON file, `None` when it does not exist
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// Write pretty JSON to a temp file, then rename it into place
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, serde_json::to_string_pretty(value)?)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::algorithm::update_progress;
    use tempfile::TempDir;

    fn create_test_store() -> (VocabularyStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = VocabularyStore::new(temp_dir.path().join("patente"));
        (store, temp_dir)
    }

    #[test]
    fn test_empty_store_loads_defaults() {
        let (store, _temp) = create_test_store();

        let items = store.load_vocabulary().unwrap();
        assert_eq!(items, default_vocabulary());
        assert_eq!(store.load_stats().unwrap(), UserStats::default());
    }

    #[test]
    fn test_saved_progress_overrides_defaults() {
        let (store, _temp) = create_test_store();

        let mut items = store.load_vocabulary().unwrap();
        let updated = update_progress(&items[2], 5, 1_700_000_000_000);
        items[2] = updated.clone();
        store.save_vocabulary(&items).unwrap();

        let reloaded = store.load_vocabulary().unwrap();
        assert_eq!(reloaded.len(), default_vocabulary().len());
        assert_eq!(reloaded[2], updated);
    }

    #[test]
    fn test_round_trip_is_lossless() {
        let (store, _temp) = create_test_store();

        let mut item = LearningItem::new("x-1", "Semaforo", "红绿灯", Category::RoadSigns);
        item.repetition = 4;
        item.interval = 37;
        item.ease_factor = 1.86;
        item.next_review_date = 1_722_333_444_555;
        store.save_vocabulary(&[item.clone()]).unwrap();

        assert_eq!(store.load_saved_items().unwrap(), vec![item]);
    }

    #[test]
    fn test_stats_round_trip() {
        let (store, _temp) = create_test_store();

        let mut stats = UserStats::default();
        stats.record_attempt(true);
        stats.record_attempt(false);
        store.save_stats(&stats).unwrap();

        assert_eq!(store.load_stats().unwrap(), stats);
    }

    #[test]
    fn test_add_custom_item() {
        let (store, _temp) = create_test_store();

        let first = store.add_custom_item("Rotatoria", "环岛", Category::Rules).unwrap();
        let second = store.add_custom_item("Autovelox", "测速器", Category::Rules).unwrap();

        let items = store.load_vocabulary().unwrap();
        let defaults = default_vocabulary();
        assert_eq!(items.len(), defaults.len() + 2);
        assert_eq!(items[0].id, defaults[0].id);
        assert_eq!(items[items.len() - 2], first);
        assert_eq!(items.last(), Some(&second));

        let result = store.add_custom_item(" ", "环岛", Category::Rules);
        assert!(matches!(result, Err(StorageError::InvalidItem(_))));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let (store, _temp) = create_test_store();
        fs::create_dir_all(store.data_dir()).unwrap();
        fs::write(store.data_dir().join(VOCABULARY_FILE), "not json").unwrap();

        assert!(matches!(store.load_vocabulary(), Err(StorageError::Json(_))));
    }
}
