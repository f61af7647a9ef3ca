//! Vocabulary and spaced repetition state
//!
//! This module provides:
//! - Learning item and category models
//! - SM-2 progress updates
//! - Collection helpers (merge, write-back, progress counts)
//! - The built-in vocabulary and the JSON file store

pub mod algorithm;
pub mod collection;
pub mod defaults;
pub mod models;
pub mod storage;

pub use models::*;
pub use storage::{StorageError, VocabularyStore};
