//! Spaced-repetition trainer for Italian driving licence vocabulary.
//!
//! The scheduling core lives in [`vocabulary::algorithm`] (SM-2 updates) and
//! [`quiz`] (review selection and answer rounds). Both are synchronous and
//! hold no state; the caller owns the item collection, loads it through
//! [`vocabulary::VocabularyStore`] and saves it after every answer.

pub mod config;
pub mod explain;
pub mod quiz;
pub mod vocabulary;
