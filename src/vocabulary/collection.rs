//! Operations over a caller-owned vocabulary collection

use std::collections::HashMap;

use super::models::{Category, CategoryProgress, LearningItem};

/// Merge two item sets by id, the later set winning.
///
/// Each id appears once in the result. Items keep the position where their
/// id was first seen, so overriding a built-in item does not reorder it.
pub fn merge_items(base: Vec<LearningItem>, overrides: Vec<LearningItem>) -> Vec<LearningItem> {
    let mut merged: Vec<LearningItem> = Vec::with_capacity(base.len() + overrides.len());
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in base.into_iter().chain(overrides) {
        match index.get(&item.id) {
            Some(&pos) => merged[pos] = item,
            None => {
                index.insert(item.id.clone(), merged.len());
                merged.push(item);
            }
        }
    }

    merged
}

/// Write an updated item back into the collection.
/// Returns false when no item has that id.
pub fn replace_item(items: &mut [LearningItem], updated: LearningItem) -> bool {
    match items.iter_mut().find(|i| i.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => {
            log::warn!("Tried to update unknown item {}", updated.id);
            false
        }
    }
}

pub fn count_mastered(items: &[LearningItem]) -> usize {
    items.iter().filter(|i| i.is_mastered()).count()
}

/// Learned/total counts for every category, in display order
pub fn progress_by_category(items: &[LearningItem]) -> Vec<CategoryProgress> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let in_category = items.iter().filter(|i| i.category == category);
            let (total, learned) = in_category.fold((0, 0), |(total, learned), item| {
                (total + 1, learned + usize::from(item.is_learned()))
            });
            let percent = if total == 0 {
                0
            } else {
                ((learned as f64 / total as f64) * 100.0).round() as u32
            };
            CategoryProgress {
                category,
                total,
                learned,
                percent,
            }
        })
        .collect()
}
