//! Picks the next item to review and builds its answer options

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::{QuizError, Result};
use crate::vocabulary::{CategoryFilter, LearningItem};

/// Options shown per prompt when the vocabulary is large enough
pub const OPTION_COUNT: usize = 3;

/// A chosen item with its shuffled multiple-choice options
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizPrompt {
    pub item: LearningItem,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// Choose the next item from `items` matching `filter`.
///
/// Due items come first, then items never recalled successfully, then
/// anything in the filtered pool. Distractors are drawn from the whole
/// vocabulary regardless of the filter.
pub fn select_next<R: Rng + ?Sized>(
    items: &[LearningItem],
    filter: CategoryFilter,
    now: i64,
    rng: &mut R,
) -> Result<QuizPrompt> {
    let pool: Vec<&LearningItem> = items.iter().filter(|i| filter.matches(i)).collect();
    let chosen = pick_item(&pool, now, rng).ok_or(QuizError::EmptyPool { filter })?;

    let (options, correct_index) = build_options(chosen, items, rng);
    if options.len() < OPTION_COUNT {
        log::debug!(
            "Only {} distinct answers available for {}",
            options.len(),
            chosen.id
        );
    }

    Ok(QuizPrompt {
        item: chosen.clone(),
        options,
        correct_index,
    })
}

fn pick_item<'a, R: Rng + ?Sized>(
    pool: &[&'a LearningItem],
    now: i64,
    rng: &mut R,
) -> Option<&'a LearningItem> {
    let due: Vec<&LearningItem> = pool.iter().copied().filter(|i| i.is_due(now)).collect();
    if !due.is_empty() {
        return due.choose(rng).copied();
    }

    let unseen: Vec<&LearningItem> = pool.iter().copied().filter(|i| i.repetition == 0).collect();
    if !unseen.is_empty() {
        return unseen.choose(rng).copied();
    }

    pool.choose(rng).copied()
}

/// Correct answer plus up to two distinct distractors, in random order.
/// With fewer distinct answers in the vocabulary the list is just shorter.
fn build_options<R: Rng + ?Sized>(
    chosen: &LearningItem,
    items: &[LearningItem],
    rng: &mut R,
) -> (Vec<String>, usize) {
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(chosen.answer.as_str());

    let candidates: Vec<&str> = items
        .iter()
        .filter(|i| i.id != chosen.id)
        .map(|i| i.answer.as_str())
        .filter(|answer| seen.insert(*answer))
        .collect();

    let mut options: Vec<String> = candidates
        .choose_multiple(rng, OPTION_COUNT - 1)
        .map(|answer| answer.to_string())
        .collect();
    options.shuffle(rng);

    let correct_index = rng.gen_range(0..=options.len());
    options.insert(correct_index, chosen.answer.clone());

    (options, correct_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::algorithm::DAY_MS;
    use crate::vocabulary::defaults::default_vocabulary;
    use crate::vocabulary::Category;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const NOW: i64 = 1_700_000_000_000;

    fn item(id: &str, answer: &str, category: Category) -> LearningItem {
        LearningItem::new(id, format!("it-{id}"), answer, category)
    }

    /// Reviewed successfully and not due until tomorrow
    fn scheduled(id: &str, answer: &str, category: Category) -> LearningItem {
        LearningItem {
            repetition: 2,
            interval: 6,
            next_review_date: NOW + DAY_MS,
            ..item(id, answer, category)
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_due_item_always_wins() {
        let mut items: Vec<LearningItem> = (0..9)
            .map(|n| scheduled(&format!("s{n}"), &format!("答{n}"), Category::General))
            .collect();
        let mut due = scheduled("due", "到期", Category::General);
        due.next_review_date = NOW - 1;
        items.insert(4, due);

        let mut rng = rng();
        for _ in 0..200 {
            let prompt = select_next(&items, CategoryFilter::All, NOW, &mut rng).unwrap();
            assert_eq!(prompt.item.id, "due");
        }
    }

    #[test]
    fn test_unseen_item_wins_when_nothing_due() {
        let mut items: Vec<LearningItem> = (0..5)
            .map(|n| scheduled(&format!("s{n}"), &format!("答{n}"), Category::Rules))
            .collect();
        // Failed yesterday: repetition reset, next review still in the future
        let mut failed = item("failed", "失败", Category::Rules);
        failed.interval = 1;
        failed.next_review_date = NOW + DAY_MS / 2;
        items.push(failed);

        let mut rng = rng();
        for _ in 0..100 {
            let prompt = select_next(&items, CategoryFilter::All, NOW, &mut rng).unwrap();
            assert_eq!(prompt.item.id, "failed");
        }
    }

    #[test]
    fn test_falls_back_to_whole_pool() {
        let items: Vec<LearningItem> = (0..4)
            .map(|n| scheduled(&format!("s{n}"), &format!("答{n}"), Category::Vehicle))
            .collect();

        let mut rng = rng();
        let mut picked = HashSet::new();
        for _ in 0..200 {
            let prompt = select_next(&items, CategoryFilter::All, NOW, &mut rng).unwrap();
            picked.insert(prompt.item.id);
        }
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn test_never_leaves_filter() {
        let items = default_vocabulary();
        let mut rng = rng();

        for category in Category::ALL {
            for _ in 0..50 {
                let prompt =
                    select_next(&items, CategoryFilter::Only(category), NOW, &mut rng).unwrap();
                assert_eq!(prompt.item.category, category);
            }
        }
    }

    #[test]
    fn test_empty_pool() {
        let items = vec![item("a", "一", Category::General)];
        let mut rng = rng();

        let err = select_next(&items, CategoryFilter::Only(Category::Safety), NOW, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            QuizError::EmptyPool {
                filter: CategoryFilter::Only(Category::Safety)
            }
        );
        assert!(select_next(&[], CategoryFilter::All, NOW, &mut rng).is_err());
    }

    #[test]
    fn test_options_have_answer_once_and_three_distinct() {
        let items = default_vocabulary();
        let mut rng = rng();

        for _ in 0..200 {
            let prompt = select_next(&items, CategoryFilter::All, NOW, &mut rng).unwrap();
            assert_eq!(prompt.options.len(), OPTION_COUNT);

            let distinct: HashSet<&String> = prompt.options.iter().collect();
            assert_eq!(distinct.len(), OPTION_COUNT);

            let hits = prompt
                .options
                .iter()
                .filter(|o| **o == prompt.item.answer)
                .count();
            assert_eq!(hits, 1);
            assert_eq!(prompt.options[prompt.correct_index], prompt.item.answer);
        }
    }

    #[test]
    fn test_distractors_ignore_category_filter() {
        let items = vec![
            item("only", "安全", Category::Safety),
            item("g1", "一", Category::General),
            item("g2", "二", Category::General),
        ];
        let mut rng = rng();

        let prompt =
            select_next(&items, CategoryFilter::Only(Category::Safety), NOW, &mut rng).unwrap();
        assert_eq!(prompt.item.id, "only");
        assert_eq!(prompt.options.len(), 3);
    }

    #[test]
    fn test_correct_answer_lands_in_every_position() {
        let items = default_vocabulary();
        let mut rng = rng();
        let mut positions = HashSet::new();

        for _ in 0..300 {
            let prompt = select_next(&items, CategoryFilter::All, NOW, &mut rng).unwrap();
            positions.insert(prompt.correct_index);
        }
        assert_eq!(positions, HashSet::from([0, 1, 2]));
    }

    #[test]
    fn test_small_vocabulary_degrades_option_count() {
        let mut rng = rng();

        let one = vec![item("a", "一", Category::General)];
        let prompt = select_next(&one, CategoryFilter::All, NOW, &mut rng).unwrap();
        assert_eq!(prompt.options, vec!["一".to_string()]);
        assert_eq!(prompt.correct_index, 0);

        let two = vec![item("a", "一", Category::General), item("b", "二", Category::General)];
        let prompt = select_next(&two, CategoryFilter::All, NOW, &mut rng).unwrap();
        assert_eq!(prompt.options.len(), 2);
    }

    #[test]
    fn test_duplicate_answers_are_not_distractors() {
        let items = vec![
            item("a", "停车", Category::General),
            item("b", "停车", Category::General),
            item("c", "停车", Category::General),
            item("d", "减速", Category::General),
        ];
        let mut rng = rng();

        for _ in 0..50 {
            let prompt = select_next(&items, CategoryFilter::All, NOW, &mut rng).unwrap();
            let distinct: HashSet<&String> = prompt.options.iter().collect();
            assert_eq!(distinct.len(), prompt.options.len());
            assert_eq!(prompt.options.len(), 2);
        }
    }
}
