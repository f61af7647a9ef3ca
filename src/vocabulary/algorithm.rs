//! SM-2 Spaced Repetition Algorithm
//!
//! Variant of SuperMemo 2 used to reschedule a vocabulary item after each
//! quiz answer.
//!
//! Quality ratings (0-5):
//! - 0: Complete blackout, no recall
//! - 1: Incorrect, but upon seeing answer, remembered
//! - 2: Incorrect, but answer seemed easy to recall
//! - 3: Correct response with serious difficulty
//! - 4: Correct response after hesitation
//! - 5: Perfect response with no hesitation

use chrono::Utc;

use super::models::LearningItem;

/// Minimum ease factor allowed
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// Lowest quality that counts as a successful recall
pub const PASSING_QUALITY: i32 = 3;

pub const MAX_QUALITY: i32 = 5;

/// One day in milliseconds
pub const DAY_MS: i64 = 86_400_000;

/// Current wall-clock time as epoch milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Compute the item's next learning state after an answer of `quality`.
///
/// The input is left untouched; the returned item differs only in
/// `repetition`, `interval`, `ease_factor` and `next_review_date`.
/// Out-of-range input is clamped and logged rather than rejected.
pub fn update_progress(item: &LearningItem, quality: i32, now: i64) -> LearningItem {
    let quality = clamp_quality(quality, &item.id);
    let prior_ease = sanitize_ease_factor(item.ease_factor, &item.id);

    let (repetition, interval) = if quality >= PASSING_QUALITY {
        let interval = match item.repetition {
            0 => 1,
            1 => 6,
            // Stored records may lack an interval; never schedule 0 days ahead
            _ => ((item.interval as f64 * prior_ease).round() as u32).max(1),
        };
        (item.repetition.saturating_add(1), interval)
    } else {
        // Failed recall starts the sequence over
        (0, 1)
    };

    // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02))
    let miss = (MAX_QUALITY - quality) as f64;
    let ease_factor = (prior_ease + (0.1 - miss * (0.08 + miss * 0.02))).max(MIN_EASE_FACTOR);

    let next_review_date = now + interval as i64 * DAY_MS;

    log::debug!(
        "Rescheduled {} (q={}): rep {} -> {}, interval {} -> {}d, ef {:.2} -> {:.2}",
        item.id,
        quality,
        item.repetition,
        repetition,
        item.interval,
        interval,
        item.ease_factor,
        ease_factor
    );

    LearningItem {
        repetition,
        interval,
        ease_factor,
        next_review_date,
        ..item.clone()
    }
}

fn clamp_quality(quality: i32, item_id: &str) -> i32 {
    let clamped = quality.clamp(0, MAX_QUALITY);
    if clamped != quality {
        log::warn!(
            "Quality {} for item {} is outside 0-{}, using {}",
            quality,
            item_id,
            MAX_QUALITY,
            clamped
        );
    }
    clamped
}

fn sanitize_ease_factor(ease_factor: f64, item_id: &str) -> f64 {
    if ease_factor.is_finite() && ease_factor >= MIN_EASE_FACTOR {
        ease_factor
    } else {
        log::warn!(
            "Ease factor {} for item {} is below {}, raising it",
            ease_factor,
            item_id,
            MIN_EASE_FACTOR
        );
        MIN_EASE_FACTOR
    }
}

/// Map a multiple-choice outcome to an SM-2 quality
pub fn quality_for_answer(correct: bool) -> i32 {
    if correct {
        MAX_QUALITY
    } else {
        0
    }
}

/// Calculate the preview intervals for each quality rating
/// Used to show users what interval each rating would give
pub fn preview_intervals(item: &LearningItem) -> [u32; 4] {
    // Again, Hard, Good, Easy -> qualities 1, 3, 4, 5
    [1, 3, 4, 5].map(|q| update_progress(item, q, 0).interval)
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: i64) -> String {
    if days <= 0 {
        "now".to_string()
    } else if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}
