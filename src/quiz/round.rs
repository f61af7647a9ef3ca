//! A single multiple-choice round

use serde::Serialize;

use super::selector::QuizPrompt;
use super::{QuizError, Result};
use crate::vocabulary::algorithm::{quality_for_answer, update_progress};
use crate::vocabulary::LearningItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum RoundState {
    Unanswered,
    Answered { selected: usize, correct: bool },
}

/// Result of the first answer given in a round
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The item rescheduled by the answer, to be written back by the caller
    pub updated: LearningItem,
}

/// One quiz attempt: the prompt, its options and what was picked.
///
/// Only the first valid answer counts; later calls leave the round as it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRound {
    prompt: QuizPrompt,
    state: RoundState,
}

impl QuizRound {
    pub fn new(prompt: QuizPrompt) -> Self {
        Self {
            prompt,
            state: RoundState::Unanswered,
        }
    }

    pub fn item(&self) -> &LearningItem {
        &self.prompt.item
    }

    pub fn options(&self) -> &[String] {
        &self.prompt.options
    }

    pub fn correct_index(&self) -> usize {
        self.prompt.correct_index
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self.state {
            RoundState::Unanswered => None,
            RoundState::Answered { selected, .. } => Some(selected),
        }
    }

    pub fn is_correct(&self) -> Option<bool> {
        match self.state {
            RoundState::Unanswered => None,
            RoundState::Answered { correct, .. } => Some(correct),
        }
    }

    /// Pick option `index` at time `now`.
    ///
    /// Returns `Ok(None)` if the round was already answered.
    pub fn answer(&mut self, index: usize, now: i64) -> Result<Option<AnswerOutcome>> {
        if let RoundState::Answered { .. } = self.state {
            return Ok(None);
        }

        let selected = self
            .prompt
            .options
            .get(index)
            .ok_or(QuizError::OptionOutOfRange {
                index,
                len: self.prompt.options.len(),
            })?;

        let correct = *selected == self.prompt.item.answer;
        self.state = RoundState::Answered {
            selected: index,
            correct,
        };

        let updated = update_progress(&self.prompt.item, quality_for_answer(correct), now);
        log::info!(
            "Answered {} {}, next review in {}d",
            self.prompt.item.id,
            if correct { "correctly" } else { "incorrectly" },
            updated.interval
        );

        Ok(Some(AnswerOutcome { correct, updated }))
    }
}
