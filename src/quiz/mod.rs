//! Review selection and quiz rounds

pub mod round;
pub mod selector;

use thiserror::Error;

use crate::vocabulary::CategoryFilter;

pub use round::{AnswerOutcome, QuizRound, RoundState};
pub use selector::{select_next, QuizPrompt, OPTION_COUNT};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    #[error("No items available for {filter}")]
    EmptyPool { filter: CategoryFilter },

    #[error("Option {index} out of range ({len} options)")]
    OptionOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, QuizError>;
