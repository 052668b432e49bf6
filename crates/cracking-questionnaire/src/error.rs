use thiserror::Error;

use cracking_core::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionnaireError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("question {index} is out of range for category '{category_id}' ({len} questions)")]
    QuestionOutOfRange {
        category_id: String,
        index: usize,
        len: usize,
    },

    #[error("no category is open")]
    NotAsking,

    #[error(transparent)]
    Profile(#[from] CoreError),
}
