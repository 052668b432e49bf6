use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown profile field: {0}")]
    UnknownField(String),

    #[error("invalid stage '{0}': expected 'early' or 'late'")]
    InvalidStage(String),

    #[error("unknown audience '{0}': expected 'patient' or 'carer'")]
    UnknownAudience(String),

    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("unknown education entry: {0}")]
    UnknownEntry(String),
}
