use thiserror::Error;

use cracking_core::error::CoreError;
use cracking_core::models::page::Page;
use cracking_portal::error::PortalError;
use cracking_questionnaire::error::QuestionnaireError;

/// A rejected event or a failed render. State is never changed by an
/// event that returns one of these.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("that action is only available on the {expected} page (currently on {actual})")]
    WrongPage { expected: Page, actual: Page },

    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Portal(#[from] PortalError),
}

/// A line the shell could not turn into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{0}' is not a question number")]
    InvalidNumber(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
