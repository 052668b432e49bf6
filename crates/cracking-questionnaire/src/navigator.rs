//! Questionnaire navigation.
//!
//! ```text
//! Overview --select(id)--> Asking(id, 0)
//! Asking(id, i) --next--> Asking(id, i + 1) | Overview (after the last question)
//! Asking(id, i) --back--> Asking(id, i - 1) | Overview (from the first question)
//! Asking(id, i) --close--> Overview
//! ```
//!
//! Moving between questions never edits the profile; answers are written
//! through [`Navigator::update_field`]. Rejected transitions leave the
//! position untouched.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use cracking_core::models::profile::{ProfileField, ProfileRecord};

use crate::error::QuestionnaireError;
use crate::question::Question;
use crate::{Catalog, Category};

/// Where the user is in the questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Position {
    /// The category grid.
    #[default]
    Overview,
    /// A flashcard for one question.
    Asking {
        category_id: String,
        question_index: usize,
    },
}

/// Outcome of a `next` or `back` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Moved to the following question.
    Advanced,
    /// Finished the last question; back at the overview.
    Completed,
    /// Moved to the previous question.
    Retreated,
    /// Backed out of the first question; back at the overview.
    Cancelled,
}

pub struct Navigator<'c> {
    catalog: &'c Catalog,
    position: Position,
}

impl<'c> Navigator<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            position: Position::Overview,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Open a category at its first question. Unknown IDs are rejected.
    pub fn select_category(&mut self, id: &str) -> Result<(), QuestionnaireError> {
        let Some(category) = self.catalog.get(id) else {
            warn!(category_id = %id, "rejected selection of unknown category");
            return Err(QuestionnaireError::UnknownCategory(id.to_string()));
        };
        if category.questions().is_empty() {
            warn!(category_id = %id, "rejected selection of empty category");
            return Err(QuestionnaireError::QuestionOutOfRange {
                category_id: id.to_string(),
                index: 0,
                len: 0,
            });
        }

        debug!(category_id = %id, "category selected");
        self.position = Position::Asking {
            category_id: category.id().to_string(),
            question_index: 0,
        };
        Ok(())
    }

    pub fn next(&mut self) -> Result<Step, QuestionnaireError> {
        let (category, index) = self.active()?;
        let step = if index + 1 < category.questions().len() {
            self.set_index(index + 1);
            Step::Advanced
        } else {
            debug!(category_id = %category.id(), "category completed");
            self.position = Position::Overview;
            Step::Completed
        };
        Ok(step)
    }

    pub fn back(&mut self) -> Result<Step, QuestionnaireError> {
        let (category, index) = self.active()?;
        let step = if index > 0 {
            self.set_index(index - 1);
            Step::Retreated
        } else {
            debug!(category_id = %category.id(), "category cancelled");
            self.position = Position::Overview;
            Step::Cancelled
        };
        Ok(step)
    }

    /// Return to the overview from anywhere. A no-op when already there.
    pub fn close(&mut self) {
        if self.position != Position::Overview {
            debug!("questionnaire closed");
        }
        self.position = Position::Overview;
    }

    /// Jump to a question within the open category.
    pub fn go_to(&mut self, index: usize) -> Result<(), QuestionnaireError> {
        let (category, _) = self.active()?;
        let len = category.questions().len();
        if index >= len {
            warn!(category_id = %category.id(), index, len, "rejected jump past last question");
            return Err(QuestionnaireError::QuestionOutOfRange {
                category_id: category.id().to_string(),
                index,
                len,
            });
        }
        self.set_index(index);
        Ok(())
    }

    pub fn current_category(&self) -> Option<&'c dyn Category> {
        self.active().ok().map(|(category, _)| category)
    }

    pub fn current_question(&self) -> Option<&'c Question> {
        self.active()
            .ok()
            .and_then(|(category, index)| category.question(index))
    }

    /// `(index + 1) / len` for the open category, in `(0, 1]`.
    pub fn progress_ratio(&self) -> Option<f64> {
        self.question_number()
            .map(|(number, total)| number as f64 / total as f64)
    }

    /// One-based question number and the category's question count.
    pub fn question_number(&self) -> Option<(usize, usize)> {
        self.active()
            .ok()
            .map(|(category, index)| (index + 1, category.questions().len()))
    }

    pub fn is_last_question(&self) -> bool {
        self.question_number()
            .is_some_and(|(number, total)| number == total)
    }

    pub fn next_label(&self) -> Option<&'static str> {
        self.question_number().map(|(number, total)| {
            if number == total { "Finish" } else { "Next" }
        })
    }

    pub fn back_label(&self) -> Option<&'static str> {
        self.question_number()
            .map(|(number, _)| if number == 1 { "Cancel" } else { "Back" })
    }

    /// Write an answer to the field bound to the current question.
    pub fn update_field(
        &self,
        profile: &mut ProfileRecord,
        raw: &str,
    ) -> Result<ProfileField, QuestionnaireError> {
        let question = self.current_question().ok_or(QuestionnaireError::NotAsking)?;
        profile.set_field(question.field, raw)?;
        debug!(field = %question.field, "profile field updated");
        Ok(question.field)
    }

    fn active(&self) -> Result<(&'c dyn Category, usize), QuestionnaireError> {
        match &self.position {
            Position::Overview => Err(QuestionnaireError::NotAsking),
            Position::Asking {
                category_id,
                question_index,
            } => self
                .catalog
                .get(category_id)
                .map(|category| (category, *question_index))
                .ok_or_else(|| QuestionnaireError::UnknownCategory(category_id.clone())),
        }
    }

    fn set_index(&mut self, index: usize) {
        if let Position::Asking { question_index, .. } = &mut self.position {
            *question_index = index;
        }
    }
}
