use cracking_core::models::profile::ProfileField;

use crate::question::{InputKind, Question, Theme};
use crate::Category;

/// The Basics: who the profile is about and how far the condition has gone.
pub struct Basics;

static QUESTIONS: [Question; 2] = [
    Question {
        field: ProfileField::Name,
        prompt: "What is the name of the person living with Alzheimer's?",
        helper_text: "We'll use this to personalize all our advice.",
        kind: InputKind::ShortText,
        placeholder: Some("e.g. Robert, Mom, or my name"),
    },
    Question {
        field: ProfileField::Stage,
        prompt: "Which stage best describes the condition?",
        helper_text: "This helps us tailor the complexity of our strategies.",
        kind: InputKind::SingleChoiceStage,
        placeholder: None,
    },
];

impl Category for Basics {
    fn id(&self) -> &str {
        "basics"
    }

    fn title(&self) -> &str {
        "The Basics"
    }

    fn description(&self) -> &str {
        "Name and current stage of the condition."
    }

    fn theme(&self) -> Theme {
        Theme::Blue
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }
}
