use cracking_core::models::profile::ProfileField;

use crate::question::{InputKind, Question, Theme};
use crate::Category;

pub struct Daily;

static QUESTIONS: [Question; 2] = [
    Question {
        field: ProfileField::Routines,
        prompt: "Comforting Routines",
        helper_text: "What small daily habits provide structure and safety?",
        kind: InputKind::LongText,
        placeholder: Some("e.g. A cup of tea at 3pm, watching the news at 6, morning walk..."),
    },
    Question {
        field: ProfileField::Communication,
        prompt: "Communication Style",
        helper_text: "How do they best receive information or express themselves?",
        kind: InputKind::LongText,
        placeholder: Some("e.g. Needs short sentences, responds well to touch, speaks slowly..."),
    },
];

impl Category for Daily {
    fn id(&self) -> &str {
        "daily"
    }

    fn title(&self) -> &str {
        "Daily Life"
    }

    fn description(&self) -> &str {
        "Routines and communication preferences."
    }

    fn theme(&self) -> Theme {
        Theme::Amber
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }
}
