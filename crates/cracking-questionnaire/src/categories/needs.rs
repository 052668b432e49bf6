use cracking_core::models::profile::ProfileField;

use crate::question::{InputKind, Question, Theme};
use crate::Category;

/// Care Needs: what causes distress and what soothes it.
pub struct Needs;

static QUESTIONS: [Question; 2] = [
    Question {
        field: ProfileField::Dislikes,
        prompt: "Dislikes & Triggers",
        helper_text: "What tends to cause agitation, fear, or distress?",
        kind: InputKind::LongText,
        placeholder: Some("e.g. Loud noises, being rushed, cold rooms, dark corners..."),
    },
    Question {
        field: ProfileField::Comforts,
        prompt: "Calming Strategies",
        helper_text: "What works when things get tough?",
        kind: InputKind::LongText,
        placeholder: Some(
            "e.g. Holding a specific cushion, walking in the garden, hand massage...",
        ),
    },
];

impl Category for Needs {
    fn id(&self) -> &str {
        "needs"
    }

    fn title(&self) -> &str {
        "Care Needs"
    }

    fn description(&self) -> &str {
        "Triggers, dislikes, and soothing strategies."
    }

    fn theme(&self) -> Theme {
        Theme::Green
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }
}
