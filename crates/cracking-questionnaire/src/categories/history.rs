use cracking_core::models::profile::ProfileField;

use crate::question::{InputKind, Question, Theme};
use crate::Category;

/// Life Story: long-term memories that act as anchors.
pub struct History;

static QUESTIONS: [Question; 2] = [
    Question {
        field: ProfileField::Memories,
        prompt: "Significant Memories & History",
        helper_text: "Think about jobs, childhood pets, weddings, or proudest moments. These serve as anchors.",
        kind: InputKind::LongText,
        placeholder: Some(
            "e.g. Worked as a carpenter for 40 years, loved his dog 'Buster', grew up in Cornwall...",
        ),
    },
    Question {
        field: ProfileField::Music,
        prompt: "Favorite Music & Activities",
        helper_text: "Specific songs or artists can calm the brain instantly.",
        kind: InputKind::LongText,
        placeholder: Some("e.g. The Beatles, Frank Sinatra, Knitting, Gardening..."),
    },
];

impl Category for History {
    fn id(&self) -> &str {
        "history"
    }

    fn title(&self) -> &str {
        "Life Story"
    }

    fn description(&self) -> &str {
        "Significant memories, hobbies, and history."
    }

    fn theme(&self) -> Theme {
        Theme::Rose
    }

    fn questions(&self) -> &[Question] {
        &QUESTIONS
    }
}
