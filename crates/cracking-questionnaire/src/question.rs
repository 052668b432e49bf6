use serde::Serialize;

use cracking_core::models::profile::ProfileField;

/// How a question collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// Single-line text.
    ShortText,
    /// Multi-line free text.
    LongText,
    /// Early / late stage choice cards.
    SingleChoiceStage,
}

/// Accent colour of a category card and its flashcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Blue,
    Rose,
    Amber,
    Green,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Blue => "blue",
            Theme::Rose => "rose",
            Theme::Amber => "amber",
            Theme::Green => "green",
        }
    }
}

/// One flashcard in a category, bound to a single profile field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub field: ProfileField,
    pub prompt: &'static str,
    pub helper_text: &'static str,
    pub kind: InputKind,
    pub placeholder: Option<&'static str>,
}
