//! cracking-questionnaire
//!
//! The guided personalisation questionnaire. Pure data plus a small state
//! machine: categories of flashcard questions, each bound to one field of
//! the profile record, and a navigator that walks through them.

pub mod categories;
pub mod error;
pub mod navigator;
pub mod question;

use std::sync::LazyLock;

use cracking_core::models::profile::{ProfileField, ProfileRecord};
use question::{Question, Theme};

/// Trait implemented by each questionnaire category.
pub trait Category: Send + Sync {
    /// Unique identifier (e.g., "basics", "history").
    fn id(&self) -> &str;

    /// Card heading (e.g., "Life Story").
    fn title(&self) -> &str;

    fn description(&self) -> &str;

    fn theme(&self) -> Theme;

    /// The questions of this category, in the order they are asked.
    fn questions(&self) -> &[Question];

    fn question(&self, index: usize) -> Option<&Question> {
        self.questions().get(index)
    }

    /// A category counts as started while at least one of its bound fields
    /// holds something other than its default. Derived on every call.
    fn is_started(&self, profile: &ProfileRecord) -> bool {
        self.questions().iter().any(|q| profile.is_provided(q.field))
    }

    /// Call to action on the overview card.
    fn card_action_label(&self, profile: &ProfileRecord) -> &'static str {
        if self.is_started(profile) {
            "Edit Details"
        } else {
            "Start Section"
        }
    }

    /// Format this category's answers as structured text.
    fn to_structured_summary(&self, profile: &ProfileRecord) -> String {
        let mut output = format!("### {}\n", self.title());
        for question in self.questions() {
            let answer = profile.field(question.field);
            if !answer.is_empty() {
                output.push_str(&format!("- {}: {}\n", question.field.label(), answer));
            }
        }
        output
    }
}

/// An ordered, immutable set of categories.
pub struct Catalog {
    categories: Vec<Box<dyn Category>>,
}

impl Catalog {
    pub fn new(categories: Vec<Box<dyn Category>>) -> Self {
        Self { categories }
    }

    /// The built-in catalog, constructed once per process.
    pub fn reference() -> &'static Catalog {
        static REFERENCE: LazyLock<Catalog> = LazyLock::new(|| {
            Catalog::new(vec![
                Box::new(categories::basics::Basics),
                Box::new(categories::history::History),
                Box::new(categories::daily::Daily),
                Box::new(categories::needs::Needs),
            ])
        });
        &REFERENCE
    }

    pub fn categories(&self) -> &[Box<dyn Category>] {
        &self.categories
    }

    /// Look up a category by ID.
    pub fn get(&self, id: &str) -> Option<&dyn Category> {
        self.categories
            .iter()
            .find(|c| c.id() == id)
            .map(|c| &**c as &dyn Category)
    }

    /// The category that asks about `field`, if any.
    pub fn category_for_field(&self, field: ProfileField) -> Option<&dyn Category> {
        self.categories
            .iter()
            .find(|c| c.questions().iter().any(|q| q.field == field))
            .map(|c| &**c as &dyn Category)
    }

    /// Profile fields no question is bound to. These can only be edited
    /// directly, never through the guided flow.
    pub fn unbound_fields(&self) -> Vec<ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(|f| self.category_for_field(*f).is_none())
            .collect()
    }

    /// `None` when the category does not exist.
    pub fn is_started(&self, id: &str, profile: &ProfileRecord) -> Option<bool> {
        self.get(id).map(|c| c.is_started(profile))
    }
}
