use serde::Serialize;
use tracing::{debug, warn};

use cracking_core::education::Accordion;
use cracking_core::models::audience::Audience;
use cracking_core::models::page::Page;
use cracking_core::models::profile::{ProfileField, ProfileRecord};
use cracking_questionnaire::Catalog;
use cracking_questionnaire::navigator::{Navigator, Position, Step};

use crate::error::AppError;

/// A discrete user input. Events are applied one at a time, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Page),
    SetAudience(Audience),
    /// Expand or collapse an education entry.
    ToggleEntry(String),
    SelectCategory(String),
    Next,
    Back,
    Close,
    /// Jump to a question (zero-based) in the open category.
    GoTo(usize),
    /// Answer the current question.
    Answer(String),
    /// Edit any profile field directly, bypassing the questionnaire.
    SetField { field: ProfileField, value: String },
}

/// The state handed to views after every event.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub page: Page,
    pub profile: ProfileRecord,
    pub audience: Audience,
    pub position: Position,
}

/// Everything the application knows, owned in one place.
///
/// The profile record lives here and only changes one field at a time.
/// Page-local view state (questionnaire position, expanded education entry)
/// is dropped when the user leaves that page.
pub struct AppState {
    page: Page,
    profile: ProfileRecord,
    audience: Audience,
    navigator: Navigator<'static>,
    accordion: Accordion,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Audience::default())
    }
}

impl AppState {
    pub fn new(audience: Audience) -> Self {
        Self::with_catalog(Catalog::reference(), audience)
    }

    pub fn with_catalog(catalog: &'static Catalog, audience: Audience) -> Self {
        Self {
            page: Page::Home,
            profile: ProfileRecord::default(),
            audience,
            navigator: Navigator::new(catalog),
            accordion: Accordion::default(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    pub fn audience(&self) -> Audience {
        self.audience
    }

    pub fn navigator(&self) -> &Navigator<'static> {
        &self.navigator
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            page: self.page,
            profile: self.profile.clone(),
            audience: self.audience,
            position: self.navigator.position().clone(),
        }
    }

    /// Apply one event. On error nothing has changed.
    ///
    /// Returns the questionnaire step for `Next` and `Back`.
    pub fn dispatch(&mut self, event: Event) -> Result<Option<Step>, AppError> {
        debug!(?event, page = %self.page, "dispatch");
        let result = self.apply(event);
        if let Err(e) = &result {
            warn!(error = %e, page = %self.page, "event rejected");
        }
        result
    }

    fn apply(&mut self, event: Event) -> Result<Option<Step>, AppError> {
        match event {
            Event::Navigate(page) => {
                self.navigate(page);
                Ok(None)
            }
            Event::SetAudience(audience) => {
                self.audience = audience;
                Ok(None)
            }
            Event::ToggleEntry(id) => {
                self.require_page(Page::Education)?;
                self.accordion.toggle(&id)?;
                Ok(None)
            }
            Event::SelectCategory(id) => {
                self.require_page(Page::Personalisation)?;
                self.navigator.select_category(&id)?;
                Ok(None)
            }
            Event::Next => {
                self.require_page(Page::Personalisation)?;
                Ok(Some(self.navigator.next()?))
            }
            Event::Back => {
                self.require_page(Page::Personalisation)?;
                Ok(Some(self.navigator.back()?))
            }
            Event::Close => {
                self.require_page(Page::Personalisation)?;
                self.navigator.close();
                Ok(None)
            }
            Event::GoTo(index) => {
                self.require_page(Page::Personalisation)?;
                self.navigator.go_to(index)?;
                Ok(None)
            }
            Event::Answer(value) => {
                self.require_page(Page::Personalisation)?;
                self.navigator.update_field(&mut self.profile, &value)?;
                Ok(None)
            }
            Event::SetField { field, value } => {
                self.profile.set_field(field, &value)?;
                debug!(%field, "profile field set directly");
                Ok(None)
            }
        }
    }

    /// Unconditional. Edits are already saved, so there is nothing to confirm.
    fn navigate(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        match self.page {
            Page::Personalisation => self.navigator.close(),
            Page::Education => self.accordion.collapse(),
            Page::Home | Page::CarerPortal => {}
        }
        debug!(from = %self.page, to = %page, "navigate");
        self.page = page;
    }

    fn require_page(&self, expected: Page) -> Result<(), AppError> {
        if self.page == expected {
            Ok(())
        } else {
            Err(AppError::WrongPage {
                expected,
                actual: self.page,
            })
        }
    }
}
