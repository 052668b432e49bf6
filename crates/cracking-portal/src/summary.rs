use serde::Serialize;

use cracking_core::models::profile::{ProfileField, ProfileRecord};

/// Shown in place of any field the carer has not filled in yet.
pub const NOT_YET_PROVIDED: &str = "Not yet provided";

/// One line of the carer summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub field: ProfileField,
    pub label: &'static str,
    /// `None` when the field is empty.
    pub value: Option<String>,
}

impl SummaryRow {
    pub fn display_value<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.value.as_deref().unwrap_or(placeholder)
    }
}

/// Every profile field, in declaration order, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarerSummary {
    pub title: String,
    pub rows: Vec<SummaryRow>,
    /// Fields that differ from their default.
    pub provided: usize,
    pub total: usize,
    pub placeholder: String,
    pub prepared_on: Option<jiff::civil::Date>,
}

impl CarerSummary {
    pub fn from_profile(profile: &ProfileRecord) -> Self {
        let rows: Vec<SummaryRow> = ProfileField::ALL
            .into_iter()
            .map(|field| SummaryRow {
                field,
                label: field.label(),
                value: display_text(profile, field),
            })
            .collect();

        // Stage always has a label to show, but only counts once it
        // differs from its default.
        let provided = ProfileField::ALL
            .into_iter()
            .filter(|field| profile.is_provided(*field))
            .count();
        let title = if profile.name.trim().is_empty() {
            "About your loved one".to_string()
        } else {
            format!("About {}", profile.name.trim())
        };

        Self {
            title,
            total: rows.len(),
            rows,
            provided,
            placeholder: NOT_YET_PROVIDED.to_string(),
            prepared_on: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_prepared_on(mut self, date: jiff::civil::Date) -> Self {
        self.prepared_on = Some(date);
        self
    }

    pub fn row(&self, field: ProfileField) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.field == field)
    }
}

fn display_text(profile: &ProfileRecord, field: ProfileField) -> Option<String> {
    if field == ProfileField::Stage {
        return Some(profile.stage.label().to_string());
    }
    let value = profile.field(field);
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
