use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Who is reading the education content. Selected by the patient/carer toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Audience {
    Patient,
    #[default]
    Carer,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Patient => "patient",
            Audience::Carer => "carer",
        }
    }

    /// Label on the toggle button.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Audience::Patient => "For Patients",
            Audience::Carer => "For Carers",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Audience {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "patient" | "patients" => Ok(Audience::Patient),
            "carer" | "carers" => Ok(Audience::Carer),
            _ => Err(CoreError::UnknownAudience(s.to_string())),
        }
    }
}

/// Audience an education entry is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AudienceTag {
    Patient,
    Carer,
    Both,
}

impl AudienceTag {
    /// `Both` matches either audience.
    pub fn includes(&self, audience: Audience) -> bool {
        match self {
            AudienceTag::Both => true,
            AudienceTag::Patient => audience == Audience::Patient,
            AudienceTag::Carer => audience == Audience::Carer,
        }
    }
}
