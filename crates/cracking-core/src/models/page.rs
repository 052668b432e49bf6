use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Top-level screens of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Page {
    #[default]
    Home,
    Education,
    Personalisation,
    CarerPortal,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::Education,
        Page::Personalisation,
        Page::CarerPortal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Education => "education",
            Page::Personalisation => "personalisation",
            Page::CarerPortal => "carer-portal",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Cracking The Code",
            Page::Education => "Education",
            Page::Personalisation => "Personalisation",
            Page::CarerPortal => "Carer Portal",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(Page::Home),
            "education" => Ok(Page::Education),
            "personalisation" | "profile" => Ok(Page::Personalisation),
            "carer-portal" | "portal" => Ok(Page::CarerPortal),
            _ => Err(CoreError::UnknownPage(s.to_string())),
        }
    }
}
