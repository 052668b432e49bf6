use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// How far the condition has progressed. Drives the tone of advice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Stage {
    #[default]
    Early,
    Late,
}

impl Stage {
    pub const ALL: [Stage; 2] = [Stage::Early, Stage::Late];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Early => "early",
            Stage::Late => "late",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Early => "Early Stage",
            Stage::Late => "Later Stage",
        }
    }

    /// Short description shown on the stage choice card.
    pub fn description(&self) -> &'static str {
        match self {
            Stage::Early => {
                "Mild forgetfulness, repeating questions, still largely independent."
            }
            Stage::Late => {
                "Confusion about time/place, needs help with daily tasks, potential behavioral changes."
            }
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "early" => Ok(Stage::Early),
            "late" => Ok(Stage::Late),
            _ => Err(CoreError::InvalidStage(s.to_string())),
        }
    }
}

/// Addressable fields of a [`ProfileRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProfileField {
    Name,
    Stage,
    Memories,
    Comforts,
    Music,
    Communication,
    Routines,
    Wishes,
    Dislikes,
}

impl ProfileField {
    /// Every field, in record declaration order.
    pub const ALL: [ProfileField; 9] = [
        ProfileField::Name,
        ProfileField::Stage,
        ProfileField::Memories,
        ProfileField::Comforts,
        ProfileField::Music,
        ProfileField::Communication,
        ProfileField::Routines,
        ProfileField::Wishes,
        ProfileField::Dislikes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Stage => "stage",
            ProfileField::Memories => "memories",
            ProfileField::Comforts => "comforts",
            ProfileField::Music => "music",
            ProfileField::Communication => "communication",
            ProfileField::Routines => "routines",
            ProfileField::Wishes => "wishes",
            ProfileField::Dislikes => "dislikes",
        }
    }

    /// Heading used when the field is shown back to a carer.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Stage => "Stage",
            ProfileField::Memories => "Significant Memories & History",
            ProfileField::Comforts => "Calming Strategies",
            ProfileField::Music => "Favorite Music & Activities",
            ProfileField::Communication => "Communication Style",
            ProfileField::Routines => "Comforting Routines",
            ProfileField::Wishes => "Wishes",
            ProfileField::Dislikes => "Dislikes & Triggers",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        ProfileField::ALL
            .into_iter()
            .find(|f| f.as_str() == key)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// The person being cared for.
///
/// Flat, never partially absent: every text field starts as an empty string
/// and `stage` starts as [`Stage::Early`]. Edits go through
/// [`ProfileRecord::set_field`], one field at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileRecord {
    pub name: String,
    pub stage: Stage,
    pub memories: String,
    pub comforts: String,
    pub music: String,
    pub communication: String,
    pub routines: String,
    pub wishes: String,
    pub dislikes: String,
}

impl ProfileRecord {
    /// Read a field as text. `stage` reads as its key (`early` / `late`).
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Stage => self.stage.as_str(),
            _ => self.text_slot(field).map(String::as_str).unwrap_or_default(),
        }
    }

    /// Replace exactly one field.
    ///
    /// Text fields take any value, including the empty string. The stage
    /// field only takes `early` or `late`; anything else is rejected and
    /// the record is left as it was.
    pub fn set_field(&mut self, field: ProfileField, value: &str) -> Result<(), CoreError> {
        if field == ProfileField::Stage {
            self.stage = value.parse()?;
            return Ok(());
        }
        if let Some(slot) = self.text_slot_mut(field) {
            *slot = value.to_string();
        }
        Ok(())
    }

    /// Value-semantics form of [`ProfileRecord::set_field`].
    pub fn with_field(mut self, field: ProfileField, value: &str) -> Result<Self, CoreError> {
        self.set_field(field, value)?;
        Ok(self)
    }

    /// Whether the field holds something other than its default value.
    pub fn is_provided(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Stage => self.stage != Stage::default(),
            _ => !self.field(field).is_empty(),
        }
    }

    fn text_slot(&self, field: ProfileField) -> Option<&String> {
        match field {
            ProfileField::Name => Some(&self.name),
            ProfileField::Stage => None,
            ProfileField::Memories => Some(&self.memories),
            ProfileField::Comforts => Some(&self.comforts),
            ProfileField::Music => Some(&self.music),
            ProfileField::Communication => Some(&self.communication),
            ProfileField::Routines => Some(&self.routines),
            ProfileField::Wishes => Some(&self.wishes),
            ProfileField::Dislikes => Some(&self.dislikes),
        }
    }

    fn text_slot_mut(&mut self, field: ProfileField) -> Option<&mut String> {
        match field {
            ProfileField::Name => Some(&mut self.name),
            ProfileField::Stage => None,
            ProfileField::Memories => Some(&mut self.memories),
            ProfileField::Comforts => Some(&mut self.comforts),
            ProfileField::Music => Some(&mut self.music),
            ProfileField::Communication => Some(&mut self.communication),
            ProfileField::Routines => Some(&mut self.routines),
            ProfileField::Wishes => Some(&mut self.wishes),
            ProfileField::Dislikes => Some(&mut self.dislikes),
        }
    }
}
