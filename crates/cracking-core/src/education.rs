//! Static education content, tagged by audience.

use serde::Serialize;

use crate::error::CoreError;
use crate::models::audience::{Audience, AudienceTag};

/// A single expandable education section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EducationEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub audience: AudienceTag,
    pub body: &'static str,
}

impl EducationEntry {
    pub fn icon(&self) -> EntryIcon {
        match self.audience {
            AudienceTag::Patient => EntryIcon::Brain,
            AudienceTag::Carer | AudienceTag::Both => EntryIcon::Activity,
        }
    }
}

/// Icon drawn beside an entry title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryIcon {
    Brain,
    Activity,
}

static ENTRIES: [EducationEntry; 7] = [
    EducationEntry {
        id: "p1",
        title: "Understanding My Brain",
        audience: AudienceTag::Patient,
        body: "Alzheimer's affects how brain cells talk to each other. Imagine a loose connection in a wire; sometimes the signal doesn't get through. This often happens first in the 'Hippocampus', the part of the brain that stores new memories. That's why you might remember your childhood clearly but forget what happened this morning. This is normal for your condition.",
    },
    EducationEntry {
        id: "p2",
        title: "Daily Strategies",
        audience: AudienceTag::Patient,
        body: "Routine is your friend. Keep keys and glasses in the same place. Use a calendar with large writing. If you feel confused, pause, take a deep breath, and ask for help. It is okay to ask. Listening to your favorite music can also help reset your mood if you feel overwhelmed.",
    },
    EducationEntry {
        id: "p3",
        title: "Brain Health",
        audience: AudienceTag::Patient,
        body: "What is good for your heart is good for your brain. Gentle walking, eating colorful vegetables, and staying hydrated help. Socializing is also exercise for the brain! Even a short chat counts.",
    },
    EducationEntry {
        id: "c1",
        title: "The \"Why\" Behind Behavior",
        audience: AudienceTag::Carer,
        body: "Behavior is communication. When a loved one is agitated, repetitive, or confused, they are often expressing an unmet need (pain, hunger, fear, boredom) that they cannot articulate verbally. Neurodegeneration affects the brain's ability to process the world, often making it feel overwhelming or scary. They are not doing this to annoy you intentionally.",
    },
    EducationEntry {
        id: "c2",
        title: "Short-term vs. Long-term Memory",
        audience: AudienceTag::Carer,
        body: "The 'file cabinet' for recent memories (Hippocampus) is damaged early on. However, the 'library' of old memories is often preserved much longer. This is why they may not know what they ate for lunch but can sing every word to a song from 1960. Use this! Connect through old music, photos, and stories.",
    },
    EducationEntry {
        id: "c3",
        title: "Communication Strategies",
        audience: AudienceTag::Carer,
        body: "1. **Validate, don't correct.** If they say they need to go to work (but retired 20 years ago), don't argue. Say 'You must miss work, tell me about your favorite colleague.'\n2. **Short, simple sentences.** Give one instruction at a time.\n3. **Watch non-verbal cues.** Your tone and facial expression convey more safety than your words.",
    },
    EducationEntry {
        id: "c4",
        title: "Carer Wellbeing",
        audience: AudienceTag::Carer,
        body: "You cannot pour from an empty cup. Carer burnout is real and common. Take 5 minutes for yourself when you can. Join a support group. Remember, their behavior is the disease, not the person.",
    },
];

/// Every entry, in declaration order.
pub fn all_entries() -> &'static [EducationEntry] {
    &ENTRIES
}

/// Look up an entry by ID.
pub fn get_entry(id: &str) -> Option<&'static EducationEntry> {
    ENTRIES.iter().find(|e| e.id == id)
}

/// Entries for one audience, in declaration order. `Both`-tagged entries
/// are included for either audience.
pub fn filter_by_audience(audience: Audience) -> Vec<&'static EducationEntry> {
    ENTRIES
        .iter()
        .filter(|e| e.audience.includes(audience))
        .collect()
}

/// The "Did you know?" tip shown beneath the entry list.
pub fn did_you_know(audience: Audience) -> &'static str {
    match audience {
        Audience::Patient => {
            "Learning new things, like a new simple card game or listening to audiobooks, can help keep your brain active."
        }
        Audience::Carer => {
            "Studies show that carers who join support groups and learn about the disease experience significantly less stress and depression."
        }
    }
}

/// Expansion state of the education list. At most one entry is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    expanded: Option<&'static str>,
}

impl Accordion {
    pub fn expanded(&self) -> Option<&'static str> {
        self.expanded
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded == Some(id)
    }

    /// Open the entry, or close it if it is already open. Opening one entry
    /// closes any other.
    pub fn toggle(&mut self, id: &str) -> Result<(), CoreError> {
        let entry = get_entry(id).ok_or_else(|| CoreError::UnknownEntry(id.to_string()))?;
        self.expanded = if self.is_expanded(entry.id) {
            None
        } else {
            Some(entry.id)
        };
        Ok(())
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}
