use serde::{Deserialize, Serialize};

/// Document styling for the printable carer summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    pub body_font: String,

    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title (`# `) font size in points.
    pub title_size: usize,

    /// Section heading (`## `) font size in points.
    pub heading_size: usize,

    /// Hex colour for the "not yet provided" placeholder text.
    pub placeholder_color: String,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Arial".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 14,
            title_size: 22,
            heading_size: 16,
            placeholder_color: "808080".to_string(),
        }
    }
}
