use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
///
/// Sizes are in points; spacing values are in twentieths of a point, as
/// OOXML stores them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Times New Roman", "Calibri").
    pub body_font: String,

    /// Font for the title heading.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title heading font size in points.
    pub heading_size: usize,

    /// Space after each body paragraph.
    pub paragraph_after: u32,

    /// Space after the title heading and the date line.
    pub section_after: u32,

    /// Space before the signature line.
    pub signature_before: u32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 12,
            heading_size: 14,
            paragraph_after: 200,
            section_after: 400,
            signature_before: 600,
        }
    }
}
