use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The four fixed document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Warrant,
    Consent,
    Demand,
    Notice,
}

impl DocumentType {
    /// Batch order for the all-documents path.
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Warrant,
        DocumentType::Consent,
        DocumentType::Demand,
        DocumentType::Notice,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            DocumentType::Warrant => "warrant",
            DocumentType::Consent => "consent",
            DocumentType::Demand => "demand",
            DocumentType::Notice => "notice",
        }
    }

    /// Filename prefix, e.g. `Warrant_to_Act`.
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Warrant => "Warrant_to_Act",
            DocumentType::Consent => "Medical_Consent",
            DocumentType::Demand => "Letter_of_Demand",
            DocumentType::Notice => "Statutory_Notice",
        }
    }

    /// Name shown in the success summary.
    pub fn display_name(self) -> &'static str {
        match self {
            DocumentType::Warrant => "Warrant to Act",
            DocumentType::Consent => "Consent for Medical Information",
            DocumentType::Demand => "Letter of Demand",
            DocumentType::Notice => "Statutory Notice",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DocumentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| CoreError::InvalidDocType(s.to_string()))
    }
}
