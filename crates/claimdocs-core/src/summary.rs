use serde::{Deserialize, Serialize};

use crate::document_type::DocumentType;

/// The document types produced by one generation action, in production order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedDocumentSet(Vec<DocumentType>);

impl GeneratedDocumentSet {
    pub fn push(&mut self, doc_type: DocumentType) {
        self.0.push(doc_type);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn types(&self) -> &[DocumentType] {
        &self.0
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.0.iter().map(|t| t.tag()).collect()
    }

    /// Success summary text, or `None` when nothing was generated.
    pub fn summary(&self) -> Option<String> {
        if self.0.is_empty() {
            return None;
        }
        let mut out = String::from(
            "Documents Generated Successfully\n\
             The following documents have been generated and downloaded:\n",
        );
        for doc_type in &self.0 {
            out.push_str("  - ");
            out.push_str(doc_type.display_name());
            out.push('\n');
        }
        out.push_str("Check your downloads folder for the generated Word documents.");
        Some(out)
    }
}

impl From<Vec<DocumentType>> for GeneratedDocumentSet {
    fn from(types: Vec<DocumentType>) -> Self {
        Self(types)
    }
}
