use claimdocs_core::document_type::DocumentType;

/// How a single paragraph is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    /// Plain body text.
    Body,
    /// Bold body text, used for addressee lines and section labels.
    Bold,
    /// Centered bold title.
    Heading,
    /// Right-aligned generation date.
    Dateline,
    /// Blank signature rule with extra space above.
    Signature,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub style: BlockStyle,
    pub text: String,
}

/// A rendered document: ordered paragraphs with every field filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub doc_type: DocumentType,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn title(&self) -> Option<&str> {
        self.blocks
            .iter()
            .find(|b| b.style == BlockStyle::Heading)
            .map(|b| b.text.as_str())
    }

    /// All paragraph text joined with newlines.
    pub fn plain_text(&self) -> String {
        let lines: Vec<&str> = self.blocks.iter().map(|b| b.text.as_str()).collect();
        lines.join("\n")
    }
}
