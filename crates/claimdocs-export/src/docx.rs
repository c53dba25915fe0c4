use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, LineSpacing, Paragraph, Run, RunFonts, Style, StyleType};

use crate::document::{Block, BlockStyle, Document};
use crate::error::ExportError;
use crate::styles::DocumentStyles;

const HEADING_STYLE_ID: &str = "Heading1";

/// Serialize a rendered [`Document`] to DOCX bytes.
///
/// Block styles map onto OOXML paragraph properties:
/// - `Heading` → Heading 1, centered, bold
/// - `Dateline` → right-aligned
/// - `Bold` → bold run
/// - `Signature` → extra space before
/// - `Body` → normal paragraph
pub fn generate_docx(document: &Document, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new().add_style(heading_style(styles.heading_size));

    for block in &document.blocks {
        docx = docx.add_paragraph(paragraph(block, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(size_pt: usize) -> Style {
    Style::new(HEADING_STYLE_ID, StyleType::Paragraph)
        .name("heading 1")
        .size(size_pt * 2) // OOXML uses half-points
}

fn paragraph(block: &Block, styles: &DocumentStyles) -> Paragraph {
    match block.style {
        BlockStyle::Heading => Paragraph::new()
            .style(HEADING_STYLE_ID)
            .align(AlignmentType::Center)
            .line_spacing(LineSpacing::new().after(styles.section_after))
            .add_run(
                run(&block.text, &styles.heading_font, styles.heading_size).bold(),
            ),
        BlockStyle::Dateline => Paragraph::new()
            .align(AlignmentType::Right)
            .line_spacing(LineSpacing::new().after(styles.section_after))
            .add_run(run(&block.text, &styles.body_font, styles.body_size)),
        BlockStyle::Bold => body_paragraph(styles)
            .add_run(run(&block.text, &styles.body_font, styles.body_size).bold()),
        BlockStyle::Signature => Paragraph::new()
            .line_spacing(
                LineSpacing::new()
                    .before(styles.signature_before)
                    .after(styles.paragraph_after),
            )
            .add_run(run(&block.text, &styles.body_font, styles.body_size)),
        BlockStyle::Body => body_paragraph(styles)
            .add_run(run(&block.text, &styles.body_font, styles.body_size)),
    }
}

fn body_paragraph(styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().line_spacing(LineSpacing::new().after(styles.paragraph_after))
}

fn run(text: &str, font: &str, size_pt: usize) -> Run {
    Run::new()
        .add_text(text)
        .size(size_pt * 2)
        .fonts(RunFonts::new().ascii(font))
}
