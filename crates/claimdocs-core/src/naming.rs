//! Output naming conventions.
//!
//! Pure string functions. These define the filenames and MIME types handed
//! to the download collaborator.

use crate::document_type::DocumentType;

pub const DOCX_EXTENSION: &str = "docx";

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const ARCHIVE_MIME: &str = "application/zip";

const ARCHIVE_LABEL: &str = "Legal_Documents";

/// Collapse every run of whitespace into a single underscore.
pub fn underscore_whitespace(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// The client name as it appears inside a filename: whitespace runs become
/// one underscore and path separators become underscores, so the result is
/// always a single path component.
pub fn filename_part(client_name: &str) -> String {
    underscore_whitespace(client_name).replace(['/', '\\'], "_")
}

/// `{Label}_{Client_Name}.docx`
pub fn document_filename(doc_type: DocumentType, client_name: &str) -> String {
    format!(
        "{}_{}.{DOCX_EXTENSION}",
        doc_type.label(),
        filename_part(client_name)
    )
}

/// `Legal_Documents_{Client_Name}.zip`
pub fn archive_filename(client_name: &str) -> String {
    format!("{ARCHIVE_LABEL}_{}.zip", filename_part(client_name))
}
