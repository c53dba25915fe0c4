use std::collections::HashSet;
use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::write::FileOptions;

use crate::error::ExportError;

/// A named file destined for an archive.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Bundle `entries` into one zip buffer, preserving their order.
///
/// Duplicate filenames are rejected rather than silently overwritten.
pub fn bundle(entries: &[ArchiveEntry]) -> Result<Vec<u8>, ExportError> {
    let mut seen = HashSet::new();
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        if !seen.insert(entry.filename.as_str()) {
            return Err(ExportError::Archive(format!(
                "duplicate entry: {}",
                entry.filename
            )));
        }
        writer.start_file(entry.filename.as_str(), options)?;
        writer.write_all(&entry.bytes)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
