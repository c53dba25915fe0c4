//! Generation actions: one document, every document, or a zip of a
//! selection. Each action works on one immutable [`ClientDetails`] snapshot
//! and runs its steps sequentially.
//!
//! Everything here blocks: rendering, packing and the download sink's file
//! writes. Async callers run an action on a blocking thread.

use std::time::Duration;

use claimdocs_core::client::ClientDetails;
use claimdocs_core::document_type::DocumentType;
use claimdocs_core::naming;
use claimdocs_core::summary::GeneratedDocumentSet;
use jiff::civil::Date;
use tracing::{error, info, warn};

use crate::archive::{self, ArchiveEntry};
use crate::document::Document;
use crate::docx::generate_docx;
use crate::download::Download;
use crate::error::ExportError;
use crate::styles::DocumentStyles;
use crate::templates;

/// Notice shown when generation is requested with nothing selected.
pub const EMPTY_SELECTION_NOTICE: &str = "Please select at least one document to generate.";

/// Pause between successive downloads in [`DocumentGenerator::generate_all_documents`].
pub const DEFAULT_DOWNLOAD_PAUSE: Duration = Duration::from_millis(500);

pub const DEFAULT_DATE_FORMAT: &str = "%Y/%m/%d";

#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub styles: DocumentStyles,
    /// strftime pattern for the date line.
    pub date_format: String,
    /// Zero disables the pause.
    pub download_pause: Duration,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            styles: DocumentStyles::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            download_pause: DEFAULT_DOWNLOAD_PAUSE,
        }
    }
}

/// Result of [`DocumentGenerator::generate_selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Nothing was selected; no document was built.
    Refused { notice: &'static str },
    /// One file, or one archive holding every selected document.
    Generated(GeneratedDocumentSet),
}

pub struct DocumentGenerator<D> {
    details: ClientDetails,
    download: D,
    options: GeneratorOptions,
}

impl<D: Download> DocumentGenerator<D> {
    pub fn new(details: ClientDetails, download: D, options: GeneratorOptions) -> Self {
        Self {
            details,
            download,
            options,
        }
    }

    /// Render `doc_type` stamped with today's date.
    pub fn render(&self, doc_type: DocumentType) -> Result<Document, ExportError> {
        self.render_on(doc_type, today())
    }

    pub fn render_on(&self, doc_type: DocumentType, date: Date) -> Result<Document, ExportError> {
        templates::render(&self.details, doc_type, date, &self.options.date_format)
    }

    /// Render and serialize one document, returning its filename and bytes.
    pub fn build(&self, doc_type: DocumentType) -> Result<ArchiveEntry, ExportError> {
        let document = self.render(doc_type)?;
        let bytes = generate_docx(&document, &self.options.styles)?;
        Ok(ArchiveEntry {
            filename: naming::document_filename(doc_type, &self.details.name),
            bytes,
        })
    }

    /// Build one document and download it immediately.
    pub fn generate_document(&self, doc_type: DocumentType) -> Result<(), ExportError> {
        let entry = self.build(doc_type)?;
        self.download
            .save_as(&entry.bytes, naming::DOCX_MIME, &entry.filename)?;
        info!(%doc_type, filename = %entry.filename, bytes = entry.bytes.len(), "document generated");
        Ok(())
    }

    /// Generate every document type in batch order, one download each.
    ///
    /// A failing document is logged and skipped; the returned set holds only
    /// the types that were downloaded.
    pub fn generate_all_documents(&self) -> GeneratedDocumentSet {
        let mut generated = GeneratedDocumentSet::default();

        for (i, doc_type) in DocumentType::ALL.into_iter().enumerate() {
            if i > 0 && !self.options.download_pause.is_zero() {
                std::thread::sleep(self.options.download_pause);
            }
            match self.generate_document(doc_type) {
                Ok(()) => generated.push(doc_type),
                Err(e) => error!(%doc_type, error = %e, "error generating document"),
            }
        }

        info!(count = generated.len(), "batch generation finished");
        generated
    }

    /// Build every requested type and download them together as one zip.
    ///
    /// Repeated types are generated once. Any failure aborts the whole
    /// archive; nothing is downloaded.
    pub fn generate_documents_as_zip(
        &self,
        types: &[DocumentType],
    ) -> Result<GeneratedDocumentSet, ExportError> {
        let mut generated = GeneratedDocumentSet::default();
        let mut entries = Vec::with_capacity(types.len());

        for &doc_type in types {
            if generated.types().contains(&doc_type) {
                continue;
            }
            entries.push(self.build(doc_type)?);
            generated.push(doc_type);
        }

        let blob = archive::bundle(&entries)?;
        let filename = naming::archive_filename(&self.details.name);
        self.download
            .save_as(&blob, naming::ARCHIVE_MIME, &filename)?;
        info!(%filename, count = entries.len(), bytes = blob.len(), "archive generated");
        Ok(generated)
    }

    /// Apply the selection policy: nothing selected is refused, one type is
    /// a single download, more than one is an archive download.
    pub fn generate_selection(
        &self,
        selection: &[DocumentType],
    ) -> Result<SelectionOutcome, ExportError> {
        match selection {
            [] => {
                warn!("generation requested with no documents selected");
                Ok(SelectionOutcome::Refused {
                    notice: EMPTY_SELECTION_NOTICE,
                })
            }
            [doc_type] => {
                self.generate_document(*doc_type)?;
                Ok(SelectionOutcome::Generated(vec![*doc_type].into()))
            }
            types => Ok(SelectionOutcome::Generated(
                self.generate_documents_as_zip(types)?,
            )),
        }
    }
}

fn today() -> Date {
    jiff::Zoned::now().date()
}
