use std::cell::RefCell;
use std::io::Cursor;
use std::time::Duration;

use claimdocs_core::client::ClientDetails;
use claimdocs_core::document_type::DocumentType;
use claimdocs_core::naming::{ARCHIVE_MIME, DOCX_MIME};
use claimdocs_export::archive::{ArchiveEntry, bundle};
use claimdocs_export::download::{DirectoryDownload, Download};
use claimdocs_export::error::ExportError;
use claimdocs_export::generator::{
    DocumentGenerator, EMPTY_SELECTION_NOTICE, GeneratorOptions, SelectionOutcome,
};

/// Records every download; fails for one chosen filename.
#[derive(Default)]
struct RecordingDownload {
    saved: RefCell<Vec<(String, String, Vec<u8>)>>,
    fail_on: Option<String>,
}

impl RecordingDownload {
    fn failing_on(filename: &str) -> Self {
        Self {
            fail_on: Some(filename.to_string()),
            ..Self::default()
        }
    }

    fn filenames(&self) -> Vec<String> {
        self.saved.borrow().iter().map(|(f, _, _)| f.clone()).collect()
    }
}

impl Download for RecordingDownload {
    fn save_as(&self, blob: &[u8], mime: &str, filename: &str) -> Result<(), ExportError> {
        if self.fail_on.as_deref() == Some(filename) {
            return Err(ExportError::Download {
                filename: filename.to_string(),
                message: "blocked".to_string(),
            });
        }
        self.saved
            .borrow_mut()
            .push((filename.to_string(), mime.to_string(), blob.to_vec()));
        Ok(())
    }
}

fn john() -> ClientDetails {
    ClientDetails::new("John Smith", "john@example.com", "0821234567", "8001015009087")
}

fn no_pause() -> GeneratorOptions {
    GeneratorOptions {
        download_pause: Duration::ZERO,
        ..GeneratorOptions::default()
    }
}

fn entry_names(bytes: &[u8]) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("zip");
    (0..archive.len())
        .map(|i| archive.by_index(i).expect("entry").name().to_string())
        .collect()
}

#[test]
fn single_document_downloads_one_docx() {
    let download = RecordingDownload::default();
    let generator = DocumentGenerator::new(john(), &download, no_pause());

    generator.generate_document(DocumentType::Consent).unwrap();

    let saved = download.saved.borrow();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, "Medical_Consent_John_Smith.docx");
    assert_eq!(saved[0].1, DOCX_MIME);
    assert!(saved[0].2.starts_with(b"PK"));
}

#[test]
fn all_documents_in_fixed_order() {
    let download = RecordingDownload::default();
    let generator = DocumentGenerator::new(john(), &download, no_pause());

    let generated = generator.generate_all_documents();

    assert_eq!(generated.tags(), ["warrant", "consent", "demand", "notice"]);
    assert_eq!(
        download.filenames(),
        [
            "Warrant_to_Act_John_Smith.docx",
            "Medical_Consent_John_Smith.docx",
            "Letter_of_Demand_John_Smith.docx",
            "Statutory_Notice_John_Smith.docx",
        ]
    );
}

#[test]
fn batch_skips_a_failing_document_and_continues() {
    let download = RecordingDownload::failing_on("Letter_of_Demand_John_Smith.docx");
    let generator = DocumentGenerator::new(john(), &download, no_pause());

    let generated = generator.generate_all_documents();

    assert_eq!(generated.tags(), ["warrant", "consent", "notice"]);
    assert_eq!(download.filenames().len(), 3);
}

#[test]
fn batch_pauses_between_downloads() {
    let download = RecordingDownload::default();
    let options = GeneratorOptions {
        download_pause: Duration::from_millis(20),
        ..GeneratorOptions::default()
    };
    let generator = DocumentGenerator::new(john(), &download, options);

    let started = std::time::Instant::now();
    generator.generate_all_documents();

    // Three gaps between four downloads.
    assert!(started.elapsed() >= Duration::from_millis(60));
}

#[test]
fn zip_holds_one_entry_per_requested_type() {
    let download = RecordingDownload::default();
    let generator = DocumentGenerator::new(john(), &download, no_pause());

    let generated = generator
        .generate_documents_as_zip(&[DocumentType::Warrant, DocumentType::Demand])
        .unwrap();

    assert_eq!(generated.tags(), ["warrant", "demand"]);
    let saved = download.saved.borrow();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, "Legal_Documents_John_Smith.zip");
    assert_eq!(saved[0].1, ARCHIVE_MIME);
    assert_eq!(
        entry_names(&saved[0].2),
        [
            "Warrant_to_Act_John_Smith.docx",
            "Letter_of_Demand_John_Smith.docx",
        ]
    );
}

#[test]
fn zip_generates_repeated_types_once() {
    let download = RecordingDownload::default();
    let generator = DocumentGenerator::new(john(), &download, no_pause());

    let generated = generator
        .generate_documents_as_zip(&[DocumentType::Notice, DocumentType::Notice])
        .unwrap();

    assert_eq!(generated.tags(), ["notice"]);
    assert_eq!(entry_names(&download.saved.borrow()[0].2).len(), 1);
}

#[test]
fn failed_zip_download_is_an_error() {
    let download = RecordingDownload::failing_on("Legal_Documents_John_Smith.zip");
    let generator = DocumentGenerator::new(john(), &download, no_pause());

    let result =
        generator.generate_documents_as_zip(&[DocumentType::Warrant, DocumentType::Consent]);

    assert!(matches!(result, Err(ExportError::Download { .. })));
    assert!(download.saved.borrow().is_empty());
}

#[test]
fn empty_selection_is_refused_without_building() {
    let download = RecordingDownload::default();
    let generator = DocumentGenerator::new(john(), &download, no_pause());

    let outcome = generator.generate_selection(&[]).unwrap();

    assert_eq!(
        outcome,
        SelectionOutcome::Refused {
            notice: EMPTY_SELECTION_NOTICE
        }
    );
    assert!(download.saved.borrow().is_empty());
}

#[test]
fn one_selected_type_is_a_single_docx() {
    let download = RecordingDownload::default();
    let generator = DocumentGenerator::new(john(), &download, no_pause());

    let outcome = generator.generate_selection(&[DocumentType::Notice]).unwrap();

    match outcome {
        SelectionOutcome::Generated(set) => assert_eq!(set.tags(), ["notice"]),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(download.filenames(), ["Statutory_Notice_John_Smith.docx"]);
}

#[test]
fn several_selected_types_are_one_archive() {
    let download = RecordingDownload::default();
    let generator = DocumentGenerator::new(john(), &download, no_pause());

    generator
        .generate_selection(&[DocumentType::Consent, DocumentType::Warrant, DocumentType::Demand])
        .unwrap();

    assert_eq!(download.filenames(), ["Legal_Documents_John_Smith.zip"]);
    assert_eq!(
        entry_names(&download.saved.borrow()[0].2),
        [
            "Medical_Consent_John_Smith.docx",
            "Warrant_to_Act_John_Smith.docx",
            "Letter_of_Demand_John_Smith.docx",
        ]
    );
}

#[test]
fn bundle_rejects_duplicate_names() {
    let entry = ArchiveEntry {
        filename: "a.docx".to_string(),
        bytes: vec![1, 2, 3],
    };
    let result = bundle(&[entry.clone(), entry]);
    assert!(matches!(result, Err(ExportError::Archive(_))));
}

#[test]
fn directory_download_writes_file_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let download = DirectoryDownload::new(&out);

    download.save_as(b"hello", DOCX_MIME, "Warrant_to_Act_John_Smith.docx").unwrap();

    let written = std::fs::read(out.join("Warrant_to_Act_John_Smith.docx")).unwrap();
    assert_eq!(written, b"hello");
    let leftovers: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn directory_download_rejects_paths_instead_of_truncating() {
    let dir = tempfile::tempdir().unwrap();
    let download = DirectoryDownload::new(dir.path());

    for bad in ["../escape.docx", "nested/file.docx", ".."] {
        let result = download.save_as(b"x", DOCX_MIME, bad);
        assert!(matches!(result, Err(ExportError::Download { .. })), "{bad}");
    }
    assert!(!dir.path().join("escape.docx").exists());
    assert!(!dir.path().join("file.docx").exists());
}

#[test]
fn name_with_path_separators_keeps_every_document_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let details = ClientDetails::new("Jan/Smit", "jan@example.com", "1", "2");
    let generator = DocumentGenerator::new(details, DirectoryDownload::new(dir.path()), no_pause());

    let generated = generator.generate_all_documents();

    assert_eq!(generated.tags(), ["warrant", "consent", "demand", "notice"]);
    let mut files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    files.sort();
    assert_eq!(
        files,
        [
            "Letter_of_Demand_Jan_Smit.docx",
            "Medical_Consent_Jan_Smit.docx",
            "Statutory_Notice_Jan_Smit.docx",
            "Warrant_to_Act_Jan_Smit.docx",
        ]
    );
}

#[test]
fn name_with_path_separators_gives_flat_zip_entries() {
    let download = RecordingDownload::default();
    let details = ClientDetails::new("Jan/Smit\\Jr", "jan@example.com", "1", "2");
    let generator = DocumentGenerator::new(details, &download, no_pause());

    generator
        .generate_documents_as_zip(&[DocumentType::Warrant, DocumentType::Demand])
        .unwrap();

    assert_eq!(download.filenames(), ["Legal_Documents_Jan_Smit_Jr.zip"]);
    assert_eq!(
        entry_names(&download.saved.borrow()[0].2),
        [
            "Warrant_to_Act_Jan_Smit_Jr.docx",
            "Letter_of_Demand_Jan_Smit_Jr.docx",
        ]
    );
}
