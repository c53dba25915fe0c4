//! The caller boundary: validates the form, runs one generation action and
//! turns the result into what the user sees.

use std::process::ExitCode;

use claimdocs_core::client::ClientDetails;
use claimdocs_core::document_type::DocumentType;
use claimdocs_core::form::ClientForm;
use claimdocs_core::summary::GeneratedDocumentSet;
use claimdocs_core::validation::ValidationErrors;
use claimdocs_export::download::Download;
use claimdocs_export::generator::{DocumentGenerator, GeneratorOptions, SelectionOutcome};

pub const BATCH_FAILURE_MESSAGE: &str = "Error generating documents. Please try again.";

/// What one generation action ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Validation failed; nothing was generated.
    Invalid(ValidationErrors),
    /// Nothing was selected; nothing was generated.
    Refused(&'static str),
    Generated(GeneratedDocumentSet),
    /// Generation failed; the message prompts a retry.
    Failed(String),
}

impl Outcome {
    /// Text shown to the user.
    pub fn message(&self) -> String {
        match self {
            Outcome::Invalid(errors) => errors
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect::<Vec<_>>()
                .join("\n"),
            Outcome::Refused(notice) => (*notice).to_string(),
            Outcome::Generated(set) => set
                .summary()
                .unwrap_or_else(|| BATCH_FAILURE_MESSAGE.to_string()),
            Outcome::Failed(message) => message.clone(),
        }
    }

    /// A refusal is a notice, not a failure. An all-documents batch where
    /// every document failed is a failure.
    pub fn is_success(&self) -> bool {
        match self {
            Outcome::Generated(set) => !set.is_empty(),
            Outcome::Refused(_) => true,
            Outcome::Invalid(_) | Outcome::Failed(_) => false,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

fn failure_message(selection: &[DocumentType]) -> String {
    match selection {
        [doc_type] => format!("Error generating {doc_type} document. Please try again."),
        _ => BATCH_FAILURE_MESSAGE.to_string(),
    }
}

fn snapshot(form: &mut ClientForm) -> Result<ClientDetails, Outcome> {
    form.submit()
        .map_err(|_| Outcome::Invalid(form.errors().clone()))
}

/// Generate the selected documents: one type downloads a single file, more
/// than one downloads a zip, none is refused.
///
/// Generation blocks on file writes, so it runs on tokio's blocking pool.
pub async fn generate<D>(
    form: &mut ClientForm,
    selection: &[DocumentType],
    download: D,
    options: GeneratorOptions,
) -> Outcome
where
    D: Download + Send + 'static,
{
    let details = match snapshot(form) {
        Ok(details) => details,
        Err(outcome) => return outcome,
    };

    let generator = DocumentGenerator::new(details, download, options);
    let types = selection.to_vec();
    let result = tokio::task::spawn_blocking(move || generator.generate_selection(&types)).await;

    match result {
        Ok(Ok(SelectionOutcome::Refused { notice })) => Outcome::Refused(notice),
        Ok(Ok(SelectionOutcome::Generated(set))) => Outcome::Generated(set),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "error generating documents");
            Outcome::Failed(failure_message(selection))
        }
        Err(e) => {
            tracing::error!(error = %e, "generation task did not complete");
            Outcome::Failed(failure_message(selection))
        }
    }
}

/// Generate every document type as separate downloads.
pub async fn generate_all<D>(form: &mut ClientForm, download: D, options: GeneratorOptions) -> Outcome
where
    D: Download + Send + 'static,
{
    let details = match snapshot(form) {
        Ok(details) => details,
        Err(outcome) => return outcome,
    };

    let generator = DocumentGenerator::new(details, download, options);
    match tokio::task::spawn_blocking(move || generator.generate_all_documents()).await {
        Ok(set) => Outcome::Generated(set),
        Err(e) => {
            tracing::error!(error = %e, "generation task did not complete");
            Outcome::Failed(BATCH_FAILURE_MESSAGE.to_string())
        }
    }
}
