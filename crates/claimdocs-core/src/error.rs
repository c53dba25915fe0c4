use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid document type: {0}")]
    InvalidDocType(String),

    #[error("client details are invalid: {0}")]
    Validation(ValidationErrors),
}
