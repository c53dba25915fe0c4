use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("invalid date format '{format}': {message}")]
    DateFormat { format: String, message: String },

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("archive generation failed: {0}")]
    Archive(String),

    #[error("download of {filename} failed: {message}")]
    Download { filename: String, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<zip::result::ZipError> for ExportError {
    fn from(e: zip::result::ZipError) -> Self {
        ExportError::Archive(e.to_string())
    }
}
