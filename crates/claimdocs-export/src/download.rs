use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExportError;

/// Hands finished bytes to the host's save-file action.
pub trait Download {
    fn save_as(&self, blob: &[u8], mime: &str, filename: &str) -> Result<(), ExportError>;
}

impl<D: Download + ?Sized> Download for &D {
    fn save_as(&self, blob: &[u8], mime: &str, filename: &str) -> Result<(), ExportError> {
        (**self).save_as(blob, mime, filename)
    }
}

/// Saves downloads into a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirectoryDownload {
    dir: PathBuf,
}

impl DirectoryDownload {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Download for DirectoryDownload {
    fn save_as(&self, blob: &[u8], mime: &str, filename: &str) -> Result<(), ExportError> {
        // Only ever write a single path component inside `dir`.
        let name = Path::new(filename)
            .file_name()
            .filter(|name| name.to_str() == Some(filename))
            .ok_or_else(|| ExportError::Download {
                filename: filename.to_string(),
                message: "not a single file name".to_string(),
            })?;

        std::fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(name);
        let mut tmp_name = name.to_os_string();
        tmp_name.push(".part");
        let tmp_path = self.dir.join(tmp_name);

        // Write to a temp file then rename so a failed write leaves nothing behind.
        if let Err(e) = std::fs::write(&tmp_path, blob) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        std::fs::rename(&tmp_path, &path)?;

        info!(path = %path.display(), mime, bytes = blob.len(), "file saved");
        Ok(())
    }
}
