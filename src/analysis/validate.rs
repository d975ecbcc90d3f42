//! Client-side checks run before anything is sent to the service.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Largest accepted upload, inclusive.
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Why a file was refused before upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationRejection {
    #[error("file exceeds the 10 MiB limit")]
    FileTooLarge,
    #[error("file is not a JPEG, PNG or WebP image")]
    InvalidFormat,
}

impl ValidationRejection {
    /// Locale key of the message shown to the user.
    pub fn locale_key(&self) -> &'static str {
        match self {
            ValidationRejection::FileTooLarge => "errors.fileTooLarge",
            ValidationRejection::InvalidFormat => "errors.invalidFormat",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ValidationRejection::FileTooLarge => "file_too_large",
            ValidationRejection::InvalidFormat => "invalid_format",
        }
    }
}

/// Size is checked first, so an oversized file of the wrong type reports
/// `FileTooLarge`.
pub fn validate_image(size: u64, mime: &str) -> Option<ValidationRejection> {
    if size > MAX_IMAGE_BYTES {
        return Some(ValidationRejection::FileTooLarge);
    }
    if !ALLOWED_MIME_TYPES.contains(&mime) {
        return Some(ValidationRejection::InvalidFormat);
    }
    None
}

/// Descriptor of a local file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub size: u64,
    /// Declared type, guessed from the extension. Empty when unknown.
    pub mime: String,
}

impl ImageFile {
    pub fn from_path(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' is not a regular file", path.display()),
            ));
        }
        Ok(Self {
            path: path.to_path_buf(),
            size: metadata.len(),
            mime: declared_mime(path),
        })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string())
    }

    pub fn validate(&self) -> Option<ValidationRejection> {
        validate_image(self.size, &self.mime)
    }
}

fn declared_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or_default()
        .to_string()
}
