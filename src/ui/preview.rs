use std::path::PathBuf;

use crate::analysis::ImageFile;

/// What the result card shows about the uploaded image.
///
/// Dropped when the store resets; it holds no handles, only metadata read
/// when the file was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub path: PathBuf,
    pub file_name: String,
    pub size_bytes: u64,
    pub mime: String,
    /// Pixel size, when the header could be decoded.
    pub dimensions: Option<(u32, u32)>,
}

impl ImagePreview {
    pub fn load(file: &ImageFile) -> Self {
        let dimensions = match image::image_dimensions(&file.path) {
            Ok(dims) => Some(dims),
            Err(err) => {
                tracing::debug!("No dimensions for {}: {}", file.path.display(), err);
                None
            }
        };
        Self {
            path: file.path.clone(),
            file_name: file.file_name(),
            size_bytes: file.size,
            mime: file.mime.clone(),
            dimensions,
        }
    }

    /// One-line summary, e.g. `face.png · 640x480 · 1.2 MB`.
    pub fn summary(&self) -> String {
        let mut parts = vec![self.file_name.clone()];
        if let Some((w, h)) = self.dimensions {
            parts.push(format!("{}x{}", w, h));
        }
        parts.push(format_size(self.size_bytes));
        parts.join(" · ")
    }
}

fn format_size(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    let value = bytes as f64;
    if value >= MIB {
        format!("{:.1} MB", value / MIB)
    } else if value >= KIB {
        format!("{:.1} KB", value / KIB)
    } else {
        format!("{} B", bytes)
    }
}
