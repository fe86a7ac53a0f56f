//! File-system photo reader

use std::fs;
use std::path::Path;

use crate::domain::ports::PhotoReader;
use crate::domain::value_objects::{mime_for_extension, Photo};
use crate::error::{PaintshopError, PaintshopResult};

/// Reads image files from disk into base64 data URIs
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPhotoReader;

impl FsPhotoReader {
    pub fn new() -> Self {
        Self
    }
}

impl PhotoReader for FsPhotoReader {
    fn read_photo(&self, path: &Path) -> PaintshopResult<Photo> {
        let bytes = fs::read(path).map_err(|source| PaintshopError::PhotoRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mime = path
            .extension()
            .and_then(|e| e.to_str())
            .map(mime_for_extension)
            .unwrap_or("application/octet-stream");
        Ok(Photo::from_bytes(mime, &bytes))
    }
}
