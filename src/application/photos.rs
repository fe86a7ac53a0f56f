//! Photo draft - the photo list of a form being edited
//!
//! Selected files are read one by one, in selection order, before the call
//! returns. Each file is appended exactly once.

use std::path::Path;

use log::debug;

use crate::domain::ports::PhotoReader;
use crate::domain::value_objects::Photo;
use crate::error::PaintshopResult;

/// Ordered photos attached to a service or work-order form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoDraft {
    photos: Vec<Photo>,
}

impl PhotoDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the photos of an entity being edited
    pub fn from_photos(photos: Vec<Photo>) -> Self {
        Self { photos }
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn push(&mut self, photo: Photo) {
        self.photos.push(photo);
    }

    /// Remove the photo at `index`; out-of-range indexes are ignored
    pub fn remove(&mut self, index: usize) -> Option<Photo> {
        if index < self.photos.len() {
            Some(self.photos.remove(index))
        } else {
            None
        }
    }

    /// Read every file and append the results in selection order
    ///
    /// Stops at the first unreadable file; photos read before it are kept.
    pub fn ingest<R, P>(&mut self, reader: &R, paths: &[P]) -> PaintshopResult<usize>
    where
        R: PhotoReader + ?Sized,
        P: AsRef<Path>,
    {
        for path in paths {
            let photo = reader.read_photo(path.as_ref())?;
            debug!(
                "attached {} ({} bytes encoded)",
                path.as_ref().display(),
                photo.encoded_len()
            );
            self.photos.push(photo);
        }
        Ok(paths.len())
    }

    pub fn into_photos(self) -> Vec<Photo> {
        self.photos
    }
}
