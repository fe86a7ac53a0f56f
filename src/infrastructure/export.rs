//! Export sink implementations

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::ports::ExportSink;
use crate::domain::services::CsvArtifact;
use crate::error::PaintshopResult;

/// Writes artifacts as files under a directory
///
/// The file is written next to its final name and renamed into place, so a
/// reader never sees a half-written CSV.
#[derive(Debug, Clone)]
pub struct FileExportSink {
    directory: PathBuf,
}

impl FileExportSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl ExportSink for FileExportSink {
    fn deliver(&self, artifact: &CsvArtifact) -> PaintshopResult<String> {
        fs::create_dir_all(&self.directory)?;
        let target = self.directory.join(&artifact.filename);
        let staging = self
            .directory
            .join(format!(".{}.partial", artifact.filename));

        fs::write(&staging, artifact.text.as_bytes())?;
        if let Err(e) = fs::rename(&staging, &target) {
            let _ = fs::remove_file(&staging);
            return Err(e.into());
        }
        Ok(target.display().to_string())
    }
}

/// Prints artifacts to stdout instead of saving them
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutExportSink;

impl ExportSink for StdoutExportSink {
    fn deliver(&self, artifact: &CsvArtifact) -> PaintshopResult<String> {
        let mut out = io::stdout().lock();
        out.write_all(artifact.text.as_bytes())?;
        out.flush()?;
        Ok("stdout".to_string())
    }
}

/// Keeps delivered artifacts in memory
#[derive(Debug, Default)]
pub struct MemoryExportSink {
    delivered: RefCell<Vec<CsvArtifact>>,
}

impl MemoryExportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn artifacts(&self) -> Vec<CsvArtifact> {
        self.delivered.borrow().clone()
    }
}

impl ExportSink for MemoryExportSink {
    fn deliver(&self, artifact: &CsvArtifact) -> PaintshopResult<String> {
        self.delivered.borrow_mut().push(artifact.clone());
        Ok(format!("memory:{}", artifact.filename))
    }
}

/// Any sink behind a box, so the binary can pick one at runtime
impl ExportSink for Box<dyn ExportSink> {
    fn deliver(&self, artifact: &CsvArtifact) -> PaintshopResult<String> {
        (**self).deliver(artifact)
    }
}
