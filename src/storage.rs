//! Reading documents from disk and writing them back.
//!
//! Writes go through a [`Commit`] step that runs only once the full text has
//! been written and flushed, so storage that needs an explicit durability call
//! (an SD card on a console, for instance) can hook in there.

use crate::document::{Document, ParseOptions};
use crate::error::{Error, Result};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

/// Durability step run after a document has been written and flushed.
pub trait Commit {
    /// Makes the written contents of `file` durable.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage rejects the commit.
    fn commit(&self, file: &File) -> io::Result<()>;
}

/// Commits by syncing file data and metadata to the device.
pub struct SyncAll;

impl Commit for SyncAll {
    fn commit(&self, file: &File) -> io::Result<()> {
        file.sync_all()
    }
}

/// Leaves durability to the operating system.
pub struct NoCommit;

impl Commit for NoCommit {
    fn commit(&self, _file: &File) -> io::Result<()> {
        Ok(())
    }
}

impl Document {
    /// Reads and parses the file at `path`.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// failing the load.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file cannot be opened or read.
    pub fn from_file(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        if matches!(text, Cow::Owned(_)) {
            warn!(path = %path.display(), "replaced invalid UTF-8 bytes");
        }
        let doc = Self::parse_with(&text, options);
        info!(
            path = %path.display(),
            leading_options = doc.leading_options.len(),
            entries = doc.entries.len(),
            "loaded document"
        );
        Ok(doc)
    }

    /// Renders the document and writes it to `path`, then runs `commit`.
    ///
    /// The file handle is released on every path out of this function.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the file cannot be created, written,
    /// flushed or committed.
    pub fn write_to_file(&self, path: impl AsRef<Path>, commit: &dyn Commit) -> Result<()> {
        let path = path.as_ref();
        let to_error = |source| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(to_error)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(self.build().as_bytes())
            .map_err(to_error)?;
        let file = writer.into_inner().map_err(|e| to_error(e.into_error()))?;
        commit.commit(&file).map_err(to_error)?;

        info!(path = %path.display(), "saved document");
        Ok(())
    }
}

#[must_use]
/// Loads a document, returning `None` if the source cannot be read.
pub fn load_document(path: impl AsRef<Path>) -> Option<Document> {
    match Document::from_file(path, ParseOptions::default()) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!("{e}");
            None
        }
    }
}

#[must_use]
/// Saves a document with a [`SyncAll`] commit, returning whether it succeeded.
pub fn save_document(doc: &Document, path: impl AsRef<Path>) -> bool {
    match doc.write_to_file(path, &SyncAll) {
        Ok(()) => true,
        Err(e) => {
            warn!("{e}");
            false
        }
    }
}

#[cfg(test)]
#[path = "tests/storage.rs"]
mod tests;
