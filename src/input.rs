//! Resolves command line paths into the INI files to operate on.
//!
//! Files named explicitly are always kept. Directories are scanned (not
//! recursively) for files whose extension is in the configured list.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Expands `paths` into a sorted, de-duplicated list of candidate files.
///
/// An empty `paths` means the current directory.
///
/// # Errors
///
/// Returns an error if a path does not exist or a directory cannot be listed.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            for dir_entry in fs::read_dir(&path)? {
                let candidate = dir_entry?.path();
                if candidate.is_file() && has_extension(&candidate, extensions) {
                    documents.push(candidate);
                }
            }
        } else if path.is_file() {
            documents.push(path);
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", path.display()),
            ));
        }
    }

    documents.sort();
    documents.dedup();
    debug!(count = documents.len(), "found documents");
    Ok(documents)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted.eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
