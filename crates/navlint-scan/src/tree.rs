//! Filesystem walking and the scanned tree.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::title::extract_title;

/// A discovered documentation source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFile {
    /// Path relative to the docs root.
    pub rel_path: PathBuf,
    /// Title from the first H1 heading, for markdown files that have one.
    pub title: Option<String>,
}

/// Error scanning the docs tree.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Docs root directory does not exist.
    #[error("Docs directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
    /// I/O error walking the docs root.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Directory that failed to read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Scanned documentation source tree.
///
/// Files are stored sorted by relative path with an index for membership
/// lookups, so iteration order is deterministic regardless of filesystem
/// order.
#[derive(Debug)]
pub struct DocTree {
    root: PathBuf,
    files: Vec<DocFile>,
    path_index: HashMap<PathBuf, usize>,
}

impl DocTree {
    /// Scan a docs directory.
    ///
    /// Hidden (`.`-prefixed) and partial (`_`-prefixed) files and
    /// directories are skipped. Titles are extracted from `.md` files;
    /// unreadable files are kept without a title and logged.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::RootNotFound`] if `root` is not a directory,
    /// or [`ScanError::Io`] if a directory cannot be read.
    pub fn scan(root: &Path) -> Result<Self, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::RootNotFound(root.to_path_buf()));
        }

        let mut files = Vec::new();
        scan_directory(root, Path::new(""), &mut files)?;
        files.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));

        let path_index = files
            .iter()
            .enumerate()
            .map(|(i, file)| (file.rel_path.clone(), i))
            .collect();

        Ok(Self {
            root: root.to_path_buf(),
            files,
            path_index,
        })
    }

    /// Docs root this tree was scanned from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True if a file exists at the given root-relative path.
    #[must_use]
    pub fn contains(&self, rel: &Path) -> bool {
        self.path_index.contains_key(rel)
    }

    /// Title of the file at the given root-relative path, if extracted.
    #[must_use]
    pub fn title_of(&self, rel: &Path) -> Option<&str> {
        let &idx = self.path_index.get(rel)?;
        self.files[idx].title.as_deref()
    }

    /// Discovered files, sorted by relative path.
    #[must_use]
    pub fn files(&self) -> &[DocFile] {
        &self.files
    }

    /// Number of discovered files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True if no files were discovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Recursively collect files under `dir_path` into `files`.
fn scan_directory(
    dir_path: &Path,
    rel_prefix: &Path,
    files: &mut Vec<DocFile>,
) -> Result<(), ScanError> {
    let entries = fs::read_dir(dir_path).map_err(|source| ScanError::Io {
        path: dir_path.to_path_buf(),
        source,
    })?;

    for entry in entries.filter_map(Result::ok) {
        let name = entry.file_name();
        let name_str = name.to_string_lossy();
        if name_str.starts_with('.') || name_str.starts_with('_') {
            continue;
        }

        let path = entry.path();
        let rel_path = rel_prefix.join(&name);

        if entry.file_type().is_ok_and(|t| t.is_dir()) {
            scan_directory(&path, &rel_path, files)?;
        } else {
            let title = if path.extension().is_some_and(|e| e == "md") {
                match fs::read_to_string(&path) {
                    Ok(content) => extract_title(&content),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to read file");
                        None
                    }
                }
            } else {
                None
            };
            files.push(DocFile { rel_path, title });
        }
    }

    Ok(())
}
