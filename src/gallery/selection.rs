// SPDX-License-Identifier: MPL-2.0
//! File selection boundary.
//!
//! Files reach the gallery as a [`Selection`]: an ordered batch read from the
//! native picker, from a window drop, or from the command line. Reading
//! happens here, off the update loop; the gallery only turns readable files
//! into records.

use crate::config::IMAGE_EXTENSIONS;
use crate::error::Error;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Where a selection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOrigin {
    Picker,
    Drop,
    CommandLine,
}

/// One file of a selection with the outcome of reading it.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub modified: Option<SystemTime>,
    pub contents: Result<Vec<u8>, Error>,
}

impl SelectedFile {
    /// A file whose bytes are already in memory.
    pub fn in_memory(name: impl Into<String>, modified: Option<SystemTime>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            modified,
            contents: Ok(bytes),
        }
    }

    /// A file that could not be read.
    pub fn unreadable(name: impl Into<String>, error: Error) -> Self {
        Self {
            name: name.into(),
            modified: None,
            contents: Err(error),
        }
    }
}

/// An ordered batch of selected files. May be empty (cancelled dialog).
#[derive(Debug, Clone)]
pub struct Selection {
    pub origin: SelectionOrigin,
    pub files: Vec<SelectedFile>,
}

impl Selection {
    #[must_use]
    pub fn new(origin: SelectionOrigin, files: Vec<SelectedFile>) -> Self {
        Self { origin, files }
    }

    #[must_use]
    pub fn empty(origin: SelectionOrigin) -> Self {
        Self::new(origin, Vec::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }
}

/// Proof that the picker was opened; handed back to [`FilePicker::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickToken(u64);

/// State of the picker control.
///
/// At most one dialog is open at a time. The picker is cleared after every
/// processed selection, cancelled or not, so choosing the same file again
/// starts a new selection.
#[derive(Debug, Default)]
pub struct FilePicker {
    open: Option<PickToken>,
    next: u64,
}

impl FilePicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the picker open. Returns `None` if a dialog is already open.
    pub fn begin(&mut self) -> Option<PickToken> {
        if self.open.is_some() {
            return None;
        }
        let token = PickToken(self.next);
        self.next += 1;
        self.open = Some(token);
        Some(token)
    }

    /// Clears the picker. Returns `false` for a token that is not the open one.
    pub fn finish(&mut self, token: PickToken) -> bool {
        if self.open == Some(token) {
            self.open = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }
}

/// Image paths dropped on the window in one gesture, in drop order.
///
/// The window reports one event per file, so the paths are collected here
/// and read together once the gesture is over.
#[derive(Debug, Default)]
pub struct DropGesture {
    paths: Vec<PathBuf>,
}

impl DropGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.paths.is_empty()
    }

    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Ends the gesture. `None` if nothing was collected.
    pub fn take(&mut self) -> Option<Vec<PathBuf>> {
        if self.paths.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.paths))
        }
    }
}

/// Opens the native multi-file image dialog and reads what the user picked.
pub async fn pick_images(title: String, filter_name: String) -> Selection {
    let handles = rfd::AsyncFileDialog::new()
        .set_title(&title)
        .add_filter(&filter_name, IMAGE_EXTENSIONS)
        .pick_files()
        .await;

    let paths: Vec<PathBuf> = handles
        .unwrap_or_default()
        .iter()
        .map(|handle| handle.path().to_path_buf())
        .collect();

    read_selection(paths, SelectionOrigin::Picker).await
}

/// Reads `paths` in order. Failures are kept per file.
pub async fn read_selection(paths: Vec<PathBuf>, origin: SelectionOrigin) -> Selection {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(read_file(&path).await);
    }
    Selection::new(origin, files)
}

async fn read_file(path: &Path) -> SelectedFile {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let modified = tokio::fs::metadata(path)
        .await
        .ok()
        .and_then(|meta| meta.modified().ok());

    match tokio::fs::read(path).await {
        Ok(bytes) => SelectedFile::in_memory(name, modified, bytes),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "could not read selected file");
            SelectedFile::unreadable(name, Error::from(err))
        }
    }
}

/// Whether a path looks like an image by extension. Used to filter drops.
#[must_use]
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
