// SPDX-License-Identifier: MPL-2.0
//! Gallery records.

use super::preview::{PreviewLedger, PreviewRef};
use chrono::{DateTime, Local};
use std::fmt;
use std::io::Cursor;
use std::time::{SystemTime, UNIX_EPOCH};

/// Identity derived from the file name and its modification time.
///
/// Two selections of the same unmodified file derive the same id; records are
/// told apart by [`RecordKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(String);

impl ImageId {
    #[must_use]
    pub fn derive(name: &str, modified: Option<SystemTime>) -> Self {
        let modified_ms = modified
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .map_or(0, |since_epoch| since_epoch.as_millis());
        Self(format!("{name}-{modified_ms}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-store unique key of a gallery record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey(pub(super) u64);

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An image selected during this session.
#[derive(Debug)]
pub struct UploadedImage {
    key: RecordKey,
    id: ImageId,
    name: String,
    size_bytes: u64,
    modified: Option<DateTime<Local>>,
    dimensions: Option<(u32, u32)>,
    preview: PreviewRef,
}

impl UploadedImage {
    /// Builds a record over the bytes of a file that was read successfully.
    pub(super) fn new(
        key: RecordKey,
        name: String,
        modified: Option<SystemTime>,
        bytes: Vec<u8>,
        ledger: &PreviewLedger,
    ) -> Self {
        let dimensions = probe_dimensions(&bytes);
        Self {
            key,
            id: ImageId::derive(&name, modified),
            name,
            size_bytes: bytes.len() as u64,
            modified: modified.map(DateTime::<Local>::from),
            dimensions,
            preview: PreviewRef::acquire(bytes, ledger),
        }
    }

    #[must_use]
    pub fn key(&self) -> RecordKey {
        self.key
    }

    #[must_use]
    pub fn id(&self) -> &ImageId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[must_use]
    pub fn modified(&self) -> Option<DateTime<Local>> {
        self.modified
    }

    /// Pixel size read from the image header, if the format was recognized.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    #[must_use]
    pub fn preview(&self) -> &PreviewRef {
        &self.preview
    }
}

/// Reads width and height from the header without decoding pixels.
/// Unknown or corrupt content yields `None`; it is still shown as a record.
fn probe_dimensions(bytes: &[u8]) -> Option<(u32, u32)> {
    image_rs::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}
