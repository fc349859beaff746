// SPDX-License-Identifier: MPL-2.0
//! Session image gallery.
//!
//! [`GalleryStore`] owns the uploaded-image records and is the only place that
//! creates their preview handles. Batches are prepended as a unit (newest
//! batch first, picker order kept within a batch). Every way of forgetting a
//! record goes through `Drop` of its [`PreviewRef`], which releases the
//! preview.
//!
//! # Components
//!
//! - [`image`] - `UploadedImage`, its derived `ImageId` and unique `RecordKey`
//! - [`preview`] - `PreviewRef` and the `PreviewLedger` accounting for them
//! - [`selection`] - File picker state and reading selected files
//! - [`count`] - Count label mapping

pub mod count;
pub mod image;
pub mod preview;
pub mod selection;

pub use count::ImageCount;
pub use image::{ImageId, RecordKey, UploadedImage};
pub use preview::{PreviewLedger, PreviewRef};
pub use selection::{
    DropGesture, FilePicker, PickToken, SelectedFile, Selection, SelectionOrigin,
};

/// Result of adding a selection to the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddOutcome {
    /// Records created.
    pub added: usize,
    /// Files that could not be read and got no record.
    pub skipped: usize,
}

/// Ordered collection of the images selected this session.
#[derive(Debug, Default)]
pub struct GalleryStore {
    images: Vec<UploadedImage>,
    ledger: PreviewLedger,
    next_key: u64,
}

impl GalleryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a selection as one batch in front of the existing images.
    ///
    /// An empty selection changes nothing. Files whose read failed are
    /// skipped; existing records keep their previews.
    pub fn add_images(&mut self, selection: Selection) -> AddOutcome {
        let Selection { origin, files } = selection;
        if files.is_empty() {
            tracing::debug!(?origin, "empty selection ignored");
            return AddOutcome::default();
        }

        let mut outcome = AddOutcome::default();
        let mut batch = Vec::with_capacity(files.len());

        for SelectedFile {
            name,
            modified,
            contents,
        } in files
        {
            match contents {
                Ok(bytes) => {
                    let key = self.allocate_key();
                    batch.push(UploadedImage::new(key, name, modified, bytes, &self.ledger));
                    outcome.added += 1;
                }
                Err(err) => {
                    tracing::warn!(%name, %err, "no preview for unreadable file");
                    outcome.skipped += 1;
                }
            }
        }

        self.images.splice(0..0, batch);

        tracing::info!(
            ?origin,
            added = outcome.added,
            skipped = outcome.skipped,
            total = self.images.len(),
            "gallery batch added"
        );
        outcome
    }

    /// Removes one record, releasing its preview. Returns `false` if the key
    /// is not in the gallery.
    pub fn remove(&mut self, key: RecordKey) -> bool {
        let Some(index) = self.images.iter().position(|image| image.key() == key) else {
            return false;
        };
        let removed = self.images.remove(index);
        tracing::info!(key = %removed.key(), name = removed.name(), "gallery image removed");
        true
    }

    /// Removes every record, releasing each preview. Returns how many were
    /// removed.
    pub fn clear(&mut self) -> usize {
        let count = self.images.len();
        self.images.clear();
        if count > 0 {
            tracing::info!(count, "gallery cleared");
        }
        count
    }

    /// Records, newest batch first.
    #[must_use]
    pub fn images(&self) -> &[UploadedImage] {
        &self.images
    }

    #[must_use]
    pub fn get(&self, key: RecordKey) -> Option<&UploadedImage> {
        self.images.iter().find(|image| image.key() == key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn count(&self) -> ImageCount {
        ImageCount::from(self.images.len())
    }

    /// Previews currently held by records of this store.
    #[must_use]
    pub fn live_previews(&self) -> u64 {
        self.ledger.live()
    }

    /// The ledger of this store's previews (shared counters).
    #[must_use]
    pub fn ledger(&self) -> &PreviewLedger {
        &self.ledger
    }

    fn allocate_key(&mut self) -> RecordKey {
        let key = RecordKey(self.next_key);
        self.next_key += 1;
        key
    }
}
