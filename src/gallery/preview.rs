// SPDX-License-Identifier: MPL-2.0
//! Preview handles and the ledger that accounts for them.
//!
//! A [`PreviewRef`] owns an in-memory image handle built from the selected
//! file's bytes. It is registered with the gallery's [`PreviewLedger`] when
//! acquired and released in `Drop`, so any path that forgets a record (remove,
//! clear, store teardown) releases its preview exactly once.

use iced::widget::image::Handle;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Counts {
    acquired: AtomicU64,
    released: AtomicU64,
}

/// Shared counters of acquired and released previews.
///
/// Cloning the ledger shares the counters.
#[derive(Debug, Clone, Default)]
pub struct PreviewLedger {
    counts: Arc<Counts>,
}

impl PreviewLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Previews acquired and not yet released.
    #[must_use]
    pub fn live(&self) -> u64 {
        self.acquired() - self.released()
    }

    #[must_use]
    pub fn acquired(&self) -> u64 {
        self.counts.acquired.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn released(&self) -> u64 {
        self.counts.released.load(Ordering::Acquire)
    }

    fn record_acquire(&self) {
        self.counts.acquired.fetch_add(1, Ordering::AcqRel);
    }

    fn record_release(&self) {
        self.counts.released.fetch_add(1, Ordering::AcqRel);
    }
}

/// Owned, non-clonable reference to an image's bytes, resolvable without I/O.
#[derive(Debug)]
pub struct PreviewRef {
    handle: Handle,
    ledger: PreviewLedger,
}

impl PreviewRef {
    /// Creates a preview over `bytes`. Only the gallery store acquires previews.
    pub(super) fn acquire(bytes: Vec<u8>, ledger: &PreviewLedger) -> Self {
        ledger.record_acquire();
        Self {
            handle: Handle::from_bytes(bytes),
            ledger: ledger.clone(),
        }
    }

    /// Image handle for rendering. Cloning the handle is cheap and does not
    /// extend the record's ownership of the preview.
    #[must_use]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// The file bytes behind this preview.
    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.handle {
            Handle::Bytes(_, bytes) => Some(bytes.as_ref()),
            _ => None,
        }
    }
}

impl Drop for PreviewRef {
    fn drop(&mut self) {
        self.ledger.record_release();
        tracing::trace!(live = self.ledger.live(), "preview released");
    }
}
