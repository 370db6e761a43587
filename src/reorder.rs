// SPDX-License-Identifier: MPL-2.0
//! Reorder controller for a product's image gallery.
//!
//! This component owns the working copy of the image order while staff drag
//! images around, and the Idle/Saving state around the one persistence
//! call. It is the single source of truth the presentation layer renders
//! from; drag capture and notifications live outside this crate.
//!
//! Two ways to persist:
//! - message-driven UIs call [`ReorderController::begin_commit`], run the
//!   returned [`CommitRequest`] through a backend on their own task, and
//!   feed the outcome back into [`ReorderController::finish_commit`];
//! - straight-line async callers use [`ReorderController::commit`], which
//!   composes the two around a single backend call.
//!
//! While a save is in flight, further moves and a second commit are
//! rejected. Nothing is queued; the caller retries after the first save
//! resolves.

use crate::api::ReorderBackend;
use crate::error::{PersistenceError, Result, ValidationError};
use crate::image_list::ImageList;
use crate::product::ProductId;

/// Snapshot handed to the network task by [`ReorderController::begin_commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    pub product_id: ProductId,
    pub images: Vec<String>,
}

/// Owns the working copy of one product's image order and applies
/// sequential moves without loss or duplication.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReorderController {
    working: ImageList,
    saving: bool,
}

impl ReorderController {
    /// Creates a controller with an empty working copy.
    pub fn new() -> Self {
        Self {
            working: ImageList::new(),
            saving: false,
        }
    }

    /// Creates a controller initialized from a defensive copy of `images`.
    pub fn with_images(images: &[String]) -> Self {
        Self {
            working: ImageList::from_slice(images),
            saving: false,
        }
    }

    /// Sets the working copy to a defensive copy of `images`.
    pub fn initialize(&mut self, images: &[String]) {
        self.working = ImageList::from_slice(images);
    }

    /// Discards the working copy and reinitializes from a freshly supplied
    /// list. Used when the parent's source-of-truth data changes
    /// independently of reordering.
    pub fn reset(&mut self, images: &[String]) {
        self.initialize(images);
    }

    /// Returns the current working copy.
    pub fn images(&self) -> &[String] {
        self.working.as_slice()
    }

    /// Returns the number of images in the working copy.
    pub fn len(&self) -> usize {
        self.working.len()
    }

    /// Checks if the working copy is empty.
    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Reordering is only meaningful with at least two images; the UI shows
    /// a no-op state below that.
    pub fn can_reorder(&self) -> bool {
        self.working.len() >= 2
    }

    /// True while a commit is in flight. The UI observes this to disable
    /// further move/save controls.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Moves the image at `source` to `target` and returns the new working
    /// copy. `source == target` is a no-op. Rejected while a save is in
    /// flight so an in-flight payload is never raced by further edits.
    pub fn move_image(&mut self, source: usize, target: usize) -> Result<&[String]> {
        if self.saving {
            return Err(ValidationError::SaveInFlight.into());
        }
        self.working.move_image(source, target)?;
        Ok(self.working.as_slice())
    }

    /// Validates the commit preconditions, enters the Saving state, and
    /// returns the snapshot to send. The second commit while one is in
    /// flight is rejected, not queued.
    pub fn begin_commit(&mut self, product_id: &ProductId) -> Result<CommitRequest> {
        if self.saving {
            return Err(ValidationError::SaveInFlight.into());
        }
        if product_id.is_empty() {
            return Err(ValidationError::MissingProductId.into());
        }
        if self.working.is_empty() {
            return Err(ValidationError::EmptyImageList.into());
        }

        self.saving = true;
        Ok(CommitRequest {
            product_id: product_id.clone(),
            images: self.working.as_slice().to_vec(),
        })
    }

    /// Leaves the Saving state and applies the outcome of the network call.
    ///
    /// On success the server-confirmed list replaces the working copy
    /// verbatim; the server is authoritative even when it differs from the
    /// list that was sent. On failure the working copy is left exactly as
    /// it was so the user can retry without re-dragging.
    pub fn finish_commit(
        &mut self,
        outcome: std::result::Result<Vec<String>, PersistenceError>,
    ) -> Result<&[String]> {
        self.saving = false;
        let confirmed = outcome?;
        self.working.replace(confirmed);
        Ok(self.working.as_slice())
    }

    /// Sends the full working copy to the backend for `product_id` and
    /// returns the server-confirmed order. The single suspension point of
    /// the crate; no retries, no cancellation.
    pub async fn commit<B: ReorderBackend>(
        &mut self,
        backend: &B,
        product_id: &ProductId,
    ) -> Result<Vec<String>> {
        let request = self.begin_commit(product_id)?;
        let outcome = backend
            .reorder_images(&request.product_id, &request.images)
            .await;
        self.finish_commit(outcome)?;
        Ok(self.working.as_slice().to_vec())
    }
}
