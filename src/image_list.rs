// SPDX-License-Identifier: MPL-2.0
//! Ordered image list for a single product.
//!
//! Position 0 is the main product image, so order is semantically
//! meaningful. Every move preserves the length and the multiset of
//! elements: nothing is silently dropped or duplicated, duplicates
//! included (the same URL may legitimately appear twice).

use crate::error::ValidationError;

/// An ordered sequence of image references (URLs) belonging to one product.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageList {
    images: Vec<String>,
}

impl ImageList {
    /// Creates a new empty ImageList.
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Creates an ImageList from a defensive copy of the given slice.
    pub fn from_slice(images: &[String]) -> Self {
        Self {
            images: images.to_vec(),
        }
    }

    /// Replaces the contents wholesale, e.g. with a server-confirmed order.
    pub fn replace(&mut self, images: Vec<String>) {
        self.images = images;
    }

    /// Moves the element at `source` to `target`, shifting the elements in
    /// between. `source == target` leaves the list untouched.
    ///
    /// Both indices are checked before any mutation, so a failed move never
    /// alters the list.
    pub fn move_image(&mut self, source: usize, target: usize) -> Result<(), ValidationError> {
        let len = self.images.len();
        if source >= len {
            return Err(ValidationError::IndexOutOfBounds { index: source, len });
        }
        if target >= len {
            return Err(ValidationError::IndexOutOfBounds { index: target, len });
        }
        if source == target {
            return Ok(());
        }

        let image = self.images.remove(source);
        self.images.insert(target, image);
        Ok(())
    }

    /// Returns the current order as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.images
    }

    /// Returns the image at the given position, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    /// Returns the main image (position 0), if any.
    pub fn main_image(&self) -> Option<&str> {
        self.get(0)
    }

    /// Iterates over the images in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.images.iter().map(String::as_str)
    }

    /// Returns the number of images in the list.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Consumes the list and returns the underlying order.
    pub fn into_vec(self) -> Vec<String> {
        self.images
    }
}

impl From<Vec<String>> for ImageList {
    fn from(images: Vec<String>) -> Self {
        Self { images }
    }
}
