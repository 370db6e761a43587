// SPDX-License-Identifier: MPL-2.0
//! Product identity and the parent-level record a confirmed reorder is
//! mirrored back into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque product identifier. Always supplied by the backend, never
/// generated locally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty id means "no product selected"; committing against it is a
    /// validation error.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minimal product record as the back office sees it. The `images` field is
/// the server-side source of truth the working copy is initialized from and
/// reconciled against after a successful commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Adopts a server-confirmed image order into the record.
    pub fn apply_image_order(&mut self, images: Vec<String>) {
        self.images = images;
    }
}
