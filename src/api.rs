// SPDX-License-Identifier: MPL-2.0
//! Backend contract for persisting an image order.
//!
//! The whole wire surface of this crate is one call:
//!
//! ```text
//! PATCH {base_url}/products/{id}/reorder-images
//! { "reordered_images": ["c.png", "a.png", "b.png"] }
//! ```
//!
//! A reorder only counts as persisted when the response carries the
//! confirmation marker in `message` and the committed list in `data`.
//! A bare HTTP 200 without the marker is treated as unconfirmed, because
//! the backend replies 200 to several sibling endpoints with other shapes.

use crate::config::{Config, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::error::PersistenceError;
use crate::product::ProductId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sentinel `message` value the server sets only after the order was
/// actually applied.
pub const REORDER_CONFIRMED: &str = "Images reordered";

#[derive(Debug, Serialize)]
struct ReorderRequest<'a> {
    reordered_images: &'a [String],
}

/// Raw shape of the reorder response. Both fields are optional on the wire;
/// [`confirm`] decides whether the combination counts as a confirmation.
#[derive(Debug, Deserialize)]
pub struct ReorderResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<String>>,
}

/// Checks the confirmation marker and extracts the committed list.
pub fn confirm(response: ReorderResponse) -> Result<Vec<String>, PersistenceError> {
    match response.message.as_deref() {
        Some(REORDER_CONFIRMED) => response.data.ok_or_else(|| {
            PersistenceError::Unconfirmed("confirmed response carried no image list".to_string())
        }),
        Some(other) => Err(PersistenceError::Unconfirmed(format!(
            "unexpected message: {other}"
        ))),
        None => Err(PersistenceError::Unconfirmed(
            "response carried no message".to_string(),
        )),
    }
}

/// The persistence seam. Production code talks to [`HttpBackend`]; tests
/// substitute a mock.
#[allow(async_fn_in_trait)]
pub trait ReorderBackend {
    /// Atomically replaces the stored image order for `product_id` and
    /// returns the committed list.
    async fn reorder_images(
        &self,
        product_id: &ProductId,
        images: &[String],
    ) -> Result<Vec<String>, PersistenceError>;
}

/// Reqwest-backed implementation of the reorder endpoint.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Builds a backend for the given API base URL with the default
    /// request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, PersistenceError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
    }

    /// Builds a backend with an explicit request timeout. A timed-out
    /// commit surfaces as [`PersistenceError::Network`].
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PersistenceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("product_gallery/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PersistenceError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Builds a backend from the ambient configuration.
    pub fn from_config(config: &Config) -> Result<Self, PersistenceError> {
        Self::with_timeout(
            config.api_base_url(),
            Duration::from_secs(config.request_timeout_secs()),
        )
    }

    fn reorder_url(&self, product_id: &ProductId) -> String {
        format!("{}/products/{}/reorder-images", self.base_url, product_id)
    }
}

impl ReorderBackend for HttpBackend {
    async fn reorder_images(
        &self,
        product_id: &ProductId,
        images: &[String],
    ) -> Result<Vec<String>, PersistenceError> {
        let response = self
            .client
            .patch(self.reorder_url(product_id))
            .json(&ReorderRequest {
                reordered_images: images,
            })
            .send()
            .await
            .map_err(|e| PersistenceError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PersistenceError::Network(format!(
                "HTTP status: {}",
                response.status()
            )));
        }

        let body: ReorderResponse = response
            .json()
            .await
            .map_err(|e| PersistenceError::InvalidResponse(e.to_string()))?;

        confirm(body)
    }
}
