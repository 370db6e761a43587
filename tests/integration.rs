// SPDX-License-Identifier: MPL-2.0
//! End-to-end reorder flows against a mock backend.
//!
//! The backend is an external collaborator, so these tests substitute the
//! `ReorderBackend` seam instead of standing up a server. Response shapes
//! mirror the real endpoint: `{"message": "Images reordered", "data": [...]}`.

use product_gallery::api::{confirm, ReorderBackend, ReorderResponse, REORDER_CONFIRMED};
use product_gallery::error::{Error, PersistenceError, ValidationError};
use product_gallery::product::{Product, ProductId};
use product_gallery::reorder::ReorderController;
use std::sync::Mutex;

fn images(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Scripted backend: answers with a fixed outcome and records what it was
/// asked to persist.
struct MockBackend {
    outcome: Mutex<Option<Result<Vec<String>, PersistenceError>>>,
    calls: Mutex<Vec<(ProductId, Vec<String>)>>,
}

impl MockBackend {
    fn succeeding_with(confirmed: Vec<String>) -> Self {
        Self {
            outcome: Mutex::new(Some(Ok(confirmed))),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing_with(error: PersistenceError) -> Self {
        Self {
            outcome: Mutex::new(Some(Err(error))),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ReorderBackend for MockBackend {
    async fn reorder_images(
        &self,
        product_id: &ProductId,
        images: &[String],
    ) -> Result<Vec<String>, PersistenceError> {
        self.calls
            .lock()
            .unwrap()
            .push((product_id.clone(), images.to_vec()));
        self.outcome
            .lock()
            .unwrap()
            .take()
            .expect("backend called more than scripted")
    }
}

#[tokio::test]
async fn drag_to_front_then_commit_confirms_new_order() {
    let mut controller = ReorderController::with_images(&images(&["a.png", "b.png", "c.png"]));

    let reordered = controller.move_image(2, 0).expect("move failed").to_vec();
    assert_eq!(reordered, ["c.png", "a.png", "b.png"]);

    let backend = MockBackend::succeeding_with(reordered.clone());
    let confirmed = controller
        .commit(&backend, &ProductId::new("prod123"))
        .await
        .expect("commit failed");

    assert_eq!(confirmed, ["c.png", "a.png", "b.png"]);
    assert!(!controller.is_saving());
    assert_eq!(backend.call_count(), 1);

    // The parent record mirrors the confirmed order.
    let mut product = Product {
        id: ProductId::new("prod123"),
        title: "Aviator frames".to_string(),
        images: images(&["a.png", "b.png", "c.png"]),
    };
    product.apply_image_order(confirmed);
    assert_eq!(product.images, ["c.png", "a.png", "b.png"]);
}

#[tokio::test]
async fn server_confirmed_order_wins_over_sent_order() {
    let mut controller = ReorderController::with_images(&images(&["a.png", "b.png"]));
    let backend = MockBackend::succeeding_with(images(&["b.png", "a.png", "extra.png"]));

    let confirmed = controller
        .commit(&backend, &ProductId::new("prod123"))
        .await
        .expect("commit failed");

    assert_eq!(confirmed, ["b.png", "a.png", "extra.png"]);
    assert_eq!(controller.images(), ["b.png", "a.png", "extra.png"]);
}

#[tokio::test]
async fn failed_commit_preserves_working_copy_for_retry() {
    let mut controller = ReorderController::with_images(&images(&["a.png", "b.png", "c.png"]));
    controller.move_image(2, 0).expect("move failed");
    let before = controller.images().to_vec();

    let backend = MockBackend::failing_with(PersistenceError::Network("timeout".into()));
    let err = controller
        .commit(&backend, &ProductId::new("prod123"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Persistence(PersistenceError::Network(_))));
    assert_eq!(controller.images(), before);
    assert!(!controller.is_saving());

    // Retrying with the preserved copy sends the same payload again.
    let retry_backend = MockBackend::succeeding_with(before.clone());
    let confirmed = controller
        .commit(&retry_backend, &ProductId::new("prod123"))
        .await
        .expect("retry failed");
    assert_eq!(confirmed, before);
}

#[tokio::test]
async fn unconfirmed_response_is_a_persistence_failure() {
    let mut controller = ReorderController::with_images(&images(&["a.png", "b.png"]));
    let backend = MockBackend::failing_with(PersistenceError::Unconfirmed(
        "unexpected message: Product updated".into(),
    ));

    let err = controller
        .commit(&backend, &ProductId::new("prod123"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Persistence(PersistenceError::Unconfirmed(_))
    ));
    assert_eq!(controller.images(), ["a.png", "b.png"]);
}

#[tokio::test]
async fn commit_with_empty_list_never_reaches_the_backend() {
    let mut controller = ReorderController::new();
    let backend = MockBackend::succeeding_with(Vec::new());

    let err = controller
        .commit(&backend, &ProductId::new("prod123"))
        .await
        .unwrap_err();
    assert_eq!(err, Error::Validation(ValidationError::EmptyImageList));
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn commit_without_product_id_never_reaches_the_backend() {
    let mut controller = ReorderController::with_images(&images(&["a.png", "b.png"]));
    let backend = MockBackend::succeeding_with(Vec::new());

    let err = controller.commit(&backend, &ProductId::new("")).await.unwrap_err();
    assert_eq!(err, Error::Validation(ValidationError::MissingProductId));
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn single_image_gallery_is_a_no_op_state() {
    let controller = ReorderController::with_images(&images(&["only.png"]));
    assert!(!controller.can_reorder());
}

#[test]
fn wire_shape_from_the_real_endpoint_confirms() {
    let body = serde_json::json!({
        "message": REORDER_CONFIRMED,
        "data": ["c.png", "a.png", "b.png"],
    });
    let response: ReorderResponse =
        serde_json::from_value(body).expect("deserialize failed");
    let confirmed = confirm(response).expect("should confirm");
    assert_eq!(confirmed, ["c.png", "a.png", "b.png"]);
}

#[test]
fn generic_success_body_does_not_confirm() {
    let body = serde_json::json!({ "success": true });
    let response: ReorderResponse =
        serde_json::from_value(body).expect("deserialize failed");
    assert!(confirm(response).is_err());
}
