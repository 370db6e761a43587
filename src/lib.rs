// SPDX-License-Identifier: MPL-2.0
//! `product_gallery` is the product-image ordering core of an e-commerce
//! back office.
//!
//! It owns the working copy of a product's image list while staff drag
//! images into a new order, applies moves without loss or duplication, and
//! persists the final order through a single backend call. Rendering, drag
//! capture, and user notifications belong to the surrounding admin UI and
//! stay out of this crate.

#![doc(html_root_url = "https://docs.rs/product_gallery/0.1.0")]

pub mod api;
pub mod config;
pub mod error;
pub mod image_list;
pub mod product;
pub mod reorder;
