//! Sapling Core - Shared types library.
//!
//! This crate provides common types used across all Sapling components:
//! - `storefront` - The public catalog-and-cart service
//! - `integration-tests` - End-to-end test harness
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe keys and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
