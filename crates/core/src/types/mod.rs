//! Core types for Sapling.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod key;
pub mod price;

pub use key::{CategoryId, ItemKey};
pub use price::Price;
