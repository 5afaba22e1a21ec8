//! Domain types for the plant catalog.
//!
//! These types provide a clean, canonical shape separate from the raw
//! upstream records; all upstream field-name tolerance happens during
//! conversion, never downstream of it.

use serde::{Deserialize, Serialize};

use sapling_core::{CategoryId, ItemKey, Price};

/// A plant category offered as a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable id, unique within one loaded category set.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

impl Category {
    /// The synthetic "no category filter" entry prepended to every loaded
    /// category list.
    #[must_use]
    pub fn all_trees() -> Self {
        Self {
            id: CategoryId::all(),
            name: "All Trees".to_string(),
        }
    }
}

/// A plant offered in the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    /// Identity key; falls back to the name when the source record carries
    /// no usable identifier.
    pub key: ItemKey,
    /// Display name.
    pub name: String,
    /// Image URL; empty when the source has none.
    pub image_url: String,
    /// Short description; empty when the source has none.
    pub description: String,
    /// Denormalized category display string. Not a foreign key: the upstream
    /// API lets this disagree with any category id.
    pub category_label: String,
    /// Unit price.
    pub price: Price,
}
