//! The shopping cart aggregate.
//!
//! The cart owns its line vector exclusively; callers mutate it only through
//! [`CartStore::add`] and [`CartStore::remove_at`], which keeps the quantity
//! and key-uniqueness invariants from being bypassed. It serializes, so the
//! session layer can carry one cart per browsing session.

use serde::{Deserialize, Serialize};

use sapling_core::{ItemKey, Price};

/// An item being added to the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Identity key used to deduplicate lines.
    pub key: ItemKey,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
}

/// A line in the cart.
///
/// Invariants: `quantity >= 1`, and no two lines in one cart share a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Identity key.
    pub key: ItemKey,
    /// Display name captured at first add.
    pub name: String,
    /// Unit price captured at first add.
    pub price: Price,
    /// Units of this item, at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// The total for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.line_total(self.quantity)
    }
}

/// An insertion-ordered shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of an item.
    ///
    /// An existing line for the same key is incremented in place and keeps
    /// its position; a new item appends a quantity-1 line at the end.
    /// Returns a snapshot of the updated line.
    pub fn add(&mut self, item: CartItem) -> CartLine {
        if let Some(line) = self.lines.iter_mut().find(|line| line.key == item.key) {
            line.quantity += 1;
            return line.clone();
        }

        let line = CartLine {
            key: item.key,
            name: item.name,
            price: item.price,
            quantity: 1,
        };
        self.lines.push(line.clone());
        line
    }

    /// Remove the whole line at `index`.
    ///
    /// Out-of-range indices are a silent no-op: stale indices can arrive
    /// from a UI that re-rendered while the request was in flight.
    pub fn remove_at(&mut self, index: usize) -> Option<CartLine> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The cart total, recomputed from the current lines on every call.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Read-only ordered view of the lines.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
