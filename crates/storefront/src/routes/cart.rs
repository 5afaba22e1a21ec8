//! Cart route handlers.
//!
//! The cart lives in the session; every mutation loads it, applies one cart
//! operation, saves it back, and re-emits the full cart view so the panel
//! can re-render from a consistent snapshot.

use axum::{
    Json,
    extract::Path,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::debug;

use sapling_core::{ItemKey, Price};

use crate::cart::{CartItem, CartLine, CartStore};
use crate::error::{AppError, Result};
use crate::models::session_keys;

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: Price,
}

impl From<&CartStore> for CartView {
    fn from(cart: &CartStore) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            total: cart.total(),
        }
    }
}

/// Request body for adding an item.
#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    /// Item identity key (plant id, or name when the id is absent).
    pub key: ItemKey,
    /// Display name.
    pub name: String,
    /// Unit price, as a decimal string.
    pub price: Price,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the cart from the session, or an empty one.
async fn load_cart(session: &Session) -> CartStore {
    session
        .get::<CartStore>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Save the cart back to the session.
async fn save_cart(session: &Session, cart: &CartStore) -> Result<()> {
    session
        .insert(session_keys::CART, cart)
        .await
        .map_err(|e| AppError::Internal(format!("session store: {e}")))
}

// =============================================================================
// Handlers
// =============================================================================

/// `GET /api/cart`
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await;
    Ok(Json(CartView::from(&cart)))
}

/// `POST /api/cart/items`
///
/// Adding an item whose key is already in the cart increments that line's
/// quantity; the line count never grows for a repeated key.
pub async fn add(session: Session, Json(req): Json<AddToCartRequest>) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await;

    let line = cart.add(CartItem {
        key: req.key,
        name: req.name,
        price: req.price,
    });
    debug!(key = %line.key, quantity = line.quantity, "added to cart");

    save_cart(&session, &cart).await?;
    Ok(Json(CartView::from(&cart)))
}

/// `DELETE /api/cart/items/{index}`
///
/// Removes the whole line at `index`. A stale index (out of range after a
/// concurrent re-render) is ignored and the current cart is returned
/// unchanged.
pub async fn remove(session: Session, Path(index): Path<usize>) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await;

    match cart.remove_at(index) {
        Some(removed) => debug!(key = %removed.key, index, "removed from cart"),
        None => debug!(index, "ignoring out-of-range cart index"),
    }

    save_cart(&session, &cart).await?;
    Ok(Json(CartView::from(&cart)))
}
