//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! # Catalog
//! GET    /api/categories           - Category list ("all" entry first)
//! GET    /api/plants?category=ID   - Plant list for a category (default: all)
//! GET    /api/plants/{key}         - Plant detail (for the modal)
//!
//! # Cart
//! GET    /api/cart                 - Cart lines and total
//! POST   /api/cart/items           - Add one unit of an item
//! DELETE /api/cart/items/{index}   - Remove the whole line at an index
//! ```

pub mod cart;
pub mod catalog;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(catalog::categories))
        .route("/plants", get(catalog::plants))
        .route("/plants/{key}", get(catalog::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/items", post(cart::add))
        .route("/items/{index}", delete(cart::remove))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api", catalog_routes())
        .nest("/api/cart", cart_routes())
}
