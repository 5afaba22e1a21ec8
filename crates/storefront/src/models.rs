//! Session-stored types and keys.

/// Session keys for storefront data.
pub mod session_keys {
    /// Key for storing the session's cart.
    pub const CART: &str = "cart";
}
