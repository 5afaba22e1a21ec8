//! Newtype keys for type-safe entity references.
//!
//! Use the `define_key!` macro to create type-safe wrappers around upstream
//! string identifiers. Catalog identities come from a third-party API and are
//! opaque strings, not integers; the wrappers prevent accidentally mixing
//! category ids with item keys.

/// Macro to define a type-safe string key wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use sapling_core::define_key;
/// define_key!(PlantKey);
/// define_key!(OrderKey);
///
/// let plant = PlantKey::new("p-07");
/// let order = OrderKey::new("p-07");
///
/// // These are different types, so this won't compile:
/// // let _: PlantKey = order;
/// # assert_eq!(plant.as_str(), "p-07");
/// ```
#[macro_export]
macro_rules! define_key {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new key from any string-like value.
            #[must_use]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_owned())
            }
        }
    };
}

define_key!(CategoryId);
define_key!(ItemKey);

/// Reserved category id meaning "no category filter".
const ALL_CATEGORY_ID: &str = "all";

impl CategoryId {
    /// The synthetic "no filter" category id.
    #[must_use]
    pub fn all() -> Self {
        Self::new(ALL_CATEGORY_ID)
    }

    /// Whether this is the reserved "no filter" id.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.as_str() == ALL_CATEGORY_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display_and_as_str() {
        let key = ItemKey::new("p1");
        assert_eq!(key.as_str(), "p1");
        assert_eq!(key.to_string(), "p1");
    }

    #[test]
    fn test_all_category_is_reserved() {
        assert!(CategoryId::all().is_all());
        assert!(!CategoryId::new("5").is_all());
    }

    #[test]
    fn test_keys_compare_by_value() {
        assert_eq!(ItemKey::new("mango"), ItemKey::from("mango"));
        assert_ne!(ItemKey::new("mango"), ItemKey::new("guava"));
    }
}
