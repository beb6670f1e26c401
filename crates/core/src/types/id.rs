//! Newtype IDs for type-safe entity references.
//!
//! Catalog and address identifiers are opaque strings (`"101"`, `"home"`).
//! Use the `define_id!` macro to create wrappers that prevent accidentally
//! passing a restaurant ID where a menu item ID is expected.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>`, `From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use quickbite_core::define_id;
/// define_id!(DriverId);
/// define_id!(CouponId);
///
/// let driver = DriverId::new("d-1");
/// let coupon = CouponId::new("d-1");
///
/// // These are different types, so this won't compile:
/// // let _: DriverId = coupon;
/// assert_eq!(driver.as_str(), coupon.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(RestaurantId);
define_id!(ItemId);
define_id!(AddressId);
define_id!(UserId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ItemId::new("101");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"101\"");

        let parsed: ItemId = serde_json::from_str("\"301\"").unwrap();
        assert_eq!(parsed, ItemId::from("301"));
    }

    #[test]
    fn test_id_display() {
        let id = AddressId::new(String::from("2"));
        assert_eq!(id.to_string(), "2");
        assert_eq!(id.as_ref(), "2");
    }
}
