//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a subscription handle where a product id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer-backed newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident($inner:ty)) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Create an ID from its raw value.
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(
    /// Stable identity key of a catalog product.
    ProductId(u32)
);

define_id!(
    /// Handle returned when subscribing to state changes.
    SubscriptionId(u64)
);

impl SubscriptionId {
    /// The handle that follows this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}
