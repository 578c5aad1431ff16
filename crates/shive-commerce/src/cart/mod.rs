//! Shopping cart module.
//!
//! Contains the cart store, its change events, and a thread-safe handle.

mod cart;
mod shared;

pub use cart::{CartEvent, CartOperation, CartStore, CartSummary};
pub use shared::SharedCartStore;
