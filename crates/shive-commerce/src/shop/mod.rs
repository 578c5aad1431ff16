//! Shop page module.
//!
//! Contains the shop view model and its navigation location.

mod location;
mod view;

pub use location::{url_decode, url_encode, ShopLocation, SHOP_PATH};
pub use view::ShopView;
