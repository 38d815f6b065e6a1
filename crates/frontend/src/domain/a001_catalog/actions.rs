//! Cart and wishlist actions of the product card.
//!
//! Neither action is backed by a cart or wishlist yet: both only write the
//! product to the console log.

use contracts::domain::a001_catalog::aggregate::Product;

pub fn add_to_wishlist(product: &Product) {
    log::info!("Added to wishlist: {:?}", product);
}

pub fn add_to_cart(product: &Product) {
    log::info!("Added to cart: {:?}", product);
}
