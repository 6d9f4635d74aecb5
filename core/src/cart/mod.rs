// cartflow_core/src/cart/mod.rs

//! The cart data model and its mutator.

#[allow(clippy::module_inception)]
mod cart;
mod item;
pub mod service;

pub use cart::Cart;
pub use item::{CartLineItem, ProductId};
pub use service::CartService;
