// cartflow_core/src/cart/service.rs

//! The cart mutator: every operation that changes cart contents.
//!
//! Each operation is a synchronous read-modify-write against the store —
//! load the valid cart, compute the new cart, persist it — immediately
//! followed by a full refresh of every mounted surface. No state is
//! cached between calls.

use super::{Cart, ProductId};
use crate::cart::item::CartLineItem;
use crate::catalog::Product;
use crate::error::{CartError, CartResult};
use crate::projector::Projector;
use crate::store::CartStore;
use std::sync::Arc;
use tracing::{debug, info};

pub struct CartService {
  store: Arc<CartStore>,
  projector: Arc<Projector>,
}

impl std::fmt::Debug for CartService {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CartService").finish_non_exhaustive()
  }
}

impl CartService {
  pub fn new(store: Arc<CartStore>, projector: Arc<Projector>) -> Self {
    CartService { store, projector }
  }

  pub fn store(&self) -> &Arc<CartStore> {
    &self.store
  }

  pub fn projector(&self) -> &Arc<Projector> {
    &self.projector
  }

  /// The current valid cart, fresh from the store.
  pub fn cart(&self) -> CartResult<Cart> {
    self.store.load_valid()
  }

  /// Adds `quantity` units of the product: increments the existing line
  /// item if one matches the product id, appends a new one otherwise.
  ///
  /// `quantity` must be at least 1; adding is never a way to decrement
  /// (use [`CartService::set_quantity`] or [`CartService::remove_item`]).
  pub fn add_item(&self, product: &Product, quantity: u32) -> CartResult<Cart> {
    if quantity == 0 {
      return Err(CartError::validation("quantity", "quantity must be at least 1"));
    }
    if !product.available {
      return Err(CartError::validation(
        "product",
        format!("'{}' is currently unavailable", product.title),
      ));
    }

    let mut cart = self.store.load_valid()?;
    match cart.get_mut(&product.id) {
      Some(line) => {
        line.quantity += quantity;
        info!(product = %product.title, quantity = line.quantity, "Updated cart quantity");
      }
      None => {
        cart.push(CartLineItem::from_product(product, quantity));
        info!(product = %product.title, quantity, "Added product to cart");
      }
    }
    self.commit(cart)
  }

  /// The common "Add to Cart" button: one unit of the product.
  pub fn add_one(&self, product: &Product) -> CartResult<Cart> {
    self.add_item(product, 1)
  }

  /// Deletes the line item with the matching id. Absence is a no-op, not
  /// an error; the refresh still runs so surfaces stay current.
  pub fn remove_item(&self, id: &ProductId) -> CartResult<Cart> {
    let mut cart = self.store.load_valid()?;
    match cart.remove(id) {
      Some(removed) => info!(product_id = %id, title = %removed.title, "Removed item from cart"),
      None => debug!(product_id = %id, "Remove requested for id not in cart"),
    }
    self.commit(cart)
  }

  /// Overwrites the item's quantity. A quantity of 0 removes the item; an
  /// unknown id is a no-op.
  pub fn set_quantity(&self, id: &ProductId, quantity: u32) -> CartResult<Cart> {
    if quantity == 0 {
      return self.remove_item(id);
    }

    let mut cart = self.store.load_valid()?;
    match cart.get_mut(id) {
      Some(line) => {
        line.quantity = quantity;
        info!(product_id = %id, quantity, "Updated item quantity");
      }
      None => debug!(product_id = %id, "Quantity update requested for id not in cart"),
    }
    self.commit(cart)
  }

  /// Empties the cart store entirely and refreshes every surface.
  /// Idempotent: clearing an already-empty cart is fine.
  pub fn clear(&self) -> CartResult<Cart> {
    self.store.clear()?;
    info!("Cart cleared");
    let cart = Cart::new();
    self.projector.refresh(&cart);
    Ok(cart)
  }

  fn commit(&self, cart: Cart) -> CartResult<Cart> {
    self.store.save(&cart)?;
    self.projector.refresh(&cart);
    Ok(cart)
  }
}
