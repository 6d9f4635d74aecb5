// cartflow_core/src/store/cart_store.rs

//! The single owner of the persisted cart representation.
//!
//! Every other component reads a fresh copy through this store on every
//! operation and never caches it across calls; that is what keeps several
//! independently-initialized surfaces from drifting apart.

use super::backend::KeyValueBackend;
use crate::cart::{Cart, CartLineItem};
use crate::checkout::OrderDetails;
use crate::error::{CartError, CartResult};
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage-key configuration. Defaults match the keys the storefront has
/// always used, so an existing persisted cart keeps working.
#[derive(Debug, Clone)]
pub struct StoreConfig {
  pub cart_key: String,
  pub last_order_key: String,
}

impl Default for StoreConfig {
  fn default() -> Self {
    StoreConfig {
      cart_key: "cart".to_string(),
      last_order_key: "last_order".to_string(),
    }
  }
}

pub struct CartStore {
  backend: Arc<dyn KeyValueBackend>,
  config: StoreConfig,
}

impl std::fmt::Debug for CartStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CartStore").field("config", &self.config).finish()
  }
}

impl CartStore {
  pub fn new(backend: Arc<dyn KeyValueBackend>) -> Self {
    CartStore::with_config(backend, StoreConfig::default())
  }

  pub fn with_config(backend: Arc<dyn KeyValueBackend>, config: StoreConfig) -> Self {
    CartStore { backend, config }
  }

  pub fn config(&self) -> &StoreConfig {
    &self.config
  }

  /// Loads the persisted cart, tolerating damage: an absent key, an
  /// unparseable payload, or a non-array payload all yield the empty
  /// cart, and entries that do not decode as line items are discarded.
  ///
  /// Decoded items are *not* semantically validated here; a quantity of 0
  /// or a negative price survives this read and is only filtered by
  /// [`CartStore::load_valid`].
  pub fn load(&self) -> CartResult<Cart> {
    Ok(self.load_counting()?.0)
  }

  /// [`CartStore::load`] filtered to items satisfying the line-item
  /// invariants. If anything was dropped, either at decode time or by the
  /// invariant filter, the cleaned cart is re-persisted immediately so
  /// the damage never survives a read (self-healing).
  pub fn load_valid(&self) -> CartResult<Cart> {
    let (mut cart, raw_entries) = self.load_counting()?;
    cart.retain_valid();
    cart.dedupe_ids();
    // Anything lost at decode time, to the invariant filter, or to
    // duplicate-id collapse counts as damage.
    let dropped = raw_entries.saturating_sub(cart.len());
    if dropped > 0 {
      warn!(dropped, kept = cart.len(), "Cleaned invalid cart items");
      self.save(&cart)?;
    }
    Ok(cart)
  }

  /// Serializes and persists the cart in a single backend write.
  ///
  /// The store is the invariant backstop: a cart with duplicate ids or an
  /// invalid line item is refused before the backend is touched.
  pub fn save(&self, cart: &Cart) -> CartResult<()> {
    if !cart.has_unique_ids() {
      return Err(CartError::Internal(
        "refusing to persist a cart with duplicate product ids".to_string(),
      ));
    }
    if let Some(bad) = cart.iter().find(|item| !item.is_valid()) {
      return Err(CartError::Internal(format!(
        "refusing to persist invalid line item for product {}",
        bad.id
      )));
    }
    let raw = serde_json::to_string(cart).map_err(CartError::storage)?;
    self.backend.set(&self.config.cart_key, &raw)?;
    debug!(items = cart.len(), "Cart persisted");
    Ok(())
  }

  /// Removes the persisted cart entirely. Implemented as key deletion;
  /// idempotent.
  pub fn clear(&self) -> CartResult<()> {
    self.backend.remove(&self.config.cart_key)?;
    debug!("Cart cleared");
    Ok(())
  }

  /// Retains the completed order for receipt re-display. Overwrites any
  /// previous record.
  pub fn save_last_order(&self, order: &OrderDetails) -> CartResult<()> {
    let raw = serde_json::to_string(order).map_err(CartError::storage)?;
    self.backend.set(&self.config.last_order_key, &raw)
  }

  /// Loads the last completed order, if one was recorded. An unreadable
  /// record is treated as absent.
  pub fn load_last_order(&self) -> CartResult<Option<OrderDetails>> {
    let Some(raw) = self.backend.get(&self.config.last_order_key)? else {
      return Ok(None);
    };
    match serde_json::from_str(&raw) {
      Ok(order) => Ok(Some(order)),
      Err(error) => {
        warn!(%error, "Discarding unreadable last-order record");
        Ok(None)
      }
    }
  }

  /// Decodes the persisted payload, returning the decodable line items
  /// together with the number of raw entries the payload carried.
  fn load_counting(&self) -> CartResult<(Cart, usize)> {
    let Some(raw) = self.backend.get(&self.config.cart_key)? else {
      return Ok((Cart::new(), 0));
    };

    let value: serde_json::Value = match serde_json::from_str(&raw) {
      Ok(value) => value,
      Err(error) => {
        warn!(%error, "Persisted cart is unreadable; treating as empty");
        return Ok((Cart::new(), 0));
      }
    };

    let serde_json::Value::Array(entries) = value else {
      warn!("Persisted cart is not a list; treating as empty");
      return Ok((Cart::new(), 0));
    };

    let raw_entries = entries.len();
    let items: Vec<CartLineItem> = entries
      .into_iter()
      .filter_map(|entry| match serde_json::from_value::<CartLineItem>(entry) {
        Ok(item) => Some(item),
        Err(error) => {
          debug!(%error, "Discarding undecodable cart entry");
          None
        }
      })
      .collect();

    Ok((Cart::from_items(items), raw_entries))
  }
}
