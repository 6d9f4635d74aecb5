// cartflow_core/src/cart/item.rs

//! The cart line item and the canonical product identifier type.

use crate::catalog::Product;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical, opaque product identifier.
///
/// The storefront catalog historically mixed numeric and string ids across
/// pages, which makes raw equality checks silently fail (e.g. `101` vs
/// `"101a"`). Every id entering this crate is normalized to its string
/// form, and comparisons happen on that one representation only.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
  pub fn new(id: impl Into<String>) -> Self {
    ProductId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl fmt::Display for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl fmt::Debug for ProductId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "ProductId({:?})", self.0)
  }
}

impl From<&str> for ProductId {
  fn from(id: &str) -> Self {
    ProductId(id.to_string())
  }
}

impl From<String> for ProductId {
  fn from(id: String) -> Self {
    ProductId(id)
  }
}

// Numeric catalog ids are formatted to their decimal string so that a
// numeric `101` and a string `"101"` always compare equal.
impl From<u64> for ProductId {
  fn from(id: u64) -> Self {
    ProductId(id.to_string())
  }
}

impl From<i64> for ProductId {
  fn from(id: i64) -> Self {
    ProductId(id.to_string())
  }
}

impl From<u32> for ProductId {
  fn from(id: u32) -> Self {
    ProductId(id.to_string())
  }
}

// Persisted carts written by older pages may carry numeric ids; accept
// both encodings on read and normalize to the string form.
impl<'de> Deserialize<'de> for ProductId {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
      type Value = ProductId;

      fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a product id as a string or integer")
      }

      fn visit_str<E: de::Error>(self, v: &str) -> Result<ProductId, E> {
        Ok(ProductId(v.to_string()))
      }

      fn visit_u64<E: de::Error>(self, v: u64) -> Result<ProductId, E> {
        Ok(ProductId(v.to_string()))
      }

      fn visit_i64<E: de::Error>(self, v: i64) -> Result<ProductId, E> {
        Ok(ProductId(v.to_string()))
      }
    }

    deserializer.deserialize_any(IdVisitor)
  }
}

/// One product entry in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
  pub id: ProductId,
  pub title: String,
  pub price: f64,
  pub image: String,
  pub quantity: u32,
}

impl CartLineItem {
  pub fn from_product(product: &Product, quantity: u32) -> Self {
    CartLineItem {
      id: product.id.clone(),
      title: product.title.clone(),
      price: product.price,
      image: product.image.clone(),
      quantity,
    }
  }

  /// Field-level invariants every *persisted* line item must satisfy.
  /// Items violating these may still appear transiently on a raw read;
  /// `CartStore::load_valid` filters them out and re-persists.
  pub fn is_valid(&self) -> bool {
    !self.id.is_empty()
      && !self.title.trim().is_empty()
      && !self.image.is_empty()
      && self.price.is_finite()
      && self.price >= 0.0
      && self.quantity >= 1
  }

  pub fn line_subtotal(&self) -> f64 {
    self.price * f64::from(self.quantity)
  }
}
