// cartflow_core/src/cart/cart.rs

use super::item::{CartLineItem, ProductId};
use serde::{Deserialize, Serialize};

/// The ordered collection of line items, unique by product id.
///
/// Insertion order is preserved for display purposes only; computations
/// (count, subtotal) are order-independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
  items: Vec<CartLineItem>,
}

impl Cart {
  pub fn new() -> Self {
    Cart::default()
  }

  pub fn from_items(items: Vec<CartLineItem>) -> Self {
    Cart { items }
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn items(&self) -> &[CartLineItem] {
    &self.items
  }

  pub fn iter(&self) -> std::slice::Iter<'_, CartLineItem> {
    self.items.iter()
  }

  pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
    self.items.iter().find(|item| &item.id == id)
  }

  pub fn get_mut(&mut self, id: &ProductId) -> Option<&mut CartLineItem> {
    self.items.iter_mut().find(|item| &item.id == id)
  }

  /// Appends a line item. The caller is responsible for id uniqueness;
  /// `CartStore::save` rejects carts violating it as a backstop.
  pub fn push(&mut self, item: CartLineItem) {
    self.items.push(item);
  }

  /// Removes and returns the line item with the matching id, if present.
  pub fn remove(&mut self, id: &ProductId) -> Option<CartLineItem> {
    let pos = self.items.iter().position(|item| &item.id == id)?;
    Some(self.items.remove(pos))
  }

  /// Sum of all quantities across line items (the count-badge number).
  pub fn item_count(&self) -> u32 {
    self.items.iter().map(|item| item.quantity).sum()
  }

  /// Sum of `price * quantity` across line items.
  pub fn subtotal(&self) -> f64 {
    // Fold from positive zero: f64's `Sum` identity is -0.0, which would
    // display an empty cart's total as "-0.00".
    self
      .items
      .iter()
      .map(CartLineItem::line_subtotal)
      .fold(0.0, |acc, v| acc + v)
  }

  pub fn has_unique_ids(&self) -> bool {
    for (i, item) in self.items.iter().enumerate() {
      if self.items[i + 1..].iter().any(|other| other.id == item.id) {
        return false;
      }
    }
    true
  }

  /// Drops items violating the line-item invariants, returning how many
  /// were removed.
  pub fn retain_valid(&mut self) -> usize {
    let before = self.items.len();
    self.items.retain(CartLineItem::is_valid);
    before - self.items.len()
  }

  /// Drops later duplicates of any repeated id, keeping the first
  /// occurrence. Returns how many were removed.
  pub fn dedupe_ids(&mut self) -> usize {
    let before = self.items.len();
    let mut seen: Vec<ProductId> = Vec::with_capacity(before);
    self.items.retain(|item| {
      if seen.contains(&item.id) {
        false
      } else {
        seen.push(item.id.clone());
        true
      }
    });
    before - self.items.len()
  }
}

impl<'a> IntoIterator for &'a Cart {
  type Item = &'a CartLineItem;
  type IntoIter = std::slice::Iter<'a, CartLineItem>;

  fn into_iter(self) -> Self::IntoIter {
    self.items.iter()
  }
}
