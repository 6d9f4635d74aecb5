// cartflow_core/src/projector/view.rs

//! Pure projection of a cart into display-ready view state.
//!
//! `CartView::project` is a deterministic function of the cart and the
//! display labels: equal inputs give equal views. Surfaces consume the
//! view; they never reach back into the store.

use crate::cart::{Cart, ProductId};

/// Display strings shared by every surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLabels {
  /// Fixed currency label prefixed to every amount.
  pub currency: String,
  /// Shown by summary/detail surfaces when the cart has no items.
  pub empty_message: String,
}

impl Default for DisplayLabels {
  fn default() -> Self {
    DisplayLabels {
      currency: "KSh".to_string(),
      empty_message: "Your cart is empty for now. Add some amazing finds!".to_string(),
    }
  }
}

impl DisplayLabels {
  /// Two-decimal amount with the currency label, e.g. `KSh 250.00`.
  pub fn amount(&self, value: f64) -> String {
    format!("{} {:.2}", self.currency, value)
  }
}

/// One rendered line of the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
  pub id: ProductId,
  pub title: String,
  pub image: String,
  pub quantity: u32,
  pub unit_price: String,
  pub line_subtotal: String,
}

/// Everything a surface needs to redraw itself from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
  pub item_count: u32,
  pub lines: Vec<LineView>,
  pub total: String,
  pub empty_message: String,
}

impl CartView {
  pub fn project(cart: &Cart, labels: &DisplayLabels) -> Self {
    let lines = cart
      .iter()
      .map(|item| LineView {
        id: item.id.clone(),
        title: item.title.clone(),
        image: item.image.clone(),
        quantity: item.quantity,
        unit_price: labels.amount(item.price),
        line_subtotal: labels.amount(item.line_subtotal()),
      })
      .collect();

    CartView {
      item_count: cart.item_count(),
      lines,
      total: labels.amount(cart.subtotal()),
      empty_message: labels.empty_message.clone(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }

  /// The count-badge text. Displays `0` when empty, never blank.
  pub fn count_label(&self) -> String {
    self.item_count.to_string()
  }
}
