// cartflow_core/src/checkout/order.rs

//! The order snapshot built once at submission time.

use super::delivery::DeliveryQuote;
use super::form::Customer;
use crate::cart::{Cart, CartLineItem};
use crate::projector::DisplayLabels;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable snapshot of one completed checkout: the cart's line items,
/// the customer, and the computed amounts. Constructed synchronously at
/// form-submission time, handed to the collaborators, then retained only
/// as the "last order" record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
  pub order_id: Uuid,
  pub items: Vec<CartLineItem>,
  pub customer: Customer,
  pub subtotal: f64,
  pub delivery_cost: f64,
  /// Delivery to this locality was not in the table; the surcharge is
  /// zero and the customer is asked to contact the store.
  pub delivery_on_request: bool,
  pub placed_at: DateTime<Utc>,
}

impl OrderDetails {
  pub fn new(cart: &Cart, customer: Customer, delivery: DeliveryQuote) -> Self {
    OrderDetails {
      order_id: Uuid::new_v4(),
      items: cart.items().to_vec(),
      customer,
      subtotal: cart.subtotal(),
      delivery_cost: delivery.cost,
      delivery_on_request: delivery.contact_for_details,
      placed_at: Utc::now(),
    }
  }

  pub fn total(&self) -> f64 {
    self.subtotal + self.delivery_cost
  }

  /// Formats the order summary handed to the notification channel.
  pub fn notice(&self, labels: &DisplayLabels) -> OrderNotice {
    let total = labels.amount(self.total());

    let mut body = String::from("Order Details:\n");
    for item in &self.items {
      body.push_str(&format!(
        "Item: {}, Quantity: {}, Price: {}, Subtotal: {}\n",
        item.title,
        item.quantity,
        labels.amount(item.price),
        labels.amount(item.line_subtotal()),
      ));
    }
    body.push_str(&format!("\nSubtotal: {}\n", labels.amount(self.subtotal)));
    if self.delivery_on_request {
      body.push_str(&format!(
        "Delivery ({}): contact for details\n",
        self.customer.town
      ));
    } else {
      body.push_str(&format!(
        "Delivery ({}): {}\n",
        self.customer.town,
        labels.amount(self.delivery_cost)
      ));
    }
    body.push_str(&format!("Total: {}\n", total));
    body.push_str(&format!("\nCounty: {}\n", self.customer.county));
    body.push_str(&format!("Customer: {} <{}>\n", self.customer.name, self.customer.email));

    OrderNotice {
      subject: format!("New Order (Total: {}, County: {})", total, self.customer.county),
      body,
      order_id: self.order_id,
      total_display: total,
      county: self.customer.county.clone(),
    }
  }
}

/// Structured order summary delivered through `OrderNotifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderNotice {
  pub subject: String,
  pub body: String,
  pub order_id: Uuid,
  pub total_display: String,
  pub county: String,
}
