// cartflow_core/src/checkout/delivery.rs

//! Delivery surcharges keyed by locality.

use serde::{Deserialize, Serialize};

/// Flat surcharge table for the known local delivery areas. Localities
/// outside the table cost nothing up front; the customer is asked to
/// contact the store for arrangements instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryTable {
  rates: Vec<(String, f64)>,
}

/// Outcome of a delivery lookup for one locality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeliveryQuote {
  pub cost: f64,
  /// True when the locality is outside the delivery table.
  pub contact_for_details: bool,
}

impl Default for DeliveryTable {
  fn default() -> Self {
    // The store's local delivery zone around Nairobi.
    DeliveryTable::new(vec![
      ("Nairobi CBD", 150.0),
      ("Westlands", 200.0),
      ("Kasarani", 250.0),
      ("Embakasi", 250.0),
      ("Ruiru", 300.0),
      ("Kikuyu", 300.0),
      ("Thika", 350.0),
    ])
  }
}

impl DeliveryTable {
  pub fn new<S: Into<String>>(rates: Vec<(S, f64)>) -> Self {
    DeliveryTable {
      rates: rates.into_iter().map(|(town, cost)| (town.into(), cost)).collect(),
    }
  }

  pub fn empty() -> Self {
    DeliveryTable { rates: Vec::new() }
  }

  /// Looks up the surcharge for a locality, matching case-insensitively
  /// on the trimmed name.
  pub fn quote(&self, town: &str) -> DeliveryQuote {
    let needle = town.trim();
    match self
      .rates
      .iter()
      .find(|(name, _)| name.eq_ignore_ascii_case(needle))
    {
      Some((_, cost)) => DeliveryQuote {
        cost: *cost,
        contact_for_details: false,
      },
      None => DeliveryQuote {
        cost: 0.0,
        contact_for_details: true,
      },
    }
  }

  pub fn localities(&self) -> impl Iterator<Item = &str> {
    self.rates.iter().map(|(name, _)| name.as_str())
  }
}
