// cartflow_core/src/checkout/form.rs

//! Checkout-form input and its validation.

use crate::error::{CartError, CartResult};
use serde::{Deserialize, Serialize};

/// Raw form fields as captured from the checkout page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
  pub name: String,
  pub email: String,
  pub county: String,
  pub town: String,
}

/// Validated customer contact details, carried on the order record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
  pub name: String,
  pub email: String,
  pub county: String,
  pub town: String,
}

impl CheckoutForm {
  /// Checks every field and returns the trimmed customer details, or a
  /// `Validation` error naming the first offending field with a message
  /// fit for inline display.
  pub fn validate(&self) -> CartResult<Customer> {
    let name = self.name.trim();
    if name.is_empty() {
      return Err(CartError::validation("name", "Please enter your name"));
    }

    let email = self.email.trim();
    if !email_is_well_formed(email) {
      return Err(CartError::validation("email", "Please enter a valid email address"));
    }

    let county = self.county.trim();
    if county.is_empty() {
      return Err(CartError::validation(
        "county",
        "Please select your county before proceeding!",
      ));
    }

    let town = self.town.trim();
    if town.is_empty() {
      return Err(CartError::validation("town", "Please select your town before proceeding!"));
    }

    Ok(Customer {
      name: name.to_string(),
      email: email.to_string(),
      county: county.to_string(),
      town: town.to_string(),
    })
  }
}

/// Accepts the simple `local@domain.tld` shape: exactly one `@`, a
/// non-empty local part, and a dotted domain with non-empty segments.
/// Deliverability checks belong to the notification channel, not here.
fn email_is_well_formed(email: &str) -> bool {
  if email.chars().any(char::is_whitespace) {
    return false;
  }
  let mut parts = email.splitn(2, '@');
  let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
    return false;
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }
  let segments: Vec<&str> = domain.split('.').collect();
  segments.len() >= 2 && segments.iter().all(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
  use super::email_is_well_formed;

  #[test]
  fn accepts_plain_addresses() {
    assert!(email_is_well_formed("jane@example.com"));
    assert!(email_is_well_formed("j.doe@mail.co.ke"));
  }

  #[test]
  fn rejects_malformed_addresses() {
    assert!(!email_is_well_formed(""));
    assert!(!email_is_well_formed("jane"));
    assert!(!email_is_well_formed("jane@"));
    assert!(!email_is_well_formed("@example.com"));
    assert!(!email_is_well_formed("jane@example"));
    assert!(!email_is_well_formed("jane@example..com"));
    assert!(!email_is_well_formed("jane doe@example.com"));
    assert!(!email_is_well_formed("jane@ex@ample.com"));
  }
}
