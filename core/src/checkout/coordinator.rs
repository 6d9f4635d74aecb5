// cartflow_core/src/checkout/coordinator.rs

//! Drives one checkout attempt end to end.
//!
//! State machine for a single submission:
//!
//! ```text
//! Idle -> Validating -> { Rejected(reason)
//!                       | Confirming -> { Cancelled
//!                                       | Submitting -> ReceiptGenerating
//!                                         -> Finalizing -> Redirected } }
//! ```
//!
//! Every terminal path except `Rejected`/`Cancelled` ends in `Redirected`:
//! the notification send and the receipt generation are best-effort side
//! channels, not a two-phase commit.

use super::collaborators::{ConfirmationGate, OrderNotifier, Receipt, ReceiptGenerator};
use super::delivery::DeliveryTable;
use super::form::CheckoutForm;
use super::order::OrderDetails;
use crate::cart::CartService;
use crate::error::{CartError, CartResult};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Checkout-level configuration.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
  /// Where the customer is sent after a completed submission (the
  /// payment-selection page).
  pub payment_destination: String,
  pub delivery: DeliveryTable,
}

impl Default for CheckoutConfig {
  fn default() -> Self {
    CheckoutConfig {
      payment_destination: "choose-payment.html".to_string(),
      delivery: DeliveryTable::default(),
    }
  }
}

/// How a submission attempt ended. Validation failures and the empty-cart
/// gate are reported as errors instead; they leave no trace on the cart.
#[derive(Debug)]
pub enum CheckoutOutcome {
  /// The customer declined the total confirmation. Nothing was sent.
  Cancelled,
  /// The order went through: last-order record persisted, cart cleared,
  /// customer sent onward to payment selection.
  Redirected(SubmissionReport),
}

/// What actually happened on the successful path.
#[derive(Debug)]
pub struct SubmissionReport {
  pub destination: String,
  pub order: OrderDetails,
  /// False when the notification channel reported failure (logged, order
  /// finalized regardless).
  pub notified: bool,
  /// Present when a receipt generator is configured and succeeded.
  pub receipt: Option<Receipt>,
  /// User-facing warnings for the degraded paths (failed send, failed
  /// receipt).
  pub warnings: Vec<String>,
}

// Submission stages, surfaced in logs while an attempt is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
  Validating,
  Confirming,
  Submitting,
  ReceiptGenerating,
  Finalizing,
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Stage::Validating => "validating",
      Stage::Confirming => "confirming",
      Stage::Submitting => "submitting",
      Stage::ReceiptGenerating => "receipt_generating",
      Stage::Finalizing => "finalizing",
    };
    f.write_str(name)
  }
}

pub struct CheckoutCoordinator {
  service: Arc<CartService>,
  notifier: Arc<dyn OrderNotifier>,
  receipts: Option<Arc<dyn ReceiptGenerator>>,
  gate: Arc<dyn ConfirmationGate>,
  config: CheckoutConfig,
  in_flight: AtomicBool,
}

impl fmt::Debug for CheckoutCoordinator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CheckoutCoordinator")
      .field("config", &self.config)
      .field("has_receipt_generator", &self.receipts.is_some())
      .field("in_flight", &self.in_flight.load(Ordering::SeqCst))
      .finish()
  }
}

impl CheckoutCoordinator {
  pub fn new(
    service: Arc<CartService>,
    notifier: Arc<dyn OrderNotifier>,
    gate: Arc<dyn ConfirmationGate>,
    config: CheckoutConfig,
  ) -> Self {
    CheckoutCoordinator {
      service,
      notifier,
      receipts: None,
      gate,
      config,
      in_flight: AtomicBool::new(false),
    }
  }

  /// Attaches the optional receipt-generation collaborator.
  pub fn with_receipt_generator(mut self, receipts: Arc<dyn ReceiptGenerator>) -> Self {
    self.receipts = Some(receipts);
    self
  }

  pub fn config(&self) -> &CheckoutConfig {
    &self.config
  }

  /// Runs one checkout attempt.
  ///
  /// Only one submission may be in flight at a time; a second call while
  /// one runs returns `SubmissionInFlight` (the embedding should also
  /// disable the submit affordance for the duration). The guard is
  /// released on every exit path.
  #[instrument(skip_all, fields(county = %form.county, town = %form.town))]
  pub async fn submit(&self, form: &CheckoutForm) -> CartResult<CheckoutOutcome> {
    if self
      .in_flight
      .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
      .is_err()
    {
      warn!("Rejecting concurrent checkout submission");
      return Err(CartError::SubmissionInFlight);
    }

    let result = self.run_submission(form).await;
    self.in_flight.store(false, Ordering::SeqCst);
    result
  }

  async fn run_submission(&self, form: &CheckoutForm) -> CartResult<CheckoutOutcome> {
    info!(stage = %Stage::Validating, "Checkout attempt started");
    let customer = form.validate()?;

    let cart = self.service.cart()?;
    if cart.is_empty() {
      info!("Checkout rejected: cart is empty");
      return Err(CartError::EmptyCart);
    }

    let quote = self.config.delivery.quote(&customer.town);
    let order = OrderDetails::new(&cart, customer, quote);
    let labels = self.service.projector().labels().clone();
    let total_display = labels.amount(order.total());

    info!(stage = %Stage::Confirming, order_id = %order.order_id, total = %total_display, "Awaiting total confirmation");
    let prompt = if order.delivery_on_request {
      format!(
        "Your total is {} (delivery to {} to be arranged separately). \
         An email with your order will be sent to the store, then you will choose your payment method. Proceed?",
        total_display, order.customer.town
      )
    } else {
      format!(
        "Your total is {} (including {} delivery). \
         An email with your order will be sent to the store, then you will choose your payment method. Proceed?",
        total_display,
        labels.amount(order.delivery_cost)
      )
    };
    if !self.gate.confirm(&prompt) {
      info!(order_id = %order.order_id, "Checkout cancelled at confirmation");
      return Ok(CheckoutOutcome::Cancelled);
    }

    let mut warnings = Vec::new();

    info!(stage = %Stage::Submitting, order_id = %order.order_id, "Sending order notification");
    let notice = order.notice(&labels);
    let notified = match self.notifier.send(&notice).await {
      Ok(()) => {
        info!(order_id = %order.order_id, "Order notification sent");
        true
      }
      Err(error) => {
        // Best effort: the receipt is the effective record, so the order
        // still proceeds.
        warn!(order_id = %order.order_id, error = %error, "Order notification failed");
        warnings.push("Order email could not be sent; the store will follow up manually.".to_string());
        false
      }
    };

    let receipt = match &self.receipts {
      Some(generator) => {
        info!(stage = %Stage::ReceiptGenerating, order_id = %order.order_id, "Generating receipt");
        match generator.generate(&order).await {
          Ok(receipt) => Some(receipt),
          Err(error) => {
            warn!(order_id = %order.order_id, error = %error, "Receipt generation failed");
            warnings.push("Receipt could not be generated; keep your confirmation handy.".to_string());
            None
          }
        }
      }
      None => None,
    };

    info!(stage = %Stage::Finalizing, order_id = %order.order_id, "Persisting order record and clearing cart");
    self.service.store().save_last_order(&order)?;
    self.service.clear()?;

    info!(order_id = %order.order_id, destination = %self.config.payment_destination, "Checkout complete; redirecting");
    Ok(CheckoutOutcome::Redirected(SubmissionReport {
      destination: self.config.payment_destination.clone(),
      order,
      notified,
      receipt,
      warnings,
    }))
  }
}
