// cartflow_core/src/checkout/collaborators.rs

//! Seams for the external services the coordinator delegates to.
//!
//! Both channels are best-effort from the coordinator's point of view: a
//! failed send or a failed receipt is logged and reported on the outcome,
//! but never blocks order finalization.

use super::order::{OrderDetails, OrderNotice};
use async_trait::async_trait;

/// Delivers a formatted order summary to the store's fixed destination
/// (the production implementation is an email-sending service).
#[async_trait]
pub trait OrderNotifier: Send + Sync {
  async fn send(&self, notice: &OrderNotice) -> anyhow::Result<()>;
}

/// A downloadable order receipt document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
  pub file_name: String,
  pub bytes: Vec<u8>,
}

/// Produces a downloadable receipt artifact from an order snapshot.
#[async_trait]
pub trait ReceiptGenerator: Send + Sync {
  async fn generate(&self, order: &OrderDetails) -> anyhow::Result<Receipt>;
}

/// The human-in-the-loop gate shown before anything is sent: the customer
/// must confirm the total (delivery included). Declining aborts the
/// submission before any external call is made.
pub trait ConfirmationGate: Send + Sync {
  fn confirm(&self, prompt: &str) -> bool;
}

/// Gate that always proceeds. For headless embeddings and demos where the
/// confirmation dialog lives elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
  fn confirm(&self, _prompt: &str) -> bool {
    true
  }
}
