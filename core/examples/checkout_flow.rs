// cartflow_core/examples/checkout_flow.rs

use async_trait::async_trait;
use cartflow::{
  AutoConfirm, CartService, CartStore, CheckoutConfig, CheckoutCoordinator, CheckoutForm, CheckoutOutcome,
  DisplayLabels, MemoryBackend, OrderDetails, OrderNotice, OrderNotifier, Product, Projector, Receipt,
  ReceiptGenerator,
};
use std::sync::Arc;
use tracing::info;

// Logs the order summary instead of calling an email service.
struct LoggingNotifier;

#[async_trait]
impl OrderNotifier for LoggingNotifier {
  async fn send(&self, notice: &OrderNotice) -> anyhow::Result<()> {
    info!(subject = %notice.subject, "Would send order email:\n{}", notice.body);
    Ok(())
  }
}

// Produces a plain-text "receipt" in place of a PDF document.
struct TextReceipts;

#[async_trait]
impl ReceiptGenerator for TextReceipts {
  async fn generate(&self, order: &OrderDetails) -> anyhow::Result<Receipt> {
    let mut text = format!("Receipt for order {}\n", order.order_id);
    for item in &order.items {
      text.push_str(&format!("  {} x{}\n", item.title, item.quantity));
    }
    Ok(Receipt {
      file_name: format!("receipt-{}.txt", order.order_id),
      bytes: text.into_bytes(),
    })
  }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Checkout Flow Example ---");

  let backend = Arc::new(MemoryBackend::new());
  let store = Arc::new(CartStore::new(backend));
  let projector = Arc::new(Projector::new(DisplayLabels::default()));
  let service = Arc::new(CartService::new(store.clone(), projector));

  service.add_item(&Product::new("101", "Chemistry Form 2", 450.0, "img/101.jpg"), 2)?;
  service.add_item(&Product::new("st-9", "A4 Ruled Pad", 120.0, "img/st-9.jpg"), 5)?;

  let coordinator = CheckoutCoordinator::new(
    service.clone(),
    Arc::new(LoggingNotifier),
    Arc::new(AutoConfirm),
    CheckoutConfig::default(),
  )
  .with_receipt_generator(Arc::new(TextReceipts));

  let form = CheckoutForm {
    name: "Jane Wanjiku".to_string(),
    email: "jane@example.com".to_string(),
    county: "Nairobi".to_string(),
    town: "Westlands".to_string(),
  };

  match coordinator.submit(&form).await? {
    CheckoutOutcome::Redirected(report) => {
      info!(
        destination = %report.destination,
        notified = report.notified,
        "Order {} complete, total {:.2}",
        report.order.order_id,
        report.order.total()
      );
      if let Some(receipt) = report.receipt {
        info!(file = %receipt.file_name, "Receipt generated:\n{}", String::from_utf8_lossy(&receipt.bytes));
      }
    }
    CheckoutOutcome::Cancelled => info!("Customer cancelled at the confirmation prompt"),
  }

  // The last-order record survives for receipt re-display.
  if let Some(last) = store.load_last_order()? {
    info!(order_id = %last.order_id, "Last order on record");
  }

  Ok(())
}
