// cartflow_core/examples/basic_cart.rs

use cartflow::{
  CartError, CartResult, CartService, CartStore, CartView, DisplayLabels, MemoryBackend, Product, ProductId,
  Projector, Surface,
};
use std::sync::Arc;
use tracing::info;

// A stand-in for the navbar count badge: redraws its whole "region"
// (a line on stdout) from the view on every render.
struct CountBadge;

impl Surface for CountBadge {
  fn name(&self) -> &str {
    "count-badge"
  }

  fn render(&mut self, view: &CartView) -> CartResult<()> {
    println!("[badge] cart ({})", view.count_label());
    Ok(())
  }
}

// The dropdown summary: read-only listing with an empty-state message.
struct DropdownSummary;

impl Surface for DropdownSummary {
  fn name(&self) -> &str {
    "dropdown-summary"
  }

  fn render(&mut self, view: &CartView) -> CartResult<()> {
    if view.is_empty() {
      println!("[dropdown] {}", view.empty_message);
      return Ok(());
    }
    for line in &view.lines {
      println!("[dropdown] {} — {} × {}", line.title, line.unit_price, line.quantity);
    }
    println!("[dropdown] Total: {}", view.total);
    Ok(())
  }
}

fn main() -> Result<(), CartError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Cart Example ---");

  let backend = Arc::new(MemoryBackend::new());
  let store = Arc::new(CartStore::new(backend));
  let projector = Arc::new(Projector::new(DisplayLabels::default()));
  projector.mount(Box::new(CountBadge));
  projector.mount(Box::new(DropdownSummary));

  let service = CartService::new(store, projector);

  let chemistry = Product::new("101", "Chemistry Form 2", 450.0, "img/101.jpg");
  let novel = Product::new("n-7", "The River and the Source", 650.0, "img/n-7.jpg");

  // Every mutation persists and then redraws both surfaces.
  service.add_one(&chemistry)?;
  service.add_item(&novel, 2)?;
  service.add_one(&chemistry)?; // merges into the existing line

  service.set_quantity(&ProductId::from("n-7"), 1)?;
  service.remove_item(&ProductId::from("101"))?;

  let cart = service.cart()?;
  info!(items = cart.len(), subtotal = cart.subtotal(), "Final cart state");

  service.clear()?;
  Ok(())
}
