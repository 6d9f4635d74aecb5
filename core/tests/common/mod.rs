// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use async_trait::async_trait;
use cartflow::{
  CartError, CartResult, CartService, CartStore, CartView, ConfirmationGate, DisplayLabels, MemoryBackend,
  OrderDetails, OrderNotice, OrderNotifier, Product, Projector, Receipt, ReceiptGenerator, Surface,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Product fixtures ---

pub fn book(id: &str, title: &str, price: f64) -> Product {
  Product::new(id, title, price, format!("img/{id}.jpg"))
}

pub fn out_of_stock(id: &str, title: &str, price: f64) -> Product {
  let mut product = book(id, title, price);
  product.available = false;
  product
}

// --- Test harness: backend + store + projector + service ---

pub struct Storefront {
  pub backend: Arc<MemoryBackend>,
  pub store: Arc<CartStore>,
  pub projector: Arc<Projector>,
  pub service: Arc<CartService>,
}

pub fn storefront() -> Storefront {
  let backend = Arc::new(MemoryBackend::new());
  let store = Arc::new(CartStore::new(backend.clone()));
  let projector = Arc::new(Projector::new(DisplayLabels::default()));
  let service = Arc::new(CartService::new(store.clone(), projector.clone()));
  Storefront {
    backend,
    store,
    projector,
    service,
  }
}

// --- Surfaces ---

/// Records every view it is asked to render; stands in for any of the
/// real surfaces (count badge, dropdown, modal).
pub struct RecordingSurface {
  name: String,
  views: Arc<Mutex<Vec<CartView>>>,
}

impl RecordingSurface {
  pub fn new(name: &str) -> (Self, Arc<Mutex<Vec<CartView>>>) {
    let views = Arc::new(Mutex::new(Vec::new()));
    (
      RecordingSurface {
        name: name.to_string(),
        views: views.clone(),
      },
      views,
    )
  }
}

impl Surface for RecordingSurface {
  fn name(&self) -> &str {
    &self.name
  }

  fn render(&mut self, view: &CartView) -> CartResult<()> {
    self.views.lock().push(view.clone());
    Ok(())
  }
}

pub fn last_view(views: &Arc<Mutex<Vec<CartView>>>) -> CartView {
  views.lock().last().cloned().expect("surface was never rendered")
}

/// A surface whose mount point is absent on the current page.
pub struct UnmountedSurface {
  pub name: String,
  pub attempts: Arc<AtomicUsize>,
}

impl UnmountedSurface {
  pub fn new(name: &str) -> (Self, Arc<AtomicUsize>) {
    let attempts = Arc::new(AtomicUsize::new(0));
    (
      UnmountedSurface {
        name: name.to_string(),
        attempts: attempts.clone(),
      },
      attempts,
    )
  }
}

impl Surface for UnmountedSurface {
  fn name(&self) -> &str {
    &self.name
  }

  fn render(&mut self, _view: &CartView) -> CartResult<()> {
    self.attempts.fetch_add(1, Ordering::SeqCst);
    Err(CartError::MountNotFound {
      surface: self.name.clone(),
    })
  }
}

// --- Checkout collaborator mocks ---

#[derive(Default)]
pub struct MockNotifier {
  pub fail: AtomicBool,
  pub delay_ms: AtomicUsize,
  pub calls: AtomicUsize,
  pub sent: Mutex<Vec<OrderNotice>>,
}

impl MockNotifier {
  pub fn new() -> Arc<Self> {
    Arc::new(MockNotifier::default())
  }

  pub fn failing() -> Arc<Self> {
    let notifier = MockNotifier::default();
    notifier.fail.store(true, Ordering::SeqCst);
    Arc::new(notifier)
  }

  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl OrderNotifier for MockNotifier {
  async fn send(&self, notice: &OrderNotice) -> anyhow::Result<()> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    let delay = self.delay_ms.load(Ordering::SeqCst);
    if delay > 0 {
      tokio::time::sleep(std::time::Duration::from_millis(delay as u64)).await;
    }
    if self.fail.load(Ordering::SeqCst) {
      anyhow::bail!("simulated notification outage");
    }
    self.sent.lock().push(notice.clone());
    Ok(())
  }
}

#[derive(Default)]
pub struct MockReceiptGenerator {
  pub fail: AtomicBool,
  pub calls: AtomicUsize,
}

impl MockReceiptGenerator {
  pub fn new() -> Arc<Self> {
    Arc::new(MockReceiptGenerator::default())
  }

  pub fn failing() -> Arc<Self> {
    let generator = MockReceiptGenerator::default();
    generator.fail.store(true, Ordering::SeqCst);
    Arc::new(generator)
  }

  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl ReceiptGenerator for MockReceiptGenerator {
  async fn generate(&self, order: &OrderDetails) -> anyhow::Result<Receipt> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    if self.fail.load(Ordering::SeqCst) {
      anyhow::bail!("simulated receipt failure");
    }
    Ok(Receipt {
      file_name: format!("receipt-{}.pdf", order.order_id),
      bytes: format!("receipt for order {}", order.order_id).into_bytes(),
    })
  }
}

/// Confirmation gate with a fixed answer; records the prompts it saw.
pub struct ScriptedGate {
  pub answer: bool,
  pub prompts: Mutex<Vec<String>>,
}

impl ScriptedGate {
  pub fn accepting() -> Arc<Self> {
    Arc::new(ScriptedGate {
      answer: true,
      prompts: Mutex::new(Vec::new()),
    })
  }

  pub fn declining() -> Arc<Self> {
    Arc::new(ScriptedGate {
      answer: false,
      prompts: Mutex::new(Vec::new()),
    })
  }
}

impl ConfirmationGate for ScriptedGate {
  fn confirm(&self, prompt: &str) -> bool {
    self.prompts.lock().push(prompt.to_string());
    self.answer
  }
}
