// src/lib.rs

//! Cartflow: the cart and checkout core of a multi-category storefront.
//!
//! Cartflow owns the canonical cart state inside durable key-value
//! storage and keeps every rendering surface consistent with it:
//!  - A `CartStore` with damage-tolerant, self-healing reads.
//!  - A `CartService` mutator: add, remove, set-quantity, clear — each a
//!    synchronous read-modify-write followed by a full surface refresh.
//!  - A `Projector` that turns the cart into deterministic view state and
//!    redraws every mounted `Surface` after every mutation.
//!  - A `CheckoutCoordinator` that validates the checkout form, gates on
//!    an explicit total confirmation, delegates to best-effort
//!    notification and receipt collaborators, and finalizes the order.
//!
//! Catalog lookup, notification delivery, and receipt generation are
//! external collaborators behind traits; cartflow ships in-memory
//! reference implementations for headless use.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod projector;
pub mod store;

// --- Re-exports for the Public API ---

// The cart data model and its mutator
pub use crate::cart::{Cart, CartLineItem, CartService, ProductId};

// Catalog collaborator seam
pub use crate::catalog::{CatalogProvider, Product, StaticCatalog};

// Persistence
pub use crate::store::{CartStore, KeyValueBackend, MemoryBackend, StoreConfig};

// Projection into UI surfaces
pub use crate::projector::{CartView, DisplayLabels, LineView, Projector, Surface};

// Checkout orchestration and its collaborator seams
pub use crate::checkout::{
  AutoConfirm, CheckoutConfig, CheckoutCoordinator, CheckoutForm, CheckoutOutcome, ConfirmationGate, Customer,
  DeliveryQuote, DeliveryTable, OrderDetails, OrderNotice, OrderNotifier, Receipt, ReceiptGenerator,
  SubmissionReport,
};

pub use crate::error::{CartError, CartResult};
