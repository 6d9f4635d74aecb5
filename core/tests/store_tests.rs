// tests/store_tests.rs
mod common;

use cartflow::{Cart, CartLineItem, CartStore, MemoryBackend, ProductId, StoreConfig};
use common::*;
use std::sync::Arc;

fn line(id: &str, title: &str, price: f64, quantity: u32) -> CartLineItem {
  CartLineItem {
    id: ProductId::from(id),
    title: title.to_string(),
    price,
    image: format!("img/{id}.jpg"),
    quantity,
  }
}

#[test]
fn absent_key_loads_as_empty_cart() {
  setup_tracing();
  let store = CartStore::new(Arc::new(MemoryBackend::new()));

  let cart = store.load().unwrap();
  assert!(cart.is_empty());
}

#[test]
fn unparseable_payload_loads_as_empty_cart() {
  setup_tracing();
  let backend = Arc::new(MemoryBackend::new());
  backend.seed("cart", "{not json at all");
  let store = CartStore::new(backend);

  assert!(store.load().unwrap().is_empty());
}

#[test]
fn non_array_payload_loads_as_empty_cart() {
  setup_tracing();
  let backend = Arc::new(MemoryBackend::new());
  backend.seed("cart", r#"{"id": "A1", "title": "Book"}"#);
  let store = CartStore::new(backend);

  assert!(store.load().unwrap().is_empty());
}

#[test]
fn numeric_ids_are_normalized_to_strings_on_read() {
  setup_tracing();
  let backend = Arc::new(MemoryBackend::new());
  // An older page persisted this entry with a numeric id.
  backend.seed(
    "cart",
    r#"[{"id": 101, "title": "Chemistry Form 2", "price": 450.0, "image": "img/101.jpg", "quantity": 1}]"#,
  );
  let store = CartStore::new(backend);

  let cart = store.load().unwrap();
  assert_eq!(cart.len(), 1);
  assert!(cart.get(&ProductId::from("101")).is_some());
  assert!(cart.get(&ProductId::from(101u64)).is_some());
}

#[test]
fn load_valid_filters_and_heals_persisted_damage() {
  setup_tracing();
  let backend = Arc::new(MemoryBackend::new());
  // One well-formed item, one missing its price, one that is not even an object.
  backend.seed(
    "cart",
    r#"[
      {"id": "A1", "title": "Book", "price": 500.0, "image": "x.jpg", "quantity": 1},
      {"id": "B2", "title": "Broken", "image": "y.jpg", "quantity": 2},
      "garbage"
    ]"#,
  );
  let store = CartStore::new(backend.clone());

  let cart = store.load_valid().unwrap();
  assert_eq!(cart.len(), 1);
  assert_eq!(cart.items()[0].id, ProductId::from("A1"));

  // The filtered result was re-persisted: a second raw read sees only the
  // well-formed item.
  let healed = backend.raw("cart").unwrap();
  assert!(healed.contains("A1"));
  assert!(!healed.contains("B2"));
  assert!(!healed.contains("garbage"));
}

#[test]
fn load_tolerates_invariant_violations_that_load_valid_drops() {
  setup_tracing();
  let backend = Arc::new(MemoryBackend::new());
  // Decodes fine, but a persisted quantity of 0 violates the line-item
  // invariant.
  backend.seed(
    "cart",
    r#"[{"id": "A1", "title": "Book", "price": 500.0, "image": "x.jpg", "quantity": 0}]"#,
  );
  let store = CartStore::new(backend);

  assert_eq!(store.load().unwrap().len(), 1);
  assert!(store.load_valid().unwrap().is_empty());
}

#[test]
fn load_valid_collapses_persisted_duplicate_ids() {
  setup_tracing();
  let backend = Arc::new(MemoryBackend::new());
  // Two pages each appended their own line for the same product.
  backend.seed(
    "cart",
    r#"[
      {"id": "A1", "title": "Book", "price": 500.0, "image": "x.jpg", "quantity": 1},
      {"id": "A1", "title": "Book", "price": 500.0, "image": "x.jpg", "quantity": 4}
    ]"#,
  );
  let store = CartStore::new(backend);

  let cart = store.load_valid().unwrap();
  assert_eq!(cart.len(), 1);
  assert!(cart.has_unique_ids());
  // First occurrence wins; the healed cart can be re-persisted.
  assert_eq!(cart.get(&ProductId::from("A1")).unwrap().quantity, 1);
}

#[test]
fn save_rejects_duplicate_ids() {
  setup_tracing();
  let store = CartStore::new(Arc::new(MemoryBackend::new()));
  let cart = Cart::from_items(vec![line("A1", "Book", 500.0, 1), line("A1", "Book again", 500.0, 2)]);

  assert!(store.save(&cart).is_err());
}

#[test]
fn save_rejects_invalid_line_items() {
  setup_tracing();
  let store = CartStore::new(Arc::new(MemoryBackend::new()));
  let cart = Cart::from_items(vec![line("A1", "   ", 500.0, 1)]);

  assert!(store.save(&cart).is_err());
}

#[test]
fn clear_deletes_the_key_and_is_idempotent() {
  setup_tracing();
  let backend = Arc::new(MemoryBackend::new());
  let store = CartStore::new(backend.clone());

  store.save(&Cart::from_items(vec![line("A1", "Book", 500.0, 1)])).unwrap();
  assert!(backend.contains_key("cart"));

  store.clear().unwrap();
  assert!(!backend.contains_key("cart"));

  // Clearing an already-empty store neither fails nor recreates the key.
  store.clear().unwrap();
  assert!(!backend.contains_key("cart"));
  assert!(store.load().unwrap().is_empty());
}

#[test]
fn custom_storage_keys_are_respected() {
  setup_tracing();
  let backend = Arc::new(MemoryBackend::new());
  let store = CartStore::with_config(
    backend.clone(),
    StoreConfig {
      cart_key: "stationery_cart".to_string(),
      last_order_key: "stationery_last_order".to_string(),
    },
  );

  store.save(&Cart::from_items(vec![line("S1", "Pens", 120.0, 3)])).unwrap();
  assert!(backend.contains_key("stationery_cart"));
  assert!(!backend.contains_key("cart"));
}

#[test]
fn unreadable_last_order_record_is_treated_as_absent() {
  setup_tracing();
  let backend = Arc::new(MemoryBackend::new());
  backend.seed("last_order", "{truncated");
  let store = CartStore::new(backend);

  assert!(store.load_last_order().unwrap().is_none());
}
