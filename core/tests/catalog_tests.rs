// tests/catalog_tests.rs
mod common;

use cartflow::{CatalogProvider, ProductId, StaticCatalog};
use common::*;

const CATALOG_JSON: &str = r#"{
  "form1": [
    {"id": 101, "title": "Chemistry Form 1", "price": 450.0, "image": "img/101.jpg", "author": "KLB"}
  ],
  "stationery": [
    {"id": "st-9", "title": "A4 Ruled Pad", "price": 120.0, "image": "img/st-9.jpg", "category": "Paper"},
    {"id": "st-10", "title": "Fountain Pen", "price": 350.0, "image": "img/st-10.jpg", "available": false}
  ]
}"#;

#[tokio::test]
async fn finds_products_across_categories() {
  setup_tracing();
  let catalog = StaticCatalog::from_json(CATALOG_JSON).unwrap();
  assert_eq!(catalog.product_count(), 3);

  let pad = catalog
    .find_product(&ProductId::from("st-9"))
    .await
    .unwrap()
    .expect("pad should be found");
  assert_eq!(pad.title, "A4 Ruled Pad");
  assert_eq!(pad.category.as_deref(), Some("Paper"));

  assert!(catalog.find_product(&ProductId::from("missing")).await.unwrap().is_none());
}

#[tokio::test]
async fn numeric_json_ids_match_their_string_form() {
  setup_tracing();
  let catalog = StaticCatalog::from_json(CATALOG_JSON).unwrap();

  let chem = catalog
    .find_product(&ProductId::from("101"))
    .await
    .unwrap()
    .expect("numeric id must be reachable by its string form");
  assert_eq!(chem.author.as_deref(), Some("KLB"));
  // Availability defaults to true when the catalog omits it.
  assert!(chem.available);
}

#[tokio::test]
async fn catalog_availability_flag_blocks_adding() {
  setup_tracing();
  let catalog = StaticCatalog::from_json(CATALOG_JSON).unwrap();
  let shop = storefront();

  let pen = catalog
    .find_product(&ProductId::from("st-10"))
    .await
    .unwrap()
    .expect("pen exists in the catalog");
  assert!(!pen.available);
  assert!(shop.service.add_item(&pen, 1).is_err());
}

#[test]
fn malformed_catalog_json_is_an_error() {
  setup_tracing();
  assert!(StaticCatalog::from_json("[1, 2, 3]").is_err());
}
