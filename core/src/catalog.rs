// cartflow_core/src/catalog.rs

//! The product-catalog collaborator seam.
//!
//! The storefront sources its products from static, category-partitioned
//! JSON (textbooks, novels, stationery). The core only needs "find a
//! product by id"; `CatalogProvider` is that seam, and `StaticCatalog` is
//! the provided in-memory implementation mirroring the JSON shape.

use crate::cart::ProductId;
use crate::error::{CartError, CartResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_available() -> bool {
  true
}

/// Product metadata as served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  pub title: String,
  pub price: f64,
  pub image: String,
  #[serde(default)]
  pub author: Option<String>,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default = "default_available")]
  pub available: bool,
}

impl Product {
  pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: f64, image: impl Into<String>) -> Self {
    Product {
      id: id.into(),
      title: title.into(),
      price,
      image: image.into(),
      author: None,
      category: None,
      available: true,
    }
  }
}

/// Looks up product metadata by id; `Ok(None)` means "not found".
#[async_trait]
pub trait CatalogProvider: Send + Sync {
  async fn find_product(&self, id: &ProductId) -> CartResult<Option<Product>>;
}

/// In-memory catalog partitioned by category name, matching the static
/// JSON files the storefront ships (`products.json`, `stationery.json`).
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
  categories: HashMap<String, Vec<Product>>,
}

impl StaticCatalog {
  pub fn new() -> Self {
    StaticCatalog::default()
  }

  pub fn with_category(mut self, name: impl Into<String>, products: Vec<Product>) -> Self {
    self.categories.insert(name.into(), products);
    self
  }

  /// Parses the catalog from its JSON encoding: a map of category name to
  /// product list.
  pub fn from_json(raw: &str) -> CartResult<Self> {
    let categories: HashMap<String, Vec<Product>> =
      serde_json::from_str(raw).map_err(|e| CartError::Catalog { source: e.into() })?;
    Ok(StaticCatalog { categories })
  }

  pub fn product_count(&self) -> usize {
    self.categories.values().map(Vec::len).sum()
  }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
  async fn find_product(&self, id: &ProductId) -> CartResult<Option<Product>> {
    for products in self.categories.values() {
      if let Some(product) = products.iter().find(|p| &p.id == id) {
        return Ok(Some(product.clone()));
      }
    }
    tracing::debug!(product_id = %id, "Product not present in any catalog category");
    Ok(None)
  }
}
