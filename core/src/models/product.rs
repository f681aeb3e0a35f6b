// src/models/product.rs

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::{Entity, Value};

pub const NAME_MAX_LEN: usize = 200;
pub const SKU_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: Uuid,
  pub name: String,
  pub sku: String,
  /// Fixed-point price with two decimal places, stored as cents.
  pub price_cents: i64,
  pub created_at: DateTime<Utc>,
}

impl Entity for Product {
  const TABLE: &'static str = "products";
  const COLUMNS: &'static [&'static str] = &["id", "name", "sku", "price_cents", "created_at"];

  fn values(&self) -> Vec<Value> {
    vec![
      Value::Uuid(self.id),
      Value::Text(self.name.clone()),
      Value::Text(self.sku.clone()),
      Value::BigInt(self.price_cents),
      Value::Timestamp(self.created_at),
    ]
  }
}

/// Every product loaded once up front: ids in load order for uniform picks,
/// plus an id lookup for the picked row.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
  ids: Vec<Uuid>,
  by_id: HashMap<Uuid, Product>,
}

impl ProductCatalog {
  pub fn new(products: Vec<Product>) -> Self {
    let ids = products.iter().map(|p| p.id).collect();
    let by_id = products.into_iter().map(|p| (p.id, p)).collect();
    Self { ids, by_id }
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }

  pub fn get(&self, id: &Uuid) -> Option<&Product> {
    self.by_id.get(id)
  }

  /// Picks a uniformly random id and resolves it. `None` when the catalog is
  /// empty or the id has no row behind it.
  pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Product> {
    let id = self.ids.choose(rng)?;
    self.by_id.get(id)
  }
}

impl FromIterator<Product> for ProductCatalog {
  fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}
