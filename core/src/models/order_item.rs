// src/models/order_item.rs

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::{Entity, Value};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
  pub id: Uuid,
  pub order_id: Uuid,
  pub product_id: Uuid,
  pub quantity: i32,
  // Snapshot of the product price when the item was generated
  pub price_cents: i64,
}

impl Entity for OrderItem {
  const TABLE: &'static str = "order_items";
  const COLUMNS: &'static [&'static str] = &["id", "order_id", "product_id", "quantity", "price_cents"];

  fn values(&self) -> Vec<Value> {
    vec![
      Value::Uuid(self.id),
      Value::Uuid(self.order_id),
      Value::Uuid(self.product_id),
      Value::Int(self.quantity),
      Value::BigInt(self.price_cents),
    ]
  }
}
