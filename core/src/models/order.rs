// src/models/order.rs

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::{Entity, Value};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: Uuid,
  pub order_date: DateTime<Utc>,
}

impl Entity for Order {
  const TABLE: &'static str = "orders";
  const COLUMNS: &'static [&'static str] = &["id", "order_date"];

  fn values(&self) -> Vec<Value> {
    vec![Value::Uuid(self.id), Value::Timestamp(self.order_date)]
  }
}
