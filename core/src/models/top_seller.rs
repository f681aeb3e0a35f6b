// src/models/top_seller.rs

use serde::{Serialize, Serializer};
use sqlx::FromRow;
use uuid::Uuid;

/// One row of the top-sellers aggregate.
///
/// Revenue is summed in cents and serialized as `totalRevenue` in currency
/// units with two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TopSeller {
  pub product_id: Uuid,
  pub product_name: String,
  pub total_quantity: i64,
  #[serde(rename = "totalRevenue", serialize_with = "serialize_cents")]
  pub total_revenue_cents: i64,
}

impl TopSeller {
  pub fn total_revenue(&self) -> String {
    format_cents(self.total_revenue_cents)
  }
}

/// Cents as a fixed-point decimal string, e.g. `123456` -> `"1234.56"`.
pub fn format_cents(cents: i64) -> String {
  let sign = if cents < 0 { "-" } else { "" };
  let abs = cents.unsigned_abs();
  format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

fn serialize_cents<S: Serializer>(cents: &i64, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(&format_cents(*cents))
}
