// src/models/mod.rs

//! Row types for the catalog schema and the column-level plumbing shared by the
//! staged insert path and the bulk-copy path.

pub mod order;
pub mod order_item;
pub mod product;
pub mod top_seller;
pub mod value;

pub use order::Order;
pub use order_item::OrderItem;
pub use product::{Product, ProductCatalog};
pub use top_seller::TopSeller;
pub use value::Value;

/// A persisted row type.
///
/// `COLUMNS` and `values` must line up one-to-one; both the multi-row `INSERT`
/// builder and the COPY encoder rely on that ordering.
pub trait Entity: Send + Sync + 'static {
  /// Destination table.
  const TABLE: &'static str;
  /// Column names in the order produced by [`Entity::values`].
  const COLUMNS: &'static [&'static str];

  fn values(&self) -> Vec<Value>;
}
