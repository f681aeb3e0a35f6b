// server/src/messages.rs

//! Response text, kept in one place.

use seedbench::WriteStrategy;

pub const NO_PRODUCTS: &str = "Please create product data first. Orders must be linked to products.";

pub fn products_inserted(count: u64, strategy: WriteStrategy, elapsed_ms: u64) -> String {
  format!("{} products were added using {} in {} ms.", count, strategy.label(), elapsed_ms)
}

pub fn orders_generated(orders: u64, order_items: u64, strategy: WriteStrategy, elapsed_ms: u64) -> String {
  format!(
    "{} orders and {} order items were added using {} in {} ms.",
    orders,
    order_items,
    strategy.label(),
    elapsed_ms
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_products_message() {
    assert_eq!(
      products_inserted(10_000, WriteStrategy::BulkCopy, 250),
      "10000 products were added using COPY bulk load in 250 ms."
    );
  }

  #[test]
  fn test_orders_message() {
    assert_eq!(
      orders_generated(10, 27, WriteStrategy::Staged, 12),
      "10 orders and 27 order items were added using a staged unit of work in 12 ms."
    );
  }
}
