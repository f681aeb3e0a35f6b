// src/orders.rs

//! Order generation: random orders and line items over existing products.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::Serialize;
use sqlx::PgPool;
use tracing::{info, instrument, warn};

use crate::bulk::{BulkCopy, TableBuffer};
use crate::context::DbContext;
use crate::error::{SeedError, SeedResult};
use crate::generator::RowGenerator;
use crate::import::check_row_count;
use crate::models::{Entity, Order, OrderItem, ProductCatalog};
use crate::strategy::WriteStrategy;

pub const DEFAULT_ORDER_COUNT: usize = 5_000;
pub const DEFAULT_MAX_ITEMS_PER_ORDER: usize = 5;

/// `max_items_per_order` must be at least 1, and neither the order count nor the
/// worst-case item count may exceed the per-request row cap.
pub fn check_order_request(order_count: usize, max_items_per_order: usize) -> SeedResult<()> {
  if max_items_per_order < 1 {
    return Err(SeedError::InvalidArgument {
      name: "maxItemsPerOrder",
      message: "must be at least 1".to_string(),
    });
  }
  check_row_count("orderCount", order_count)?;
  check_row_count("maxItemsPerOrder", order_count.saturating_mul(max_items_per_order))
}

/// Orders and their items, built in memory before anything is written.
#[derive(Debug, Clone, Default)]
pub struct OrderBatch {
  pub orders: Vec<Order>,
  pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderGeneration {
  pub strategy: WriteStrategy,
  pub orders: u64,
  pub order_items: u64,
  #[serde(skip)]
  pub elapsed: Duration,
}

impl OrderGeneration {
  pub fn elapsed_ms(&self) -> u64 {
    self.elapsed.as_millis() as u64
  }
}

/// Builds `order_count` orders, each with between 1 and `max_items_per_order`
/// items pointing at uniformly chosen catalog products. A pick that does not
/// resolve to a product is skipped.
pub fn plan_orders<R: Rng>(
  generator: &mut RowGenerator<R>,
  catalog: &ProductCatalog,
  order_count: usize,
  max_items_per_order: usize,
) -> SeedResult<OrderBatch> {
  check_order_request(order_count, max_items_per_order)?;

  let orders = generator.orders(order_count);
  let mut items = Vec::with_capacity(order_count.saturating_mul(max_items_per_order.saturating_add(1)) / 2);
  let mut skipped = 0usize;

  for order in &orders {
    let item_count = generator.rng().gen_range(1..=max_items_per_order);
    for _ in 0..item_count {
      let Some(product) = catalog.pick(generator.rng()) else {
        skipped += 1;
        continue;
      };
      items.push(generator.order_item(order, product));
    }
  }

  if skipped > 0 {
    warn!(skipped, "Some item picks did not resolve to a product and were skipped.");
  }
  Ok(OrderBatch { orders, items })
}

/// Loads the catalog, plans orders and persists them with `strategy`.
///
/// Arguments are checked before the catalog is read. Fails with
/// [`SeedError::NoProducts`] before writing anything when the catalog is empty. `elapsed` covers the whole workflow.
#[instrument(name = "orders::generate_orders", skip(pool, generator), err(Display))]
pub async fn generate_orders<R: Rng>(
  pool: &PgPool,
  generator: &mut RowGenerator<R>,
  order_count: usize,
  max_items_per_order: usize,
  strategy: WriteStrategy,
) -> SeedResult<OrderGeneration> {
  check_order_request(order_count, max_items_per_order)?;
  let started = Instant::now();

  let mut ctx = DbContext::new(pool.clone());
  let catalog = ctx.product_catalog().await?;
  if catalog.is_empty() {
    warn!("Order generation requested with no products in the catalog.");
    return Err(SeedError::NoProducts);
  }

  let batch = plan_orders(generator, &catalog, order_count, max_items_per_order)?;

  let (orders, order_items) = match strategy {
    WriteStrategy::Staged => {
      ctx.orders.add_range(batch.orders);
      ctx.order_items.add_range(batch.items);
      let summary = ctx.save_changes().await?;
      (summary.orders, summary.order_items)
    }
    WriteStrategy::BulkCopy => copy_batch(pool, &batch).await?,
  };
  let elapsed = started.elapsed();

  info!(orders, order_items, elapsed_ms = elapsed.as_millis() as u64, "Orders generated.");
  Ok(OrderGeneration {
    strategy,
    orders,
    order_items,
    elapsed,
  })
}

/// Orders then items, as two COPY streams in one transaction.
async fn copy_batch(pool: &PgPool, batch: &OrderBatch) -> SeedResult<(u64, u64)> {
  let orders = TableBuffer::from_entities(&batch.orders);
  let items = TableBuffer::from_entities(&batch.items);

  let mut conn = pool.acquire().await?;
  let mut tx = sqlx::Connection::begin(&mut *conn).await?;
  let order_rows = BulkCopy::new(&mut tx, Order::TABLE).write_to_server(&orders).await?;
  let item_rows = BulkCopy::new(&mut tx, OrderItem::TABLE).write_to_server(&items).await?;
  tx.commit().await?;

  Ok((order_rows, item_rows))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_zero_max_items_is_rejected() {
    let mut generator = RowGenerator::seeded(3);
    let catalog: ProductCatalog = generator.products(2).into_iter().collect();
    let result = plan_orders(&mut generator, &catalog, 1, 0);
    assert!(matches!(result, Err(SeedError::InvalidArgument { .. })));
  }

  #[test]
  fn test_huge_max_items_is_rejected_without_overflow() {
    let mut generator = RowGenerator::seeded(4);
    let catalog: ProductCatalog = generator.products(2).into_iter().collect();
    let result = plan_orders(&mut generator, &catalog, 1, usize::MAX);
    assert!(matches!(result, Err(SeedError::InvalidArgument { name: "maxItemsPerOrder", .. })));
  }

  #[test]
  fn test_order_request_bounds() {
    assert!(check_order_request(0, usize::MAX).is_ok());
    assert!(check_order_request(DEFAULT_ORDER_COUNT, DEFAULT_MAX_ITEMS_PER_ORDER).is_ok());
    assert!(matches!(
      check_order_request(usize::MAX, 1),
      Err(SeedError::InvalidArgument { name: "orderCount", .. })
    ));
    assert!(matches!(
      check_order_request(1_000, 1_001),
      Err(SeedError::InvalidArgument { name: "maxItemsPerOrder", .. })
    ));
  }
}
