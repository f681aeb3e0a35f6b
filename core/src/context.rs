// src/context.rs

//! The persistence context: a pool handle plus one staging set per entity.
//!
//! Rows added to an [`EntitySet`] stay in memory until [`DbContext::save_changes`]
//! writes every pending set inside a single transaction. Reads go straight to the
//! pool and never see staged rows.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};
use tracing::{debug, info, instrument};

use crate::error::SeedResult;
use crate::models::{Entity, Order, OrderItem, Product, ProductCatalog, TopSeller};

/// Postgres caps a statement at 65535 bind parameters.
const MAX_BIND_PARAMS: usize = 65_535;

/// Rows waiting to be written for one entity type.
#[derive(Debug)]
pub struct EntitySet<E> {
  pending: Vec<E>,
}

impl<E> Default for EntitySet<E> {
  fn default() -> Self {
    Self { pending: Vec::new() }
  }
}

impl<E: Entity> EntitySet<E> {
  pub fn add(&mut self, entity: E) {
    self.pending.push(entity);
  }

  pub fn add_range<I: IntoIterator<Item = E>>(&mut self, entities: I) {
    self.pending.extend(entities);
  }

  pub fn pending(&self) -> &[E] {
    &self.pending
  }

  pub fn pending_count(&self) -> usize {
    self.pending.len()
  }

  fn take(&mut self) -> Vec<E> {
    std::mem::take(&mut self.pending)
  }
}

/// Rows written by one [`DbContext::save_changes`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveSummary {
  pub products: u64,
  pub orders: u64,
  pub order_items: u64,
}

impl SaveSummary {
  pub fn total(&self) -> u64 {
    self.products + self.orders + self.order_items
  }
}

pub struct DbContext {
  pool: PgPool,
  pub products: EntitySet<Product>,
  pub orders: EntitySet<Order>,
  pub order_items: EntitySet<OrderItem>,
}

impl DbContext {
  pub fn new(pool: PgPool) -> Self {
    Self {
      pool,
      products: EntitySet::default(),
      orders: EntitySet::default(),
      order_items: EntitySet::default(),
    }
  }

  pub fn has_changes(&self) -> bool {
    self.products.pending_count() + self.orders.pending_count() + self.order_items.pending_count() > 0
  }

  /// Flushes every staged row in one transaction, parents before children.
  ///
  /// Staged rows are consumed whether or not the flush succeeds. On error the
  /// transaction is dropped, which rolls it back.
  #[instrument(
    name = "context::save_changes",
    skip(self),
    fields(
      products = self.products.pending_count(),
      orders = self.orders.pending_count(),
      order_items = self.order_items.pending_count()
    ),
    err(Display)
  )]
  pub async fn save_changes(&mut self) -> SeedResult<SaveSummary> {
    if !self.has_changes() {
      debug!("No staged rows; nothing to flush.");
      return Ok(SaveSummary::default());
    }

    let products = self.products.take();
    let orders = self.orders.take();
    let order_items = self.order_items.take();

    let mut tx = self.pool.begin().await?;
    let summary = SaveSummary {
      products: insert_rows(&mut tx, &products).await?,
      orders: insert_rows(&mut tx, &orders).await?,
      order_items: insert_rows(&mut tx, &order_items).await?,
    };
    tx.commit().await?;

    info!(rows = summary.total(), "Unit of work committed.");
    Ok(summary)
  }

  /// Loads every row of `E`.
  pub async fn query_all<E>(&self) -> SeedResult<Vec<E>>
  where
    E: Entity + for<'r> FromRow<'r, PgRow> + Unpin,
  {
    let sql = format!("SELECT {} FROM {}", E::COLUMNS.join(", "), E::TABLE);
    let rows = sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?;
    Ok(rows)
  }

  pub async fn count<E: Entity>(&self) -> SeedResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);
    let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
    Ok(count)
  }

  #[instrument(name = "context::product_catalog", skip(self), err(Display))]
  pub async fn product_catalog(&self) -> SeedResult<ProductCatalog> {
    let catalog = ProductCatalog::new(self.query_all::<Product>().await?);
    debug!(products = catalog.len(), "Product catalog loaded.");
    Ok(catalog)
  }

  /// Revenue-ranked products, composed from entity metadata rather than a
  /// hand-written statement.
  #[instrument(name = "context::top_sellers", skip(self), err(Display))]
  pub async fn top_sellers(&self, limit: i64) -> SeedResult<Vec<TopSeller>> {
    let mut query = top_sellers_query(limit);
    let rows = query.build_query_as::<TopSeller>().fetch_all(&self.pool).await?;
    Ok(rows)
  }
}

pub(crate) fn top_sellers_query(limit: i64) -> QueryBuilder<'static, Postgres> {
  let item = "x";
  let product = "p";

  let mut query = QueryBuilder::new("SELECT ");
  query
    .push(format!("{item}.product_id AS product_id, "))
    .push(format!("{product}.name AS product_name, "))
    .push(format!("SUM({item}.quantity)::BIGINT AS total_quantity, "))
    .push(format!("SUM({item}.quantity * {item}.price_cents)::BIGINT AS total_revenue_cents"))
    .push(format!(" FROM {} {item}", OrderItem::TABLE))
    .push(format!(" JOIN {} {product} ON {item}.product_id = {product}.id", Product::TABLE))
    .push(format!(" GROUP BY {item}.product_id, {product}.name"))
    .push(" ORDER BY total_revenue_cents DESC, product_id ASC")
    .push(" LIMIT ")
    .push_bind(limit);
  query
}

/// Most rows of `E` one multi-row insert can carry under the bind parameter cap.
pub(crate) fn rows_per_statement<E: Entity>() -> usize {
  MAX_BIND_PARAMS / E::COLUMNS.len()
}

/// Writes `rows` as multi-row inserts, chunked under the bind parameter cap.
async fn insert_rows<E: Entity>(conn: &mut PgConnection, rows: &[E]) -> SeedResult<u64> {
  if rows.is_empty() {
    return Ok(0);
  }

  let mut written = 0;
  for chunk in rows.chunks(rows_per_statement::<E>()) {
    let mut query: QueryBuilder<Postgres> =
      QueryBuilder::new(format!("INSERT INTO {} ({}) ", E::TABLE, E::COLUMNS.join(", ")));
    query.push_values(chunk, |mut row, entity| {
      for value in entity.values() {
        value.bind_to(&mut row);
      }
    });
    written += query.build().execute(&mut *conn).await?.rows_affected();
  }
  debug!(table = E::TABLE, rows = written, "Inserted staged rows.");
  Ok(written)
}
