// src/lib.rs

//! seedbench: synthetic catalog seeding and reporting over Postgres.
//!
//! The crate compares two ways of talking to the same schema:
//!  - A staged unit of work: rows are added to per-entity sets on a [`DbContext`]
//!    and flushed together in one transaction of multi-row inserts.
//!  - A direct path: rows are streamed with `COPY ... FROM STDIN` over a pooled
//!    connection held for the request, and reports run as literal SQL.
//!
//! Callers pick a [`WriteStrategy`] or [`QueryStrategy`] per operation; every
//! operation reports how long the database work took.

pub mod bulk;
pub mod context;
pub mod error;
pub mod generator;
pub mod import;
pub mod models;
pub mod orders;
pub mod reports;
pub mod strategy;

// --- Re-exports for the Public API ---

pub use crate::bulk::{BulkCopy, ColumnMapping, TableBuffer};
pub use crate::context::{DbContext, EntitySet, SaveSummary};
pub use crate::error::{SeedError, SeedResult};
pub use crate::generator::RowGenerator;
pub use crate::import::{insert_products, ProductImport, DEFAULT_PRODUCT_COUNT};
pub use crate::models::{Entity, Order, OrderItem, Product, ProductCatalog, TopSeller, Value};
pub use crate::orders::{
  generate_orders, plan_orders, OrderBatch, OrderGeneration, DEFAULT_MAX_ITEMS_PER_ORDER, DEFAULT_ORDER_COUNT,
};
pub use crate::reports::{top_sellers, TopSellersReport, TOP_SELLERS_LIMIT};
pub use crate::strategy::{QueryStrategy, WriteStrategy};
