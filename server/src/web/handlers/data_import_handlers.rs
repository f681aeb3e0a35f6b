// server/src/web/handlers/data_import_handlers.rs

use actix_web::{web, HttpResponse};
use seedbench::{RowGenerator, WriteStrategy, DEFAULT_MAX_ITEMS_PER_ORDER, DEFAULT_ORDER_COUNT, DEFAULT_PRODUCT_COUNT};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::messages;
use crate::state::AppState;

fn default_product_count() -> usize {
  DEFAULT_PRODUCT_COUNT
}

fn default_order_count() -> usize {
  DEFAULT_ORDER_COUNT
}

fn default_max_items_per_order() -> usize {
  DEFAULT_MAX_ITEMS_PER_ORDER
}

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProductImportQuery {
  #[serde(default = "default_product_count")]
  pub count: usize,
  #[serde(default)]
  pub strategy: WriteStrategy,
}

/// Query for the fixed-strategy routes; any `strategy` parameter is ignored.
#[derive(Deserialize, Debug)]
pub struct ProductCountQuery {
  #[serde(default = "default_product_count")]
  pub count: usize,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOrdersQuery {
  #[serde(default = "default_order_count")]
  pub order_count: usize,
  #[serde(default = "default_max_items_per_order")]
  pub max_items_per_order: usize,
  #[serde(default)]
  pub strategy: WriteStrategy,
}

// --- Handler Implementation ---

#[instrument(name = "handler::import_products", skip(app_state, query), fields(count = query.count, strategy = %query.strategy))]
pub async fn import_products_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ProductImportQuery>,
) -> Result<HttpResponse, AppError> {
  run_product_import(&app_state, query.count, query.strategy).await
}

#[instrument(name = "handler::efcore_bulk_insert", skip(app_state, query), fields(count = query.count))]
pub async fn staged_bulk_insert_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ProductCountQuery>,
) -> Result<HttpResponse, AppError> {
  run_product_import(&app_state, query.count, WriteStrategy::Staged).await
}

#[instrument(name = "handler::dapper_bulk_insert", skip(app_state, query), fields(count = query.count))]
pub async fn copy_bulk_insert_handler(
  app_state: web::Data<AppState>,
  query: web::Query<ProductCountQuery>,
) -> Result<HttpResponse, AppError> {
  run_product_import(&app_state, query.count, WriteStrategy::BulkCopy).await
}

async fn run_product_import(app_state: &AppState, count: usize, strategy: WriteStrategy) -> Result<HttpResponse, AppError> {
  info!("Seeding {} products via {}.", count, strategy);

  let mut generator = RowGenerator::from_entropy();
  let import = seedbench::insert_products(&app_state.db_pool, &mut generator, count, strategy).await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": messages::products_inserted(import.inserted, import.strategy, import.elapsed_ms()),
      "strategy": import.strategy,
      "count": import.inserted,
      "elapsedMilliseconds": import.elapsed_ms()
  })))
}

#[instrument(
    name = "handler::generate_orders",
    skip(app_state, query),
    fields(order_count = query.order_count, max_items_per_order = query.max_items_per_order, strategy = %query.strategy)
)]
pub async fn generate_orders_handler(
  app_state: web::Data<AppState>,
  query: web::Query<GenerateOrdersQuery>,
) -> Result<HttpResponse, AppError> {
  let query = query.into_inner();
  if query.max_items_per_order < 1 {
    warn!("Rejecting order generation with maxItemsPerOrder = 0.");
    return Err(AppError::Validation("maxItemsPerOrder must be at least 1.".to_string()));
  }

  let mut generator = RowGenerator::from_entropy();
  let generated = seedbench::generate_orders(
    &app_state.db_pool,
    &mut generator,
    query.order_count,
    query.max_items_per_order,
    query.strategy,
  )
  .await?;

  Ok(HttpResponse::Ok().json(json!({
      "message": messages::orders_generated(
        generated.orders,
        generated.order_items,
        generated.strategy,
        generated.elapsed_ms()
      ),
      "strategy": generated.strategy,
      "orders": generated.orders,
      "orderItems": generated.order_items,
      "elapsedMilliseconds": generated.elapsed_ms()
  })))
}
