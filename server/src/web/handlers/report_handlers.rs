// server/src/web/handlers/report_handlers.rs

use actix_web::{web, HttpResponse};
use seedbench::{QueryStrategy, TOP_SELLERS_LIMIT};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct TopSellersQuery {
  #[serde(default)]
  pub strategy: QueryStrategy,
}

#[instrument(name = "handler::top_sellers", skip(app_state, query), fields(strategy = %query.strategy))]
pub async fn top_sellers_handler(
  app_state: web::Data<AppState>,
  query: web::Query<TopSellersQuery>,
) -> Result<HttpResponse, AppError> {
  run_top_sellers(&app_state, query.strategy).await
}

#[instrument(name = "handler::topsellers_efcore", skip(app_state))]
pub async fn top_sellers_query_builder_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  run_top_sellers(&app_state, QueryStrategy::QueryBuilder).await
}

#[instrument(name = "handler::topsellers_dapper", skip(app_state))]
pub async fn top_sellers_raw_sql_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  run_top_sellers(&app_state, QueryStrategy::RawSql).await
}

async fn run_top_sellers(app_state: &AppState, strategy: QueryStrategy) -> Result<HttpResponse, AppError> {
  let report = seedbench::top_sellers(&app_state.db_pool, strategy, TOP_SELLERS_LIMIT).await?;
  info!("Top sellers via {}: {} rows.", strategy, report.rows.len());

  Ok(HttpResponse::Ok().json(json!({
      "strategy": report.strategy,
      "elapsedMilliseconds": report.elapsed_ms(),
      "data": report.rows
  })))
}
