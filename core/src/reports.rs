// src/reports.rs

//! Top-sellers aggregate, via the query builder or as literal SQL.

use std::time::{Duration, Instant};

use serde::Serialize;
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::context::DbContext;
use crate::error::SeedResult;
use crate::models::TopSeller;
use crate::strategy::QueryStrategy;

pub const TOP_SELLERS_LIMIT: i64 = 20;

pub const TOP_SELLERS_SQL: &str = r#"
SELECT
    p.id AS product_id,
    p.name AS product_name,
    SUM(x.quantity)::BIGINT AS total_quantity,
    SUM(x.quantity * x.price_cents)::BIGINT AS total_revenue_cents
FROM order_items x
JOIN products p ON x.product_id = p.id
GROUP BY p.id, p.name
ORDER BY total_revenue_cents DESC, product_id ASC
LIMIT $1
"#;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSellersReport {
  pub strategy: QueryStrategy,
  pub rows: Vec<TopSeller>,
  #[serde(skip)]
  pub elapsed: Duration,
}

impl TopSellersReport {
  pub fn elapsed_ms(&self) -> u64 {
    self.elapsed.as_millis() as u64
  }
}

/// Products ranked by revenue (quantity × snapshot price), highest first, ties
/// by product id.
#[instrument(name = "reports::top_sellers", skip(pool), err(Display))]
pub async fn top_sellers(pool: &PgPool, strategy: QueryStrategy, limit: i64) -> SeedResult<TopSellersReport> {
  let started = Instant::now();
  let rows = match strategy {
    QueryStrategy::QueryBuilder => DbContext::new(pool.clone()).top_sellers(limit).await?,
    QueryStrategy::RawSql => {
      let mut conn = pool.acquire().await?;
      sqlx::query_as::<_, TopSeller>(TOP_SELLERS_SQL)
        .bind(limit)
        .fetch_all(&mut *conn)
        .await?
    }
  };
  let elapsed = started.elapsed();

  info!(rows = rows.len(), elapsed_ms = elapsed.as_millis() as u64, "Top sellers computed.");
  Ok(TopSellersReport {
    strategy,
    rows,
    elapsed,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::context::top_sellers_query;

  fn normalize(sql: &str) -> String {
    sql.split_whitespace().collect::<Vec<_>>().join(" ")
  }

  fn between<'a>(sql: &'a str, start: &str, end: &str) -> &'a str {
    let from = sql.find(start).expect("start marker") + start.len();
    let to = from + sql[from..].find(end).expect("end marker");
    &sql[from..to]
  }

  fn output_columns(sql: &str) -> Vec<String> {
    between(sql, "SELECT ", " FROM ")
      .split(", ")
      .map(|column| column.rsplit(" AS ").next().unwrap_or(column).to_string())
      .collect()
  }

  #[test]
  fn test_both_statements_select_the_same_columns_in_the_same_order() {
    let raw = normalize(TOP_SELLERS_SQL);
    let built = normalize(top_sellers_query(TOP_SELLERS_LIMIT).sql());

    assert_eq!(
      output_columns(&raw),
      vec!["product_id", "product_name", "total_quantity", "total_revenue_cents"]
    );
    assert_eq!(output_columns(&raw), output_columns(&built));
    assert_eq!(between(&raw, "ORDER BY ", " LIMIT"), between(&built, "ORDER BY ", " LIMIT"));
    assert!(raw.ends_with("LIMIT $1"));
    assert!(built.ends_with("LIMIT $1"));
  }
}
