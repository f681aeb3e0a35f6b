// tests/generator_tests.rs
mod common;
use common::*;

use chrono::{Duration, Utc};
use seedbench::generator::{MAX_ITEM_QUANTITY, MAX_PRICE_CENTS, MIN_PRICE_CENTS};
use seedbench::models::product::{NAME_MAX_LEN, SKU_MAX_LEN};
use std::collections::HashSet;

#[test]
fn test_products_have_requested_count_and_unique_ids() {
  setup_tracing();
  let mut generator = seeded_generator();
  let products = generator.products(500);
  assert_eq!(products.len(), 500);

  let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
  assert_eq!(ids.len(), 500);
  assert!(products.iter().all(|p| !p.id.is_nil()));
}

#[test]
fn test_zero_products_is_empty() {
  let mut generator = seeded_generator();
  assert!(generator.products(0).is_empty());
}

#[test]
fn test_product_prices_within_one_and_one_thousand() {
  let mut generator = seeded_generator();
  for product in generator.products(2_000) {
    assert!(
      (MIN_PRICE_CENTS..=MAX_PRICE_CENTS).contains(&product.price_cents),
      "price {} out of range",
      product.price_cents
    );
  }
}

#[test]
fn test_skus_are_valid_ean13() {
  let mut generator = seeded_generator();
  for product in generator.products(200) {
    assert!(is_ean13(&product.sku), "bad sku {}", product.sku);
    assert!(product.sku.len() <= SKU_MAX_LEN);
  }
}

#[test]
fn test_names_are_three_words_within_bound() {
  let mut generator = seeded_generator();
  for product in generator.products(200) {
    assert_eq!(product.name.split(' ').count(), 3, "name '{}'", product.name);
    assert!(product.name.len() <= NAME_MAX_LEN);
  }
}

#[test]
fn test_dates_lie_in_the_past() {
  let mut generator = seeded_generator();
  let now = Utc::now();

  for product in generator.products(200) {
    assert!(product.created_at < now);
    assert!(product.created_at > now - Duration::days(366));
  }
  for order in generator.orders(200) {
    assert!(order.order_date < now);
    assert!(order.order_date > now - Duration::days(2 * 365 + 1));
  }
}

#[test]
fn test_order_item_copies_product_price() {
  let mut generator = seeded_generator();
  let product = generator.product();
  let order = generator.order();

  for _ in 0..100 {
    let item = generator.order_item(&order, &product);
    assert_eq!(item.order_id, order.id);
    assert_eq!(item.product_id, product.id);
    assert_eq!(item.price_cents, product.price_cents);
    assert!((1..=MAX_ITEM_QUANTITY).contains(&item.quantity));
  }
}

#[test]
fn test_same_seed_same_rows() {
  let a = seedbench::RowGenerator::seeded(42).products(10);
  let b = seedbench::RowGenerator::seeded(42).products(10);
  let names_a: Vec<_> = a.iter().map(|p| (&p.id, &p.name, &p.sku, p.price_cents)).collect();
  let names_b: Vec<_> = b.iter().map(|p| (&p.id, &p.name, &p.sku, p.price_cents)).collect();
  assert_eq!(names_a, names_b);
}
