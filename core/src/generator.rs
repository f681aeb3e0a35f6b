// src/generator.rs

//! Synthetic row generation.
//!
//! Values are plausible rather than realistic: commerce-style product names,
//! EAN-13 codes, prices between 1.00 and 1000.00 and dates in the recent past.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::models::{Order, OrderItem, Product};

const ADJECTIVES: &[&str] = &[
  "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic", "Practical", "Sleek",
  "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed", "Refined", "Unbranded", "Tasty",
];

const MATERIALS: &[&str] = &[
  "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft", "Fresh", "Frozen",
];

const PRODUCTS: &[&str] = &[
  "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt", "Table", "Shoes",
  "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon", "Pizza", "Salad", "Sausages", "Chips",
];

pub const MIN_PRICE_CENTS: i64 = 100;
pub const MAX_PRICE_CENTS: i64 = 100_000;
pub const MAX_ITEM_QUANTITY: i32 = 10;

const SECONDS_PER_YEAR: i64 = 365 * 24 * 60 * 60;

/// Fabricates rows from any random source. Seed it for reproducible output.
pub struct RowGenerator<R: Rng = StdRng> {
  rng: R,
}

impl RowGenerator<StdRng> {
  pub fn from_entropy() -> Self {
    Self::new(StdRng::from_entropy())
  }

  pub fn seeded(seed: u64) -> Self {
    Self::new(StdRng::seed_from_u64(seed))
  }
}

impl<R: Rng> RowGenerator<R> {
  pub fn new(rng: R) -> Self {
    Self { rng }
  }

  pub fn rng(&mut self) -> &mut R {
    &mut self.rng
  }

  pub fn product(&mut self) -> Product {
    Product {
      id: self.fresh_id(),
      name: self.product_name(),
      sku: self.ean13(),
      price_cents: self.rng.gen_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS),
      created_at: self.past(1),
    }
  }

  pub fn products(&mut self, count: usize) -> Vec<Product> {
    (0..count).map(|_| self.product()).collect()
  }

  pub fn order(&mut self) -> Order {
    Order {
      id: self.fresh_id(),
      order_date: self.past(2),
    }
  }

  pub fn orders(&mut self, count: usize) -> Vec<Order> {
    (0..count).map(|_| self.order()).collect()
  }

  pub fn order_item(&mut self, order: &Order, product: &Product) -> OrderItem {
    OrderItem {
      id: self.fresh_id(),
      order_id: order.id,
      product_id: product.id,
      quantity: self.rng.gen_range(1..=MAX_ITEM_QUANTITY),
      price_cents: product.price_cents,
    }
  }

  fn fresh_id(&mut self) -> Uuid {
    uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid()
  }

  fn product_name(&mut self) -> String {
    let pick = |rng: &mut R, words: &[&'static str]| words.choose(rng).copied().unwrap_or_default();
    format!(
      "{} {} {}",
      pick(&mut self.rng, ADJECTIVES),
      pick(&mut self.rng, MATERIALS),
      pick(&mut self.rng, PRODUCTS)
    )
  }

  fn ean13(&mut self) -> String {
    let digits: Vec<u32> = (0..12).map(|_| self.rng.gen_range(0..10)).collect();
    let check = ean13_check_digit(&digits);
    digits.iter().chain(std::iter::once(&check)).map(|d| char::from_digit(*d, 10).unwrap_or('0')).collect()
  }

  /// A random instant within the last `years` years.
  fn past(&mut self, years: i64) -> DateTime<Utc> {
    let back = self.rng.gen_range(1..=years * SECONDS_PER_YEAR);
    Utc::now() - Duration::seconds(back)
  }
}

/// Check digit over the first twelve EAN-13 digits.
pub fn ean13_check_digit(digits: &[u32]) -> u32 {
  let sum: u32 = digits
    .iter()
    .take(12)
    .enumerate()
    .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
    .sum();
  (10 - sum % 10) % 10
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_known_ean13_check_digit() {
    // 400638133393 -> 1
    let digits = [4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3];
    assert_eq!(ean13_check_digit(&digits), 1);
  }

  #[test]
  fn test_fresh_ids_are_v4() {
    let mut generator = RowGenerator::seeded(7);
    let product = generator.product();
    assert_eq!(product.id.get_version_num(), 4);
  }
}
