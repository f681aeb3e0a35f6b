// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use once_cell::sync::Lazy;
use seedbench::{Product, ProductCatalog, RowGenerator};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub const SEED: u64 = 0x5eed;

pub fn seeded_generator() -> RowGenerator {
  RowGenerator::seeded(SEED)
}

pub fn catalog_of(products: &[Product]) -> ProductCatalog {
  products.iter().cloned().collect()
}

pub fn is_ean13(code: &str) -> bool {
  if code.len() != 13 || !code.chars().all(|c| c.is_ascii_digit()) {
    return false;
  }
  let digits: Vec<u32> = code.chars().filter_map(|c| c.to_digit(10)).collect();
  seedbench::generator::ean13_check_digit(&digits[..12]) == digits[12]
}
