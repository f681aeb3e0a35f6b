// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
  #[error("No products exist yet; create products before generating orders")]
  NoProducts,

  #[error("Invalid argument '{name}': {message}")]
  InvalidArgument { name: &'static str, message: String },

  #[error("Column mapping refers to unknown source column '{column}'")]
  UnknownColumn { column: String },

  #[error("Row has {actual} values but the table buffer has {expected} columns")]
  RowArity { expected: usize, actual: usize },

  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}

pub type SeedResult<T, E = SeedError> = std::result::Result<T, E>;
