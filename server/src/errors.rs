// server/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use seedbench::SeedError;
use serde_json::json;
use thiserror::Error;

use crate::messages;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Seeding Error: {0}")]
  Seed(#[from] SeedError),
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::Validation(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Seed(SeedError::NoProducts) => HttpResponse::BadRequest().json(json!({"error": messages::NO_PRODUCTS})),
      AppError::Seed(SeedError::InvalidArgument { name, message }) => {
        HttpResponse::BadRequest().json(json!({"error": format!("{}: {}", name, message)}))
      }
      AppError::Sqlx(_) | AppError::Seed(SeedError::Database(_)) => {
        HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"}))
      }
      AppError::Seed(other) => {
        HttpResponse::InternalServerError().json(json!({"error": "An internal error occurred", "detail": other.to_string()}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
