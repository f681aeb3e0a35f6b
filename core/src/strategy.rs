// src/strategy.rs

//! Per-request choice of data-access path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SeedError;

/// How generated rows reach the database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteStrategy {
  /// Stage into the persistence context, flush once.
  #[default]
  #[serde(alias = "efcore")]
  Staged,
  /// Stream with `COPY ... FROM STDIN` over a pooled connection held for the request.
  #[serde(alias = "dapper")]
  BulkCopy,
}

/// How the top-sellers report is expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryStrategy {
  #[default]
  #[serde(alias = "efcore")]
  QueryBuilder,
  #[serde(alias = "dapper")]
  RawSql,
}

impl WriteStrategy {
  pub fn as_str(&self) -> &'static str {
    match self {
      WriteStrategy::Staged => "staged",
      WriteStrategy::BulkCopy => "bulk-copy",
    }
  }

  /// Human-readable name used in response messages.
  pub fn label(&self) -> &'static str {
    match self {
      WriteStrategy::Staged => "a staged unit of work",
      WriteStrategy::BulkCopy => "COPY bulk load",
    }
  }
}

impl QueryStrategy {
  pub fn as_str(&self) -> &'static str {
    match self {
      QueryStrategy::QueryBuilder => "query-builder",
      QueryStrategy::RawSql => "raw-sql",
    }
  }
}

impl fmt::Display for WriteStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Display for QueryStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for WriteStrategy {
  type Err = SeedError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "staged" | "efcore" => Ok(WriteStrategy::Staged),
      "bulk-copy" | "dapper" => Ok(WriteStrategy::BulkCopy),
      other => Err(SeedError::InvalidArgument {
        name: "strategy",
        message: format!("unknown write strategy '{}'", other),
      }),
    }
  }
}

impl FromStr for QueryStrategy {
  type Err = SeedError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "query-builder" | "efcore" => Ok(QueryStrategy::QueryBuilder),
      "raw-sql" | "dapper" => Ok(QueryStrategy::RawSql),
      other => Err(SeedError::InvalidArgument {
        name: "strategy",
        message: format!("unknown query strategy '{}'", other),
      }),
    }
  }
}
