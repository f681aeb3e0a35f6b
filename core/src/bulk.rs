// src/bulk.rs

//! Direct table loads over `COPY ... FROM STDIN`.
//!
//! A [`TableBuffer`] holds rows in memory under named columns. [`BulkCopy`] maps
//! those columns onto a destination table and streams the buffer as COPY text
//! data on a connection the caller owns.

use sqlx::PgConnection;
use tracing::{debug, info, instrument};

use crate::error::{SeedError, SeedResult};
use crate::models::{Entity, Value};

/// Bytes handed to the server per COPY data message.
pub const DEFAULT_CHUNK_BYTES: usize = 512 * 1024;

/// In-memory rows under named columns.
#[derive(Debug, Clone, Default)]
pub struct TableBuffer {
  columns: Vec<String>,
  rows: Vec<Vec<Value>>,
}

impl TableBuffer {
  pub fn new<I, S>(columns: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      columns: columns.into_iter().map(Into::into).collect(),
      rows: Vec::new(),
    }
  }

  /// A buffer whose columns are named exactly like the entity's table columns.
  pub fn from_entities<E: Entity>(entities: &[E]) -> Self {
    let mut buffer = Self::new(E::COLUMNS.iter().copied());
    buffer.rows = entities.iter().map(|e| e.values()).collect();
    buffer
  }

  pub fn add_row(&mut self, row: Vec<Value>) -> SeedResult<()> {
    if row.len() != self.columns.len() {
      return Err(SeedError::RowArity {
        expected: self.columns.len(),
        actual: row.len(),
      });
    }
    self.rows.push(row);
    Ok(())
  }

  pub fn columns(&self) -> &[String] {
    &self.columns
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  fn column_index(&self, name: &str) -> Option<usize> {
    self.columns.iter().position(|c| c == name)
  }

  /// Encodes every row as COPY text lines over the mapped source columns, in
  /// mapping order, splitting the output into chunks of roughly `chunk_bytes`.
  /// Lines never straddle chunks. Without mappings all columns are encoded.
  pub fn encode_copy_text(&self, mappings: &[ColumnMapping], chunk_bytes: usize) -> SeedResult<Vec<String>> {
    let (indices, _) = resolve_mappings(mappings, self)?;
    Ok(self.encode_columns(&indices, chunk_bytes))
  }

  /// `indices` must come from `resolve_mappings` against this buffer.
  fn encode_columns(&self, indices: &[usize], chunk_bytes: usize) -> Vec<String> {
    let chunk_bytes = chunk_bytes.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    for row in &self.rows {
      for (n, &idx) in indices.iter().enumerate() {
        if n > 0 {
          current.push('\t');
        }
        row[idx].write_copy_text(&mut current);
      }
      current.push('\n');
      if current.len() >= chunk_bytes {
        chunks.push(std::mem::take(&mut current));
      }
    }
    if !current.is_empty() {
      chunks.push(current);
    }
    chunks
  }
}

/// Source buffer column to destination table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
  pub source: String,
  pub destination: String,
}

impl ColumnMapping {
  pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
    Self {
      source: source.into(),
      destination: destination.into(),
    }
  }
}

pub struct BulkCopy<'c> {
  conn: &'c mut PgConnection,
  destination_table: String,
  mappings: Vec<ColumnMapping>,
}

impl<'c> BulkCopy<'c> {
  pub fn new(conn: &'c mut PgConnection, destination_table: impl Into<String>) -> Self {
    Self {
      conn,
      destination_table: destination_table.into(),
      mappings: Vec::new(),
    }
  }

  pub fn column_mapping(mut self, source: impl Into<String>, destination: impl Into<String>) -> Self {
    self.mappings.push(ColumnMapping::new(source, destination));
    self
  }

  /// Streams `buffer` into the destination table and returns the row count the
  /// server reports.
  #[instrument(
    name = "bulk::write_to_server",
    skip(self, buffer),
    fields(table = %self.destination_table, rows = buffer.len()),
    err(Display)
  )]
  pub async fn write_to_server(self, buffer: &TableBuffer) -> SeedResult<u64> {
    let (indices, destinations) = resolve_mappings(&self.mappings, buffer)?;
    if buffer.is_empty() {
      debug!("Empty buffer; skipping COPY.");
      return Ok(0);
    }

    let statement = copy_statement(&self.destination_table, &destinations);
    let chunks = buffer.encode_columns(&indices, DEFAULT_CHUNK_BYTES);
    debug!(%statement, chunks = chunks.len(), "Starting COPY.");

    let mut copy = self.conn.copy_in_raw(&statement).await?;
    for chunk in chunks {
      copy.send(chunk.into_bytes()).await?;
    }
    let rows = copy.finish().await?;

    info!(rows, "COPY finished.");
    Ok(rows)
  }
}

/// Source column indices and destination names, in mapping order. Without
/// explicit mappings every buffer column maps to a same-named table column.
pub(crate) fn resolve_mappings(
  mappings: &[ColumnMapping],
  buffer: &TableBuffer,
) -> SeedResult<(Vec<usize>, Vec<String>)> {
  if mappings.is_empty() {
    let indices = (0..buffer.columns().len()).collect();
    return Ok((indices, buffer.columns().to_vec()));
  }

  let mut indices = Vec::with_capacity(mappings.len());
  let mut destinations = Vec::with_capacity(mappings.len());
  for mapping in mappings {
    let idx = buffer
      .column_index(&mapping.source)
      .ok_or_else(|| SeedError::UnknownColumn {
        column: mapping.source.clone(),
      })?;
    indices.push(idx);
    destinations.push(mapping.destination.clone());
  }
  Ok((indices, destinations))
}

pub(crate) fn copy_statement(table: &str, columns: &[String]) -> String {
  format!("COPY {} ({}) FROM STDIN WITH (FORMAT text)", table, columns.join(", "))
}
