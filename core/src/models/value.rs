// src/models/value.rs

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::query_builder::Separated;
use sqlx::Postgres;
use uuid::Uuid;

/// A single typed column value, as staged for insert or copy.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Uuid(Uuid),
  Text(String),
  Int(i32),
  BigInt(i64),
  Timestamp(DateTime<Utc>),
}

impl Value {
  /// Binds the value as the next parameter of a `VALUES (...)` tuple.
  pub(crate) fn bind_to(self, row: &mut Separated<'_, '_, Postgres, &'static str>) {
    match self {
      Value::Uuid(v) => {
        row.push_bind(v);
      }
      Value::Text(v) => {
        row.push_bind(v);
      }
      Value::Int(v) => {
        row.push_bind(v);
      }
      Value::BigInt(v) => {
        row.push_bind(v);
      }
      Value::Timestamp(v) => {
        row.push_bind(v);
      }
    }
  }

  /// Appends the value in Postgres COPY text format.
  pub fn write_copy_text(&self, out: &mut String) {
    match self {
      Value::Uuid(v) => out.push_str(&v.hyphenated().to_string()),
      Value::Text(v) => {
        for ch in v.chars() {
          match ch {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
          }
        }
      }
      Value::Int(v) => out.push_str(&v.to_string()),
      Value::BigInt(v) => out.push_str(&v.to_string()),
      Value::Timestamp(v) => out.push_str(&v.to_rfc3339_opts(SecondsFormat::Micros, true)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;

  fn copy_text(value: Value) -> String {
    let mut out = String::new();
    value.write_copy_text(&mut out);
    out
  }

  #[test]
  fn test_text_escapes_copy_delimiters() {
    let encoded = copy_text(Value::Text("a\tb\nc\\d\re".to_string()));
    assert_eq!(encoded, "a\\tb\\nc\\\\d\\re");
  }

  #[test]
  fn test_timestamp_uses_utc_micros() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 5).unwrap();
    assert_eq!(copy_text(Value::Timestamp(ts)), "2024-03-09T12:30:05.000000Z");
  }

  #[test]
  fn test_uuid_is_hyphenated() {
    let id = Uuid::nil();
    assert_eq!(copy_text(Value::Uuid(id)), "00000000-0000-0000-0000-000000000000");
  }
}
