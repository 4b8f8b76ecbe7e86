//! Decoder for the stats API's tabular `headers` + `rowSet` payloads

use serde_json::Value;
use std::collections::HashMap;

use crate::error::AppError;

/// One named table from a stats response
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSet {
    pub name: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Picks the table called `name` from a stats payload, or the first table
    /// when none carries that name.
    ///
    /// Accepts both the plural `resultSets` and the singular `resultSet`
    /// envelope, each either an array or a single object.
    pub fn select(payload: &Value, name: &str) -> Result<Self, AppError> {
        let candidates: Vec<&Value> = ["resultSets", "resultSet"]
            .iter()
            .filter_map(|field| payload.get(*field))
            .flat_map(|sets| match sets {
                Value::Array(items) => items.iter().collect::<Vec<_>>(),
                other => vec![other],
            })
            .collect();

        let chosen = candidates
            .iter()
            .find(|set| set.get("name").and_then(Value::as_str) == Some(name))
            .or_else(|| candidates.first())
            .ok_or_else(|| {
                AppError::upstream_malformed(format!("response contains no result sets ({name})"))
            })?;

        Self::from_value(chosen)
    }

    /// Decodes a single `{ name, headers, rowSet }` object.
    pub fn from_value(set: &Value) -> Result<Self, AppError> {
        let name = set.get("name").and_then(Value::as_str).map(str::to_string);
        let label = name.as_deref().unwrap_or("unnamed");

        let headers: Vec<String> = set
            .get("headers")
            .and_then(Value::as_array)
            .map(|headers| {
                headers
                    .iter()
                    .filter_map(|h| h.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        if headers.is_empty() {
            return Err(AppError::upstream_malformed(format!(
                "result set {label} has no headers"
            )));
        }

        let rows = match set.get("rowSet") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(rows)) => rows
                .iter()
                .map(|row| {
                    row.as_array().cloned().ok_or_else(|| {
                        AppError::upstream_malformed(format!(
                            "result set {label} contains a non-array row"
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(AppError::upstream_malformed(format!(
                    "result set {label} has a non-array rowSet"
                )));
            }
        };

        Ok(Self {
            name,
            headers,
            rows,
        })
    }

    /// Fails with `UpstreamDataMalformed` when the table has no rows.
    pub fn require_rows(&self) -> Result<(), AppError> {
        if self.rows.is_empty() {
            return Err(AppError::upstream_malformed(format!(
                "result set {} is empty",
                self.name.as_deref().unwrap_or("unnamed")
            )));
        }
        Ok(())
    }

    /// Header name → cell for one row. Extra cells or headers are ignored.
    pub fn record<'a>(&'a self, row: &'a [Value]) -> HashMap<&'a str, &'a Value> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(row.iter())
            .collect()
    }
}
