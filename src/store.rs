use std::collections::HashMap;

use thiserror::Error;

/// One parsed CSV record, keyed by column name. Values are kept as raw
/// strings; typing (numeric sort, score parsing) happens at the point of use.
pub type Row = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected http status {0}")]
    Http(u16),
    #[error("csv parse error: {0}")]
    Parse(String),
}

/// The currently loaded dataset for one resource: an ordered header list and
/// the parsed rows. Replaced wholesale on every successful load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowStore {
    pub fields: Vec<String>,
    pub rows: Vec<Row>,
}

impl RowStore {
    /// Build a store from already-parsed parts, dropping fully blank rows.
    /// Source files routinely end in one or more empty records; those are not
    /// data and must never reach a consumer.
    pub fn new(fields: Vec<String>, rows: Vec<Row>) -> Self {
        let rows = rows
            .into_iter()
            .filter(|row| !is_blank(&fields, row))
            .collect();
        Self { fields, rows }
    }

    /// Parse CSV text into a store. With `has_header` unset the reported
    /// field list is empty, which makes every record blank by definition;
    /// such a store carries no rows.
    pub fn from_csv(text: &str, has_header: bool) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(has_header)
            .flexible(true)
            .from_reader(text.as_bytes());

        let fields: Vec<String> = if has_header {
            reader
                .headers()
                .map_err(|err| LoadError::Parse(err.to_string()))?
                .iter()
                .map(str::to_string)
                .collect()
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|err| LoadError::Parse(err.to_string()))?;
            let mut row = Row::new();
            for (i, field) in fields.iter().enumerate() {
                if let Some(value) = record.get(i) {
                    row.insert(field.clone(), value.to_string());
                }
            }
            rows.push(row);
        }

        Ok(Self::new(fields, rows))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }
}

/// Cell accessor; a missing column reads as the empty string.
pub fn cell<'a>(row: &'a Row, column: &str) -> &'a str {
    row.get(column).map(String::as_str).unwrap_or("")
}

fn is_blank(fields: &[String], row: &Row) -> bool {
    fields
        .iter()
        .all(|field| row.get(field).is_none_or(|v| v.is_empty()))
}
