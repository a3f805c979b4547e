use std::cmp::Ordering;

use crate::store::{Row, cell};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// At most one active sort. Re-selecting the active column flips direction;
/// selecting a different column resets to ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn toggle(&mut self, column: &str) {
        if self.column.as_deref() == Some(column) {
            self.direction = match self.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            };
        } else {
            self.column = Some(column.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn clear(&mut self) {
        self.column = None;
        self.direction = SortDirection::Ascending;
    }
}

fn numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Cell comparison: numeric when both sides parse as finite decimals,
/// ordinal string comparison otherwise. Missing cells read as "".
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (numeric(a), numeric(b)) {
        (Some(na), Some(nb)) => na.partial_cmp(&nb).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

/// Order rows by one column. `slice::sort_by` is a stable merge sort, so
/// ties keep their relative input order in both directions (Equal reversed
/// is still Equal).
pub fn sort_rows(rows: &[Row], column: &str, direction: SortDirection) -> Vec<Row> {
    let mut out = rows.to_vec();
    out.sort_by(|a, b| {
        let ord = compare_cells(cell(a, column), cell(b, column));
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    out
}

/// Apply a sort state to rows; no active column leaves the order untouched.
pub fn apply_sort(rows: &[Row], sort: &SortState) -> Vec<Row> {
    match &sort.column {
        Some(column) => sort_rows(rows, column, sort.direction),
        None => rows.to_vec(),
    }
}
