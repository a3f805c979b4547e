use std::env;
use std::fs;

use serde::Deserialize;

use crate::resources::Position;
use crate::store::Row;

/// One position-conditioned rename: the source column becomes `rushing` for
/// positions whose secondary stat line is rushing (QB, WR, TE) and
/// `receiving` for everyone else.
#[derive(Debug, Clone, Deserialize)]
pub struct AliasRule {
    pub column: String,
    pub rushing: String,
    pub receiving: String,
}

/// Alias table for ambiguous weekly-stat columns. The built-in default
/// mirrors the suffix convention of the source files, but the ground-truth
/// mapping varies between seasons, so a JSON file named by the
/// `ALIAS_TABLE` environment variable replaces it wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct AliasTable {
    #[serde(default)]
    rules: Vec<AliasRule>,
    #[serde(default)]
    fixed: Vec<(String, String)>,
}

impl Default for AliasTable {
    fn default() -> Self {
        let rule = |column: &str, rushing: &str, receiving: &str| AliasRule {
            column: column.to_string(),
            rushing: rushing.to_string(),
            receiving: receiving.to_string(),
        };
        Self {
            rules: vec![
                rule("YDS_1", "RSH_YDS", "REC_YDS"),
                rule("TD_1", "RSH_TD", "REC_TD"),
                rule("AVG_1", "RSH_AVG", "REC_AVG"),
                rule("LNG_1", "RSH_LNG", "REC_LNG"),
                rule("ATT_1", "RSH_ATT", "REC_ATT"),
            ],
            fixed: vec![("Avg_1".to_string(), "Ret_Avg".to_string())],
        }
    }
}

impl AliasTable {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Table from the `ALIAS_TABLE` override file, or the built-in default.
    /// An unreadable or malformed override falls back rather than failing
    /// the session.
    pub fn load_env() -> Self {
        let Ok(path) = env::var("ALIAS_TABLE") else {
            return Self::default();
        };
        fs::read_to_string(&path)
            .ok()
            .and_then(|text| Self::from_json(&text).ok())
            .unwrap_or_default()
    }

    /// The semantic name for `column` under `position`, if the table has an
    /// entry for it.
    pub fn resolve(&self, column: &str, position: Position) -> Option<&str> {
        if let Some(rule) = self.rules.iter().find(|r| r.column == column) {
            return Some(if rushing_secondary(position) {
                &rule.rushing
            } else {
                &rule.receiving
            });
        }
        self.fixed
            .iter()
            .find(|(from, _)| from == column)
            .map(|(_, to)| to.as_str())
    }
}

fn rushing_secondary(position: Position) -> bool {
    matches!(position, Position::Qb | Position::Wr | Position::Te)
}

/// Pure rename of ambiguous columns: same column order, same row count, and
/// every cell follows its original column to the new name.
pub fn remap(
    fields: &[String],
    rows: &[Row],
    position: Position,
    table: &AliasTable,
) -> (Vec<String>, Vec<Row>) {
    let renamed: Vec<String> = fields
        .iter()
        .map(|field| {
            table
                .resolve(field, position)
                .map(str::to_string)
                .unwrap_or_else(|| field.clone())
        })
        .collect();

    let remapped_rows: Vec<Row> = rows
        .iter()
        .map(|row| {
            let mut out = Row::with_capacity(row.len());
            for (old, new) in fields.iter().zip(&renamed) {
                if let Some(value) = row.get(old) {
                    out.insert(new.clone(), value.clone());
                }
            }
            out
        })
        .collect();

    (renamed, remapped_rows)
}
