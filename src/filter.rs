use std::collections::BTreeMap;

use crate::store::{Row, RowStore, cell};

/// Column the free-text search runs against. Resources without it (schedule,
/// roster) never have the search applied.
pub const PLAYER_COLUMN: &str = "Player";

/// Active facet choices: facet column name to selected value. Only facets
/// with a concrete selection are stored; "no filter" is absence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    chosen: BTreeMap<String, String>,
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, facet: &str, value: Option<String>) {
        match value {
            Some(v) if !v.is_empty() => {
                self.chosen.insert(facet.to_string(), v);
            }
            _ => {
                self.chosen.remove(facet);
            }
        }
    }

    pub fn get(&self, facet: &str) -> Option<&str> {
        self.chosen.get(facet).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.chosen.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.chosen.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Apply facet selections and the player-name search to a store, producing a
/// new filtered store. Always derives from the full store it is given, never
/// from a previously filtered view, so facets and search stay independently
/// re-appliable: clearing the search while a facet is active must leave the
/// facet-filtered rows in place.
pub fn apply_filters(store: &RowStore, selection: &FacetSelection, search: &str) -> RowStore {
    let search_lower = search.to_lowercase();
    let searchable = store.has_column(PLAYER_COLUMN);

    let rows: Vec<Row> = store
        .rows
        .iter()
        .filter(|row| {
            selection.iter().all(|(facet, value)| {
                // A facet the store does not carry is a no-op, not a reject.
                !store.has_column(facet) || cell(row, facet) == value
            })
        })
        .filter(|row| {
            if search_lower.is_empty() || !searchable {
                return true;
            }
            cell(row, PLAYER_COLUMN)
                .to_lowercase()
                .contains(&search_lower)
        })
        .cloned()
        .collect();

    RowStore {
        fields: store.fields.clone(),
        rows,
    }
}
