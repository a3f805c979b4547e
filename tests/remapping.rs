use gridiron_terminal::remap::{AliasTable, remap};
use gridiron_terminal::resources::Position;
use gridiron_terminal::store::Row;

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn weekly_row() -> Row {
    [
        ("WK", "3"),
        ("YDS", "310"),
        ("YDS_1", "20"),
        ("TD_1", "1"),
        ("Avg_1", "8.5"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn qb_secondary_columns_rename_to_rushing() {
    let table = AliasTable::default();
    let source = fields(&["WK", "YDS", "YDS_1", "TD_1", "Avg_1"]);
    let (renamed, rows) = remap(&source, &[weekly_row()], Position::Qb, &table);
    assert_eq!(renamed, fields(&["WK", "YDS", "RSH_YDS", "RSH_TD", "Ret_Avg"]));
    assert_eq!(rows[0]["RSH_YDS"], "20");
    assert_eq!(rows[0]["RSH_TD"], "1");
    assert_eq!(rows[0]["Ret_Avg"], "8.5");
}

#[test]
fn rb_secondary_columns_rename_to_receiving() {
    let table = AliasTable::default();
    let source = fields(&["YDS_1", "AVG_1", "LNG_1", "ATT_1"]);
    let row: Row = [("YDS_1", "44"), ("AVG_1", "5.5"), ("LNG_1", "19"), ("ATT_1", "8")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let (renamed, rows) = remap(&source, &[row], Position::Rb, &table);
    assert_eq!(
        renamed,
        fields(&["REC_YDS", "REC_AVG", "REC_LNG", "REC_ATT"])
    );
    assert_eq!(rows[0]["REC_YDS"], "44");
    assert_eq!(rows[0]["REC_ATT"], "8");
}

#[test]
fn remap_is_a_pure_rename() {
    let table = AliasTable::default();
    let source = fields(&["WK", "YDS", "YDS_1", "TD_1", "Avg_1"]);
    let original = vec![weekly_row(), weekly_row()];
    let (renamed, rows) = remap(&source, &original, Position::Wr, &table);

    // Cardinality and column order preserved.
    assert_eq!(rows.len(), original.len());
    assert_eq!(renamed.len(), source.len());

    // Every cell follows its original column to the new name.
    for (i, row) in original.iter().enumerate() {
        for (old, new) in source.iter().zip(&renamed) {
            assert_eq!(row.get(old), rows[i].get(new), "{old} -> {new}");
        }
    }
}

#[test]
fn unaliased_columns_pass_through() {
    let table = AliasTable::default();
    let source = fields(&["WK", "OPP", "RESULT"]);
    let (renamed, _) = remap(&source, &[], Position::Te, &table);
    assert_eq!(renamed, source);
}

#[test]
fn alias_table_loads_from_json() {
    let table = AliasTable::from_json(
        r#"{
            "rules": [
                {"column": "Y1", "rushing": "RuY", "receiving": "ReY"}
            ],
            "fixed": [["X", "Y"]]
        }"#,
    )
    .expect("override should deserialize");
    assert_eq!(table.resolve("Y1", Position::Qb), Some("RuY"));
    assert_eq!(table.resolve("Y1", Position::Rb), Some("ReY"));
    assert_eq!(table.resolve("X", Position::K), Some("Y"));
    // Replaced wholesale: the built-in rules are gone.
    assert_eq!(table.resolve("YDS_1", Position::Qb), None);
}
