//! Conversion between raw worksheet grids and header-keyed records.
//!
//! A raw grid is what a spreadsheet-reading backend hands over for one
//! worksheet: rows of plain cell text. The first row with a non-empty first
//! cell is the header row; everything above it is padding and is dropped.
//! Body rows become [`Record`]s keyed by header name.

use crate::{Grid, Record};

/// Literal cell token that maps to the null value, compared
/// case-insensitively after trimming.
pub const NULL_TOKEN: &str = "NULL";

fn is_null_token(cell: &str) -> bool {
    cell.trim().eq_ignore_ascii_case(NULL_TOKEN)
}

/// Converts a raw grid into header-keyed records.
///
/// Leading rows are dropped as long as their first cell is empty, even when
/// other cells in the row hold data (title banners and padding rows in real
/// sheets rarely start in column A, but a data row always does). Trailing
/// empty header names are trimmed; interior empty header names are kept as
/// empty-string keys, so cells under them collide and the rightmost wins.
/// Body rows whose cells concatenate to whitespace are skipped, and cells
/// beyond the header width are dropped.
pub fn records_from_grid(grid: Grid) -> Vec<Record> {
    let mut rows = grid
        .into_iter()
        .skip_while(|row| row.first().map_or(true, |cell| cell.is_empty()));

    let Some(mut header) = rows.next() else {
        return Vec::new();
    };
    while header.last().map_or(false, |name| name.is_empty()) {
        header.pop();
    }

    let mut records = Vec::new();
    for row in rows {
        if row.concat().trim().is_empty() {
            continue;
        }
        let mut record = Record::new();
        for (name, cell) in header.iter().zip(row) {
            let value = if is_null_token(&cell) { None } else { Some(cell) };
            record.insert(name.clone(), value);
        }
        records.push(record);
    }
    records
}

/// Converts records back into a raw grid with a synthesized header row.
///
/// The header is the first record's key sequence in its own order; every
/// record then contributes its values in its own order (records are assumed
/// homogeneous). Null values become [`NULL_TOKEN`]. An empty record sequence
/// produces an empty grid, not a lone header row.
pub fn grid_from_records(records: &[Record]) -> Grid {
    let Some(first) = records.first() else {
        return Vec::new();
    };

    let mut grid = Vec::with_capacity(records.len() + 1);
    grid.push(first.keys().cloned().collect());
    for record in records {
        grid.push(
            record
                .values()
                .map(|value| value.clone().unwrap_or_else(|| NULL_TOKEN.to_string()))
                .collect(),
        );
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn record(pairs: &[(&str, Option<&str>)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn leading_blank_rows_and_trailing_blank_rows_are_dropped() {
        let grid = vec![
            row(&["", "", ""]),
            row(&["col1", "col2"]),
            row(&["a", "b"]),
            row(&["", ""]),
        ];
        assert_eq!(
            records_from_grid(grid),
            vec![record(&[("col1", Some("a")), ("col2", Some("b"))])]
        );
    }

    #[test]
    fn rows_with_empty_first_cell_are_dropped_until_header() {
        // The second cell is populated but the row still counts as padding.
        let grid = vec![row(&["", "banner"]), row(&["col1"]), row(&["a"])];
        assert_eq!(records_from_grid(grid), vec![record(&[("col1", Some("a"))])]);
    }

    #[test]
    fn trailing_empty_header_names_are_trimmed() {
        let grid = vec![
            row(&["col1", "col2", "col3", "", ""]),
            row(&["a", "b", "c", "d", "e"]),
        ];
        assert_eq!(
            records_from_grid(grid),
            vec![record(&[
                ("col1", Some("a")),
                ("col2", Some("b")),
                ("col3", Some("c")),
            ])]
        );
    }

    #[test]
    fn interior_empty_header_names_collide() {
        let grid = vec![row(&["col1", "", "", "col4"]), row(&["a", "b", "c", "d"])];
        assert_eq!(
            records_from_grid(grid),
            vec![record(&[("col1", Some("a")), ("", Some("c")), ("col4", Some("d"))])]
        );
    }

    #[test]
    fn whitespace_only_rows_are_skipped() {
        let grid = vec![
            row(&["col1", "col2"]),
            row(&["  ", " "]),
            row(&["a", "b"]),
        ];
        assert_eq!(
            records_from_grid(grid),
            vec![record(&[("col1", Some("a")), ("col2", Some("b"))])]
        );
    }

    #[test]
    fn null_token_matches_case_insensitively() {
        let grid = vec![
            row(&["col1", "col2", "col3", "col4"]),
            row(&["NULL", "null", " Null ", "NULLS"]),
        ];
        assert_eq!(
            records_from_grid(grid),
            vec![record(&[
                ("col1", None),
                ("col2", None),
                ("col3", None),
                ("col4", Some("NULLS")),
            ])]
        );
    }

    #[test]
    fn short_rows_omit_missing_columns() {
        let grid = vec![row(&["col1", "col2"]), row(&["a"])];
        assert_eq!(records_from_grid(grid), vec![record(&[("col1", Some("a"))])]);
    }

    #[test]
    fn exhausted_grid_yields_no_records() {
        assert!(records_from_grid(Vec::new()).is_empty());
        assert!(records_from_grid(vec![row(&["", "x"]), row(&[""])]).is_empty());
    }

    #[test]
    fn empty_records_produce_empty_grid() {
        assert!(grid_from_records(&[]).is_empty());
    }

    #[test]
    fn header_comes_from_first_record_in_key_order() {
        let records = vec![
            record(&[("b", Some("1")), ("a", Some("2"))]),
            record(&[("b", Some("3")), ("a", Some("4"))]),
        ];
        assert_eq!(
            grid_from_records(&records),
            vec![row(&["b", "a"]), row(&["1", "2"]), row(&["3", "4"])]
        );
    }

    #[test]
    fn null_values_serialize_as_null_token() {
        let records = vec![record(&[("col1", Some("a")), ("col2", None)])];
        assert_eq!(
            grid_from_records(&records),
            vec![row(&["col1", "col2"]), row(&["a", "NULL"])]
        );
    }

    #[test]
    fn grid_round_trip_preserves_records() {
        let records = vec![
            record(&[("col1", Some("a")), ("col2", Some("b")), ("col3", Some("c"))]),
            record(&[("col1", Some("d")), ("col2", Some("e")), ("col3", Some("f"))]),
        ];
        assert_eq!(records_from_grid(grid_from_records(&records)), records);
    }
}
