use crate::error::DatasetError;
use core_types::{Trade, TradeRow};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a dataset file back into rows, one row per line.
pub fn read_dataset(path: &Path) -> Result<Vec<TradeRow>, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = read_rows(BufReader::new(file))?;

    tracing::info!(path = %path.display(), rows = rows.len(), "Dataset loaded.");
    Ok(rows)
}

/// Parses every line of `reader` as a row.
pub fn read_rows<R: BufRead>(reader: R) -> Result<Vec<TradeRow>, DatasetError> {
    reader
        .lines()
        .enumerate()
        .map(|(index, line)| parse_row(&line?, index + 1))
        .collect()
}

/// Parses one line of `profit,duration;` entries. `line_no` is 1-based and only
/// used in error messages.
///
/// Empty entries (such as the one after the trailing `;`) are skipped, so an empty
/// line is an empty row.
pub fn parse_row(line: &str, line_no: usize) -> Result<TradeRow, DatasetError> {
    line.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_trade(entry, line_no))
        .collect()
}

fn parse_trade(entry: &str, line_no: usize) -> Result<Trade, DatasetError> {
    let (profit, duration) = entry.split_once(',').ok_or_else(|| DatasetError::Parse {
        line: line_no,
        reason: format!("expected 'profit,duration', found '{}'", entry),
    })?;

    Ok(Trade::new(
        parse_real(profit, "profit", line_no)?,
        parse_real(duration, "duration", line_no)?,
    ))
}

fn parse_real(field: &str, name: &str, line_no: usize) -> Result<f64, DatasetError> {
    field.trim().parse::<f64>().map_err(|e| DatasetError::Parse {
        line: line_no,
        reason: format!("invalid {} '{}': {}", name, field, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::write_dataset;
    use std::io::Cursor;

    #[test]
    fn test_parse_row() {
        let row = parse_row("-50,20;10.25,30;", 1).unwrap();
        assert_eq!(row.trades(), &[Trade::new(-50.0, 20.0), Trade::new(10.25, 30.0)]);
    }

    #[test]
    fn test_parse_scientific_and_missing_trailing_separator() {
        let row = parse_row("1.23457e+06,1e-05", 1).unwrap();
        assert_eq!(row.trades(), &[Trade::new(1.23457e6, 1e-5)]);
    }

    #[test]
    fn test_empty_line_is_empty_row() {
        assert!(parse_row("", 4).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_entry_reports_line() {
        let err = parse_row("1,2;3;", 9).unwrap_err();
        match err {
            DatasetError::Parse { line, .. } => assert_eq!(line, 9),
            other => panic!("unexpected error: {other:?}"),
        }

        let err = parse_row("abc,2;", 2).unwrap_err();
        assert!(err.to_string().contains("invalid profit 'abc'"));
    }

    #[test]
    fn test_read_rows_keeps_empty_lines() {
        let rows = read_rows(Cursor::new("1,2;\n\n-3,4;5,6;\n")).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].is_empty());
        assert_eq!(rows[2].total_profit(), 2.0);
    }

    #[test]
    fn test_file_round_trip_keeps_six_significant_digits() {
        let rows = vec![
            TradeRow::new(vec![Trade::new(-512.3456789, 1.5), Trade::new(999.0, 1199.25)]),
            TradeRow::default(),
        ];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.txt");

        write_dataset(&path, &rows).unwrap();
        let loaded = read_dataset(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].trades()[0], Trade::new(-512.346, 1.5));
        assert_eq!(loaded[0].trades()[1], Trade::new(999.0, 1199.25));
        assert!(loaded[1].is_empty());
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_dataset(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }
}
