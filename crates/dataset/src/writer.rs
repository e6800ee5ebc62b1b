use crate::error::DatasetError;
use crate::format::format_real;
use core_types::TradeRow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes trade rows in the dataset text format.
///
/// Each row becomes one line; each trade in it is written as `profit,duration;`.
/// An empty row produces an empty line.
pub struct DatasetWriter<W: Write = BufWriter<File>> {
    writer: W,
    rows_written: usize,
}

impl DatasetWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path) -> Result<Self, DatasetError> {
        let file = File::create(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> DatasetWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer,
            rows_written: 0,
        }
    }

    pub fn write_row(&mut self, row: &TradeRow) -> Result<(), DatasetError> {
        for trade in row {
            write!(
                self.writer,
                "{},{};",
                format_real(trade.profit),
                format_real(trade.duration)
            )?;
        }
        writeln!(self.writer)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes buffered output and hands back the underlying writer.
    pub fn finish(mut self) -> Result<W, DatasetError> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Writes every row of `rows` to a new file at `path`.
pub fn write_dataset(path: &Path, rows: &[TradeRow]) -> Result<(), DatasetError> {
    let mut writer = DatasetWriter::create(path)?;
    for row in rows {
        writer.write_row(row)?;
    }
    let rows_written = writer.rows_written();
    writer.finish()?;

    tracing::info!(path = %path.display(), rows = rows_written, "Dataset written.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Trade;

    #[test]
    fn test_line_format() {
        let rows = vec![
            TradeRow::new(vec![Trade::new(-50.0, 20.0), Trade::new(10.25, 30.0)]),
            TradeRow::default(),
            TradeRow::new(vec![Trade::new(123.456789, 1199.99999)]),
        ];

        let mut writer = DatasetWriter::from_writer(Vec::new());
        for row in &rows {
            writer.write_row(row).unwrap();
        }
        assert_eq!(writer.rows_written(), 3);

        let bytes = writer.finish().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "-50,20;10.25,30;\n\n123.457,1200;\n");
    }

    #[test]
    fn test_unwritable_path_reports_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("data.txt");
        let err = write_dataset(&path, &[]).unwrap_err();
        assert!(matches!(err, DatasetError::Open { .. }));
        assert_eq!(
            err.to_string(),
            format!("Could not open file {} for writing.", path.display())
        );
    }
}
