use crate::model::ExportError;
use crate::schema::{NormalizedRow, header};
use chrono::{DateTime, TimeZone};
use csv::{Writer, WriterBuilder};
use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// `<csv_dir>/<YYYY-MM-DD_HH-MM>.csv` for a run started at `started`.
pub fn csv_path<Tz: TimeZone>(csv_dir: &Path, started: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: Display,
{
    csv_dir.join(format!("{}.csv", started.format("%Y-%m-%d_%H-%M")))
}

/// Appends export rows to one CSV file, keeping the handle open for the run.
///
/// The file is opened lazily on the first append, so a run that exports
/// nothing leaves no file behind. The header is written only when the file
/// is empty at that point.
pub struct CsvExporter {
    path: PathBuf,
    writer: Option<Writer<File>>,
    rows_written: usize,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: None,
            rows_written: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&mut self, row: &NormalizedRow) -> Result<(), ExportError> {
        if self.writer.is_none() {
            self.writer = Some(Self::open(&self.path)?);
        }
        if let Some(writer) = self.writer.as_mut() {
            writer.write_record(row.record())?;
            writer.flush()?;
        }
        self.rows_written += 1;
        Ok(())
    }

    /// Flushes and closes the file. Returns the number of rows appended.
    pub fn finish(mut self) -> Result<usize, ExportError> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(self.rows_written)
    }

    fn open(path: &Path) -> Result<Writer<File>, ExportError> {
        let open_err = |source: std::io::Error| ExportError::Open {
            path: path.to_path_buf(),
            source,
        };

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(open_err)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(open_err)?;
        let is_empty = file.metadata().map_err(open_err)?.len() == 0;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if is_empty {
            writer.write_record(header())?;
        }
        Ok(writer)
    }
}
