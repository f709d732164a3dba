//! CSV export and file download.

use std::io::Write;
use std::path::{Path, PathBuf};

use directories::UserDirs;
use tempfile::NamedTempFile;

use crate::error::ExportError;
use crate::model::Row;
use crate::table::TabularDataView;

/// One exported column: which key to read and what to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportColumn {
    /// Row key.
    pub key: String,
    /// Header label.
    pub label: String,
}

impl ExportColumn {
    /// Creates a column projection.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Renders rows as CSV text.
///
/// The first line holds the labels, then one line per row. Missing and
/// `null` values are empty; values containing a comma, double quote, newline
/// or carriage return are quoted with inner quotes doubled. A row with no
/// text at all is an empty line. Lines are joined with `\n` and there is no
/// trailing newline.
///
/// # Example
///
/// ```
/// use tabula_lib::export::{ExportColumn, to_csv};
/// use tabula_lib::Row;
///
/// let rows = vec![Row::new().with("a", "x,y").with("b", 1)];
/// let columns = vec![ExportColumn::new("a", "A"), ExportColumn::new("b", "B")];
/// assert_eq!(to_csv(&rows, &columns).unwrap(), "A,B\n\"x,y\",1");
/// ```
pub fn to_csv<'a, I>(rows: I, columns: &[ExportColumn]) -> Result<String, ExportError>
where
    I: IntoIterator<Item = &'a Row>,
{
    let mut out = Vec::new();
    write_line(&mut out, columns.iter().map(|c| c.label.clone()).collect())?;

    let mut count = 0usize;
    for row in rows {
        write_line(&mut out, columns.iter().map(|c| row.display(&c.key)).collect())?;
        count += 1;
    }

    let mut text = String::from_utf8(out).map_err(|_| ExportError::Encoding)?;
    if text.ends_with('\n') {
        text.pop();
    }

    log::debug!("[export] {} rows x {} columns", count, columns.len());
    Ok(text)
}

/// Appends one record plus `\n`.
///
/// The csv writer emits `""` for a record whose only field is empty, so
/// records without any text are written as a bare terminator instead.
fn write_line(out: &mut Vec<u8>, fields: Vec<String>) -> Result<(), ExportError> {
    if fields.iter().all(String::is_empty) && fields.len() <= 1 {
        out.push(b'\n');
        return Ok(());
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);
    writer.write_record(&fields)?;
    writer.flush()?;
    Ok(())
}

/// Exports what a view shows: every filtered, sorted row in local mode, the
/// current page in delegated mode, labelled by column headers.
pub fn export_view(view: &TabularDataView) -> Result<String, ExportError> {
    let columns: Vec<ExportColumn> = view
        .columns()
        .iter()
        .map(|c| ExportColumn::new(c.key.clone(), c.header.clone()))
        .collect();
    to_csv(view.sorted_rows(), &columns)
}

/// Builds a timestamped file name, e.g. `accounts_20260101_120000.csv`.
pub fn default_filename(prefix: &str) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("{}_{}.csv", prefix, timestamp)
}

/// Somewhere an export can be saved.
pub trait Download {
    /// Saves `text` under `filename`, returning where it ended up.
    fn download(&self, text: &str, filename: &str) -> Result<PathBuf, ExportError>;
}

/// Saves exports as files in a directory.
///
/// Content is written to a temporary file next to the target and then
/// renamed into place, so a failed save leaves nothing behind.
#[derive(Debug, Clone)]
pub struct FileDownload {
    dir: PathBuf,
}

impl FileDownload {
    /// Saves into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Saves into the user's download directory, or the current directory if
    /// there is none.
    pub fn user_downloads() -> Self {
        let dir = UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self { dir }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Download for FileDownload {
    fn download(&self, text: &str, filename: &str) -> Result<PathBuf, ExportError> {
        let name = Path::new(filename)
            .file_name()
            .ok_or_else(|| ExportError::InvalidFileName(filename.to_string()))?;
        let target = self.dir.join(name);

        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        file.persist(&target).map_err(|e| ExportError::Io(e.error))?;

        log::info!("[export] saved {}", target.display());
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_csv_quoting() {
        let rows = vec![Row::new().with("a", "say \"hi\"").with("b", "two\nlines")];
        let columns = vec![ExportColumn::new("a", "A"), ExportColumn::new("b", "B")];
        assert_eq!(
            to_csv(&rows, &columns).unwrap(),
            "A,B\n\"say \"\"hi\"\"\",\"two\nlines\""
        );
    }

    #[test]
    fn test_csv_missing_and_null_are_empty() {
        let rows = vec![Row::new().with("b", json!(null)), Row::new().with("a", true)];
        let columns = vec![ExportColumn::new("a", "A"), ExportColumn::new("b", "B")];
        assert_eq!(to_csv(&rows, &columns).unwrap(), "A,B\n,\ntrue,");
    }

    #[test]
    fn test_csv_single_column_empty_value_is_empty_line() {
        let columns = vec![ExportColumn::new("a", "A")];
        assert_eq!(to_csv(&[Row::new()], &columns).unwrap(), "A\n");
        assert_eq!(
            to_csv(&[Row::new(), Row::new().with("a", "x")], &columns).unwrap(),
            "A\n\nx"
        );
    }

    #[test]
    fn test_csv_carriage_return_is_quoted() {
        let rows = vec![Row::new().with("a", "p\rq").with("b", "plain")];
        let columns = vec![ExportColumn::new("a", "A"), ExportColumn::new("b", "B")];
        assert_eq!(to_csv(&rows, &columns).unwrap(), "A,B\n\"p\rq\",plain");
    }

    #[test]
    fn test_csv_header_only() {
        let columns = vec![ExportColumn::new("a", "A"), ExportColumn::new("b", "B")];
        assert_eq!(to_csv(&Vec::<Row>::new(), &columns).unwrap(), "A,B");
    }

    #[test]
    fn test_default_filename() {
        let name = default_filename("accounts");
        assert!(name.starts_with("accounts_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), "accounts_".len() + 15 + ".csv".len());
    }

    #[test]
    fn test_download_writes_file_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();
        let download = FileDownload::new(dir.path());

        let path = download.download("A,B\n1,2", "../escape/report.csv").unwrap();
        assert_eq!(path, dir.path().join("report.csv"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "A,B\n1,2");

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_download_rejects_empty_name() {
        let dir = tempfile::tempdir().unwrap();
        let download = FileDownload::new(dir.path());
        assert!(matches!(
            download.download("x", ".."),
            Err(ExportError::InvalidFileName(_))
        ));
    }
}
