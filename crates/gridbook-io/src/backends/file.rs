use std::path::{Path, PathBuf};

use gridbook_common::{Document, Grid, SheetMap, grid_from_records, records_from_grid};

#[cfg(feature = "xlsx")]
use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::backends::sheet_selected;
use crate::error::IoError;
use crate::traits::{Adapter, AdapterInput, SaveOptions, SaveOutput};

/// Sheet name assigned to CSV input, which has no sheet concept of its own.
#[cfg(feature = "csv")]
pub const CSV_SHEET_NAME: &str = "Sheet1";

/// CSV shape options shared by read and write.
#[cfg(feature = "csv")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter as a single byte. Use `b'\t'` for TSV.
    pub delimiter: u8,
}

#[cfg(feature = "csv")]
impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// File adapter: sniffs the extension and delegates the wire format to the
/// backing codec crates.
///
/// Reads CSV (feature `csv`) and XLSX/XLSM/XLS/ODS (feature `xlsx`); writes
/// CSV and XLSX. Everything enters and leaves the document through the
/// tabular normalizer, so the null token and header handling behave the same
/// as for raw grids.
#[derive(Clone, Debug, Default)]
pub struct FileAdapter {
    #[cfg(feature = "csv")]
    csv_options: CsvOptions,
}

impl FileAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(feature = "csv")]
    pub fn with_csv_options(csv_options: CsvOptions) -> Self {
        Self { csv_options }
    }

    fn load_path(&self, path: &Path, sheet_names: Option<&[String]>) -> Result<SheetMap, IoError> {
        match extension(path).as_deref() {
            #[cfg(feature = "csv")]
            Some("csv") => self.load_csv(path, sheet_names),
            #[cfg(feature = "xlsx")]
            Some("xlsx" | "xlsm" | "xls" | "ods") => load_workbook(path, sheet_names),
            other => Err(IoError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    #[cfg(feature = "csv")]
    fn load_csv(&self, path: &Path, sheet_names: Option<&[String]>) -> Result<SheetMap, IoError> {
        if !sheet_selected(CSV_SHEET_NAME, sheet_names) {
            return Ok(SheetMap::new());
        }
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.csv_options.delimiter)
            .from_path(path)?;
        let mut grid = Grid::new();
        for result in reader.records() {
            let row = result?;
            grid.push(row.iter().map(str::to_string).collect());
        }
        let records = records_from_grid(grid);
        if records.is_empty() {
            return Ok(SheetMap::new());
        }
        Ok(SheetMap::from_iter([(CSV_SHEET_NAME.to_string(), records)]))
    }

    /// CSV carries a single sheet, so only the first selected sheet is
    /// written, matching the active-sheet behavior of spreadsheet CSV
    /// writers.
    #[cfg(feature = "csv")]
    fn save_csv(
        &self,
        document: &Document,
        sheet_names: Option<&[String]>,
        path: &Path,
    ) -> Result<(), IoError> {
        #[cfg(feature = "tracing")]
        {
            let selected = document
                .iter()
                .filter(|(name, _)| sheet_selected(name, sheet_names))
                .count();
            if selected > 1 {
                tracing::warn!(selected, "csv output keeps only the first selected sheet");
            }
        }
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.csv_options.delimiter)
            .from_path(path)?;
        if let Some((_, records)) = document
            .iter()
            .find(|(name, _)| sheet_selected(name, sheet_names))
        {
            for row in grid_from_records(records) {
                writer.write_record(&row)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

impl Adapter for FileAdapter {
    fn supports(&self, input: &AdapterInput) -> bool {
        match input {
            AdapterInput::Path(path) => path.is_file(),
            AdapterInput::Text(text) => Path::new(text).is_file(),
            _ => false,
        }
    }

    fn load(
        &self,
        input: AdapterInput,
        sheet_names: Option<&[String]>,
    ) -> Result<SheetMap, IoError> {
        let path = match input {
            AdapterInput::Path(path) => path,
            AdapterInput::Text(text) => PathBuf::from(text),
            _ => return Err(IoError::UnsupportedInput),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %path.display(), "loading spreadsheet file");
        self.load_path(&path, sheet_names)
    }

    fn save(
        &self,
        document: &Document,
        sheet_names: Option<&[String]>,
        options: &SaveOptions,
    ) -> Result<SaveOutput, IoError> {
        let Some(path) = options.path.as_deref() else {
            return Err(IoError::MissingOption("path"));
        };
        match extension(path).as_deref() {
            #[cfg(feature = "csv")]
            Some("csv") => self.save_csv(document, sheet_names, path)?,
            #[cfg(feature = "xlsx")]
            Some("xlsx") => save_workbook(document, sheet_names, path)?,
            other => {
                return Err(IoError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ));
            }
        }
        Ok(SaveOutput::File(path.to_path_buf()))
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

/// MIME type for a spreadsheet file extension, for callers that serve the
/// written file over HTTP.
pub fn content_type_for_extension(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "csv" => Some("text/csv"),
        "xls" => Some("application/vnd.ms-excel"),
        "xlsx" => {
            Some("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
        }
        _ => None,
    }
}

#[cfg(feature = "xlsx")]
fn load_workbook(path: &Path, sheet_names: Option<&[String]>) -> Result<SheetMap, IoError> {
    let mut workbook = open_workbook_auto(path)?;
    let names: Vec<String> = workbook.sheet_names().to_vec();
    let mut sheets = SheetMap::new();
    for name in names {
        if !sheet_selected(&name, sheet_names) {
            continue;
        }
        let range = workbook.worksheet_range(&name)?;
        let records = records_from_grid(range_to_grid(&range));
        if records.is_empty() {
            continue;
        }
        sheets.insert(name, records);
    }
    Ok(sheets)
}

/// Rebuilds the rectangle from the workbook origin, so leading blank rows
/// and columns reach the normalizer the same way every backend reports them.
#[cfg(feature = "xlsx")]
fn range_to_grid(range: &Range<Data>) -> Grid {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };
    let (start_row, start_col) = (start_row as usize, start_col as usize);
    let mut grid = vec![vec![String::new(); start_col + range.width()]; start_row];
    for cells in range.rows() {
        let mut row = vec![String::new(); start_col];
        row.extend(cells.iter().map(cell_text));
        grid.push(row);
    }
    grid
}

#[cfg(feature = "xlsx")]
fn cell_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => e.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(feature = "xlsx")]
fn save_workbook(
    document: &Document,
    sheet_names: Option<&[String]>,
    path: &Path,
) -> Result<(), IoError> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    for (name, records) in document
        .iter()
        .filter(|(name, _)| sheet_selected(name, sheet_names))
    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;
        for (row_num, row) in grid_from_records(records).into_iter().enumerate() {
            for (col_num, cell) in row.into_iter().enumerate() {
                worksheet.write_string(row_num as u32, col_num as u16, cell)?;
            }
        }
    }
    workbook.save(path)?;
    Ok(())
}
