use std::path::{Path, PathBuf};

use gridbook_common::{Document, GridMap, SheetMap};

use crate::error::IoError;

/// Probe priority assigned to adapters that do not override
/// [`Adapter::priority`].
pub const DEFAULT_PRIORITY: i32 = 1;

/// An arbitrary load input, probed by each registered adapter in turn.
#[derive(Debug, Clone)]
pub enum AdapterInput {
    /// In-memory sheets of records.
    Sheets(SheetMap),
    /// Named raw grids as produced by a spreadsheet-reading backend.
    Grids(GridMap),
    /// Text content: a JSON document, or the path of an existing file.
    /// Registration order decides which adapter claims it.
    Text(String),
    /// Filesystem path.
    Path(PathBuf),
}

impl From<SheetMap> for AdapterInput {
    fn from(sheets: SheetMap) -> Self {
        AdapterInput::Sheets(sheets)
    }
}

impl From<GridMap> for AdapterInput {
    fn from(grids: GridMap) -> Self {
        AdapterInput::Grids(grids)
    }
}

impl From<String> for AdapterInput {
    fn from(text: String) -> Self {
        AdapterInput::Text(text)
    }
}

impl From<&str> for AdapterInput {
    fn from(text: &str) -> Self {
        AdapterInput::Text(text.to_string())
    }
}

impl From<PathBuf> for AdapterInput {
    fn from(path: PathBuf) -> Self {
        AdapterInput::Path(path)
    }
}

impl From<&Path> for AdapterInput {
    fn from(path: &Path) -> Self {
        AdapterInput::Path(path.to_path_buf())
    }
}

/// What a save produced. File-bound adapters report the written path; the
/// in-memory adapters hand the converted data back to the caller.
#[derive(Debug, Clone)]
pub enum SaveOutput {
    Sheets(SheetMap),
    Grids(GridMap),
    Text(String),
    File(PathBuf),
}

/// Adapter-specific save options. Each adapter validates the options it
/// requires and ignores the rest.
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Destination for file output.
    pub path: Option<PathBuf>,
}

impl SaveOptions {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

/// A format-specific strategy implementing support detection, load, and save.
pub trait Adapter: Send + Sync {
    /// Probe priority; higher probes first, insertion order breaks ties.
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }

    /// Pure predicate deciding whether [`load`](Adapter::load) accepts the
    /// input. Must not mutate anything.
    fn supports(&self, input: &AdapterInput) -> bool;

    /// Reads the input into named record sheets, restricted to `sheet_names`
    /// when given.
    fn load(
        &self,
        input: AdapterInput,
        sheet_names: Option<&[String]>,
    ) -> Result<SheetMap, IoError>;

    /// Writes the document through this adapter, restricted to `sheet_names`
    /// (in document order) when given.
    fn save(
        &self,
        document: &Document,
        sheet_names: Option<&[String]>,
        options: &SaveOptions,
    ) -> Result<SaveOutput, IoError>;
}
