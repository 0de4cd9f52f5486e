//! Meta crate that re-exports the Gridbook building blocks with sensible
//! defaults. Downstream users can depend on this crate and opt into specific
//! format backends via feature flags while keeping access to the underlying
//! crates when deeper integration is required.

pub use gridbook_common as common;
pub use gridbook_io as io;

pub use gridbook_common::{
    Document, DocumentError, Grid, GridMap, NULL_TOKEN, Record, SheetMap, grid_from_records,
    records_from_grid,
};

pub use gridbook_io::{
    Adapter, AdapterInput, ArrayAdapter, GridAdapter, IoError, SaveOptions, SaveOutput,
    Spreadsheet,
};

#[cfg(any(feature = "csv", feature = "xlsx"))]
pub use gridbook_io::{FileAdapter, content_type_for_extension};

#[cfg(feature = "csv")]
pub use gridbook_io::CsvOptions;

#[cfg(feature = "json")]
pub use gridbook_io::JsonAdapter;
