pub mod backends;
pub mod error;
pub mod spreadsheet;
pub mod traits;

pub use backends::ArrayAdapter;
#[cfg(any(feature = "csv", feature = "xlsx"))]
pub use backends::FileAdapter;
pub use backends::GridAdapter;
#[cfg(feature = "json")]
pub use backends::JsonAdapter;
#[cfg(feature = "csv")]
pub use backends::file::CsvOptions;
#[cfg(any(feature = "csv", feature = "xlsx"))]
pub use backends::file::content_type_for_extension;
pub use error::IoError;
pub use spreadsheet::Spreadsheet;
pub use traits::{Adapter, AdapterInput, DEFAULT_PRIORITY, SaveOptions, SaveOutput};

// Re-export for convenience
pub use gridbook_common::{Document, DocumentError, Grid, GridMap, Record, SheetMap};
