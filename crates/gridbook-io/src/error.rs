use gridbook_common::DocumentError;
use thiserror::Error;

/// Errors surfaced by adapters and the [`Spreadsheet`](crate::Spreadsheet)
/// facade. Everything is synchronous; nothing is retried internally.
#[derive(Debug, Error)]
pub enum IoError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// No registered adapter claimed the load input.
    #[error("no registered adapter supports the given input")]
    UnsupportedInput,

    #[error("adapter \"{0}\" is not registered")]
    AdapterNotFound(String),

    /// A save option required by the chosen adapter was not provided.
    #[error("please specify the \"{0}\" option")]
    MissingOption(&'static str),

    #[error("unsupported file extension \"{0}\"")]
    UnsupportedFormat(String),

    #[cfg(feature = "json")]
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "csv")]
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "xlsx")]
    #[error("spreadsheet read: {0}")]
    SpreadsheetRead(#[from] calamine::Error),

    #[cfg(feature = "xlsx")]
    #[error("spreadsheet write: {0}")]
    SpreadsheetWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
