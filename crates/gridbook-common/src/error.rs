use thiserror::Error;

/// Errors raised by [`Document`](crate::Document) sheet operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("sheet with name \"{0}\" already exists")]
    DuplicateSheet(String),

    #[error("sheet with name \"{0}\" does not exist")]
    SheetNotFound(String),
}
