pub mod document;
pub mod error;
pub mod tabular;

pub use document::*;
pub use error::*;
pub use tabular::*;

use indexmap::IndexMap;

/// One row's values keyed by column name, in column order.
///
/// `None` is the null cell; it round-trips through raw grids as the literal
/// token `"NULL"` (see [`tabular`]).
pub type Record = IndexMap<String, Option<String>>;

/// Named sheets of records, in insertion order.
pub type SheetMap = IndexMap<String, Vec<Record>>;

/// A raw worksheet grid as produced by a spreadsheet-reading backend:
/// rows of cell text, row-major, no header interpretation applied yet.
pub type Grid = Vec<Vec<String>>;

/// Named raw grids, in insertion order.
pub type GridMap = IndexMap<String, Grid>;
