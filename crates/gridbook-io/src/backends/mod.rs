pub mod array;
#[cfg(any(feature = "csv", feature = "xlsx"))]
pub mod file;
pub mod grid;
#[cfg(feature = "json")]
pub mod json;

pub use array::ArrayAdapter;
#[cfg(any(feature = "csv", feature = "xlsx"))]
pub use file::FileAdapter;
pub use grid::GridAdapter;
#[cfg(feature = "json")]
pub use json::JsonAdapter;

/// `None` selects every sheet; otherwise the filter names the sheets to keep.
pub(crate) fn sheet_selected(name: &str, sheet_names: Option<&[String]>) -> bool {
    sheet_names.map_or(true, |names| names.iter().any(|n| n == name))
}
