use gridbook_common::{Document, Record, SheetMap};
use indexmap::IndexMap;
use serde_json::Value;

use crate::backends::sheet_selected;
use crate::error::IoError;
use crate::traits::{Adapter, AdapterInput, SaveOptions, SaveOutput};

type JsonSheets = IndexMap<String, Vec<IndexMap<String, Value>>>;

/// JSON text in the shape `{"sheet": [{"col": value, ...}, ...]}`.
///
/// Scalar cell values map directly: `null` is the null cell, strings pass
/// through, numbers and booleans keep their display form. Nested arrays and
/// objects have no tabular shape and keep their compact JSON text.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonAdapter;

fn decode(text: &str) -> Option<JsonSheets> {
    serde_json::from_str(text).ok()
}

fn value_to_cell(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

impl Adapter for JsonAdapter {
    fn supports(&self, input: &AdapterInput) -> bool {
        matches!(input, AdapterInput::Text(text) if decode(text).is_some())
    }

    fn load(
        &self,
        input: AdapterInput,
        sheet_names: Option<&[String]>,
    ) -> Result<SheetMap, IoError> {
        let AdapterInput::Text(text) = input else {
            return Err(IoError::UnsupportedInput);
        };
        let decoded: JsonSheets = serde_json::from_str(&text)?;
        Ok(decoded
            .into_iter()
            .filter(|(name, _)| sheet_selected(name, sheet_names))
            .map(|(name, rows)| {
                let records = rows
                    .into_iter()
                    .map(|row| {
                        row.into_iter()
                            .map(|(column, value)| (column, value_to_cell(value)))
                            .collect::<Record>()
                    })
                    .collect();
                (name, records)
            })
            .collect())
    }

    fn save(
        &self,
        document: &Document,
        sheet_names: Option<&[String]>,
        _options: &SaveOptions,
    ) -> Result<SaveOutput, IoError> {
        let selected: IndexMap<&str, &[Record]> = document
            .iter()
            .filter(|(name, _)| sheet_selected(name, sheet_names))
            .collect();
        Ok(SaveOutput::Text(serde_json::to_string(&selected)?))
    }
}
