use gridbook_common::{Document, SheetMap};

use crate::backends::sheet_selected;
use crate::error::IoError;
use crate::traits::{Adapter, AdapterInput, SaveOptions, SaveOutput};

/// Pass-through adapter for data already shaped as record sheets.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrayAdapter;

impl Adapter for ArrayAdapter {
    fn supports(&self, input: &AdapterInput) -> bool {
        matches!(input, AdapterInput::Sheets(_))
    }

    fn load(
        &self,
        input: AdapterInput,
        sheet_names: Option<&[String]>,
    ) -> Result<SheetMap, IoError> {
        let AdapterInput::Sheets(sheets) = input else {
            return Err(IoError::UnsupportedInput);
        };
        Ok(sheets
            .into_iter()
            .filter(|(name, _)| sheet_selected(name, sheet_names))
            .collect())
    }

    fn save(
        &self,
        document: &Document,
        sheet_names: Option<&[String]>,
        _options: &SaveOptions,
    ) -> Result<SaveOutput, IoError> {
        Ok(SaveOutput::Sheets(
            document
                .iter()
                .filter(|(name, _)| sheet_selected(name, sheet_names))
                .map(|(name, records)| (name.to_string(), records.to_vec()))
                .collect(),
        ))
    }
}
