use gridbook_common::{Document, SheetMap, grid_from_records, records_from_grid};

use crate::backends::sheet_selected;
use crate::error::IoError;
use crate::traits::{Adapter, AdapterInput, SaveOptions, SaveOutput};

/// Runs named raw worksheet grids through the tabular normalizer.
///
/// This is the adapter every grid-producing backend funnels through: load
/// turns header rows plus body rows into records, save synthesizes the
/// header row back. Grids that normalize to zero records contribute no
/// sheet.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridAdapter;

impl Adapter for GridAdapter {
    fn supports(&self, input: &AdapterInput) -> bool {
        matches!(input, AdapterInput::Grids(_))
    }

    fn load(
        &self,
        input: AdapterInput,
        sheet_names: Option<&[String]>,
    ) -> Result<SheetMap, IoError> {
        let AdapterInput::Grids(grids) = input else {
            return Err(IoError::UnsupportedInput);
        };
        Ok(grids
            .into_iter()
            .filter(|(name, _)| sheet_selected(name, sheet_names))
            .map(|(name, grid)| (name, records_from_grid(grid)))
            .filter(|(_, records)| !records.is_empty())
            .collect())
    }

    fn save(
        &self,
        document: &Document,
        sheet_names: Option<&[String]>,
        _options: &SaveOptions,
    ) -> Result<SaveOutput, IoError> {
        Ok(SaveOutput::Grids(
            document
                .iter()
                .filter(|(name, _)| sheet_selected(name, sheet_names))
                .map(|(name, records)| (name.to_string(), grid_from_records(records)))
                .collect(),
        ))
    }
}
