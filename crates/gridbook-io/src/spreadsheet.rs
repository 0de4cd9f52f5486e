use gridbook_common::{Document, DocumentError, Record, SheetMap};

use crate::error::IoError;
use crate::traits::{Adapter, AdapterInput, SaveOptions, SaveOutput};

struct RegisteredAdapter {
    key: String,
    adapter: Box<dyn Adapter>,
}

/// A named-sheet document paired with a priority-ordered adapter registry.
///
/// [`Spreadsheet::new`] registers the built-in adapters under the keys
/// `"array"`, `"file"`, `"json"`, and `"grid"`. Loading probes the registry
/// in priority order and appends the first match's sheets to the document;
/// saving goes through the adapter registered under an explicit key.
pub struct Spreadsheet {
    document: Document,
    adapters: Vec<RegisteredAdapter>,
}

impl Default for Spreadsheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Spreadsheet {
    /// An empty document with the built-in adapters registered.
    pub fn new() -> Self {
        let mut spreadsheet = Self::without_adapters();
        spreadsheet.register_adapter("array", Box::new(crate::backends::ArrayAdapter));
        #[cfg(any(feature = "csv", feature = "xlsx"))]
        spreadsheet.register_adapter("file", Box::new(crate::backends::FileAdapter::new()));
        #[cfg(feature = "json")]
        spreadsheet.register_adapter("json", Box::new(crate::backends::JsonAdapter));
        spreadsheet.register_adapter("grid", Box::new(crate::backends::GridAdapter));
        spreadsheet
    }

    /// An empty document with an empty registry, for callers that want full
    /// control over the adapter set.
    pub fn without_adapters() -> Self {
        Self {
            document: Document::new(),
            adapters: Vec::new(),
        }
    }

    /// Registers an adapter under a lookup key, replacing any adapter already
    /// registered under that key, and re-sorts the probe order: higher
    /// priority first, insertion order among equals (so the first-registered
    /// adapter wins ties).
    pub fn register_adapter(&mut self, key: impl Into<String>, adapter: Box<dyn Adapter>) {
        let key = key.into();
        if let Some(existing) = self.adapters.iter_mut().find(|entry| entry.key == key) {
            existing.adapter = adapter;
        } else {
            self.adapters.push(RegisteredAdapter { key, adapter });
        }
        // Stable sort: ties keep their registration order.
        self.adapters
            .sort_by_key(|entry| std::cmp::Reverse(entry.adapter.priority()));
    }

    /// Loads through the first adapter whose `supports` accepts the input and
    /// merges the result into the document with append semantics.
    ///
    /// Fails with [`IoError::UnsupportedInput`] when no adapter matches.
    pub fn load(
        &mut self,
        input: impl Into<AdapterInput>,
        sheet_names: Option<&[String]>,
    ) -> Result<(), IoError> {
        let input = input.into();
        let entry = self
            .adapters
            .iter()
            .find(|entry| entry.adapter.supports(&input))
            .ok_or(IoError::UnsupportedInput)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(adapter = entry.key.as_str(), "load input matched");
        let sheets = entry.adapter.load(input, sheet_names)?;
        self.document.append(sheets);
        Ok(())
    }

    /// Saves the document through the adapter registered under `key`,
    /// restricted to `sheet_names` (in document order) when given.
    pub fn save(
        &self,
        key: &str,
        sheet_names: Option<&[String]>,
        options: &SaveOptions,
    ) -> Result<SaveOutput, IoError> {
        let entry = self
            .adapters
            .iter()
            .find(|entry| entry.key == key)
            .ok_or_else(|| IoError::AdapterNotFound(key.to_string()))?;
        entry.adapter.save(&self.document, sheet_names, options)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn append(&mut self, sheets: SheetMap) {
        self.document.append(sheets);
    }

    pub fn create_sheet(&mut self, name: &str) -> Result<(), DocumentError> {
        self.document.create_sheet(name)
    }

    pub fn duplicate_sheet(&mut self, source: &str, target: &str) -> Result<(), DocumentError> {
        self.document.duplicate_sheet(source, target)
    }

    pub fn rename_sheet(&mut self, source: &str, target: &str) -> Result<(), DocumentError> {
        self.document.rename_sheet(source, target)
    }

    pub fn remove_sheet(&mut self, name: &str) -> Result<(), DocumentError> {
        self.document.remove_sheet(name)
    }

    pub fn sheet(&self, name: &str) -> Option<&[Record]> {
        self.document.sheet(name)
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.document.sheet_names()
    }
}
