use indexmap::IndexMap;

use crate::{DocumentError, Record, SheetMap};

/// The full named-sheet collection held in memory between load and save
/// calls. Sheets keep insertion order; names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sheets: IndexMap<String, Vec<Record>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges incoming sheets: missing sheets are created, and every incoming
    /// record is appended to the end of its sheet in incoming order. Existing
    /// records are never replaced.
    pub fn append(&mut self, sheets: SheetMap) {
        for (name, records) in sheets {
            self.sheets.entry(name).or_default().extend(records);
        }
    }

    /// Adds an empty sheet.
    pub fn create_sheet(&mut self, name: &str) -> Result<(), DocumentError> {
        if self.sheets.contains_key(name) {
            return Err(DocumentError::DuplicateSheet(name.to_string()));
        }
        self.sheets.insert(name.to_string(), Vec::new());
        Ok(())
    }

    /// Value-copies the record sequence under a new name. An existing sheet
    /// named `target` is replaced.
    pub fn duplicate_sheet(&mut self, source: &str, target: &str) -> Result<(), DocumentError> {
        let records = self
            .sheets
            .get(source)
            .cloned()
            .ok_or_else(|| DocumentError::SheetNotFound(source.to_string()))?;
        self.sheets.insert(target.to_string(), records);
        Ok(())
    }

    /// Duplicates `source` under `target`, then removes `source`.
    pub fn rename_sheet(&mut self, source: &str, target: &str) -> Result<(), DocumentError> {
        self.duplicate_sheet(source, target)?;
        self.sheets.shift_remove(source);
        Ok(())
    }

    pub fn remove_sheet(&mut self, name: &str) -> Result<(), DocumentError> {
        self.sheets
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| DocumentError::SheetNotFound(name.to_string()))
    }

    pub fn sheet(&self, name: &str) -> Option<&[Record]> {
        self.sheets.get(name).map(Vec::as_slice)
    }

    pub fn contains_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.keys().cloned().collect()
    }

    /// Sheets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.sheets.iter().map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl From<SheetMap> for Document {
    fn from(sheets: SheetMap) -> Self {
        let mut document = Document::new();
        document.append(sheets);
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Some(v.to_string())))
            .collect()
    }

    fn sheets(name: &str, records: Vec<Record>) -> SheetMap {
        SheetMap::from_iter([(name.to_string(), records)])
    }

    #[test]
    fn append_twice_keeps_order_and_duplicates() {
        let r1 = record(&[("col1", "a")]);
        let r2 = record(&[("col1", "b")]);

        let mut document = Document::new();
        document.append(sheets("s", vec![r1.clone(), r2.clone()]));
        document.append(sheets("s", vec![r1.clone(), r2.clone()]));

        assert_eq!(document.sheet("s").unwrap(), &[r1.clone(), r2.clone(), r1, r2]);
    }

    #[test]
    fn create_sheet_twice_fails() {
        let mut document = Document::new();
        document.create_sheet("s").unwrap();
        assert_eq!(
            document.create_sheet("s"),
            Err(DocumentError::DuplicateSheet("s".to_string()))
        );
    }

    #[test]
    fn duplicate_sheet_copies_by_value_and_overwrites_target() {
        let mut document = Document::new();
        document.append(sheets("a", vec![record(&[("col1", "x")])]));
        document.append(sheets("b", vec![record(&[("col1", "y")])]));

        document.duplicate_sheet("a", "b").unwrap();
        assert_eq!(document.sheet("b"), document.sheet("a"));

        // Mutating the copy leaves the source untouched.
        document.append(sheets("b", vec![record(&[("col1", "z")])]));
        assert_eq!(document.sheet("a").unwrap().len(), 1);
        assert_eq!(document.sheet("b").unwrap().len(), 2);
    }

    #[test]
    fn duplicate_sheet_of_missing_source_fails() {
        let mut document = Document::new();
        assert_eq!(
            document.duplicate_sheet("missing", "target"),
            Err(DocumentError::SheetNotFound("missing".to_string()))
        );
    }

    #[test]
    fn rename_sheet_moves_records() {
        let mut document = Document::new();
        let records = vec![record(&[("col1", "a")])];
        document.append(sheets("old", records.clone()));

        document.rename_sheet("old", "new").unwrap();
        assert!(!document.contains_sheet("old"));
        assert_eq!(document.sheet("new").unwrap(), records.as_slice());
    }

    #[test]
    fn rename_and_remove_of_missing_sheet_fail() {
        let mut document = Document::new();
        assert_eq!(
            document.rename_sheet("nope", "other"),
            Err(DocumentError::SheetNotFound("nope".to_string()))
        );
        assert_eq!(
            document.remove_sheet("nope"),
            Err(DocumentError::SheetNotFound("nope".to_string()))
        );
    }

    #[test]
    fn sheet_names_follow_insertion_order() {
        let mut document = Document::new();
        document.create_sheet("zeta").unwrap();
        document.create_sheet("alpha").unwrap();
        assert_eq!(document.sheet_names(), vec!["zeta", "alpha"]);
    }
}
