//! Flat symbol table keyed by identifier

use super::error::{SymbolError, SymbolResult};
use crate::grammar::DeclaredType;
use serde::Serialize;
use std::collections::HashMap;

/// One declared variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    pub name: String,
    pub declared_type: DeclaredType,
    /// Value text exactly as written, trimmed
    pub raw_value: String,
    pub declared_on_line: usize,
}

impl SymbolEntry {
    pub fn new(
        name: impl Into<String>,
        declared_type: DeclaredType,
        raw_value: impl Into<String>,
        declared_on_line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type,
            raw_value: raw_value.into(),
            declared_on_line,
        }
    }
}

/// Identifiers are unique. Iteration follows insertion order, which is source
/// order when the table is built by the semantic stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line of the existing declaration of `name`, if any
    pub fn check_duplicate(&self, name: &str) -> Option<usize> {
        self.get(name).map(|entry| entry.declared_on_line)
    }

    /// Add an entry. A second entry with the same name is rejected and the
    /// table is left unchanged.
    pub fn insert(&mut self, entry: SymbolEntry) -> SymbolResult<()> {
        if let Some(first_line) = self.check_duplicate(&entry.name) {
            return Err(SymbolError::duplicate_symbol(
                &entry.name,
                first_line,
                entry.declared_on_line,
            ));
        }

        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn count_by_type(&self, declared_type: DeclaredType) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.declared_type == declared_type)
            .count()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a SymbolEntry;
    type IntoIter = std::slice::Iter<'a, SymbolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for SymbolTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_insert_and_lookup() {
        let mut table = SymbolTable::new();
        table
            .insert(SymbolEntry::new("x", DeclaredType::Int, "1", 1))
            .unwrap();

        let entry = table.get("x").unwrap();
        assert_eq!(entry.declared_type, DeclaredType::Int);
        assert_eq!(entry.raw_value, "1");
        assert!(table.contains("x"));
        assert!(!table.contains("y"));
    }

    #[test]
    fn test_duplicate_is_rejected_not_overwritten() {
        let mut table = SymbolTable::new();
        table
            .insert(SymbolEntry::new("x", DeclaredType::Int, "1", 1))
            .unwrap();

        let result = table.insert(SymbolEntry::new("x", DeclaredType::Double, "2.0", 4));
        assert_matches!(
            result,
            Err(SymbolError::DuplicateSymbol {
                first_line: 1,
                duplicate_line: 4,
                ..
            })
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("x").unwrap().raw_value, "1");
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut table = SymbolTable::new();
        for (line, name) in ["zeta", "alpha", "mid"].iter().enumerate() {
            table
                .insert(SymbolEntry::new(*name, DeclaredType::Boolean, "true", line + 1))
                .unwrap();
        }

        assert_eq!(table.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(table.count_by_type(DeclaredType::Boolean), 3);
    }

    #[test]
    fn test_serializes_as_ordered_list() {
        let mut table = SymbolTable::new();
        table
            .insert(SymbolEntry::new("c", DeclaredType::Char, "'a'", 2))
            .unwrap();

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json[0]["name"], "c");
        assert_eq!(json[0]["declared_type"], "char");
        assert_eq!(json[0]["declared_on_line"], 2);
    }
}
