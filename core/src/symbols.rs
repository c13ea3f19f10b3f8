//! Symbol tables binding free identifiers.
//!
//! Two instances are used: a [`TypeTable`] when building an expression and a
//! [`ValueTable`] each time the compiled expression runs. The run-time table
//! must bind every name the build-time table declared, to a value of the
//! declared type.

use hashbrown::HashMap;
use thiserror::Error;

use crate::{types::Type, values::Value};

/// Returned when a name is bound twice in the same table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("symbol '{0}' is already defined")]
pub struct DuplicateSymbol(pub String);

/// Name-keyed lookup used by the builder (types) and the evaluator (values).
#[derive(Debug, Clone)]
pub struct SymbolTable<T> {
    entries: HashMap<String, T>,
}

pub type TypeTable = SymbolTable<Type>;
pub type ValueTable = SymbolTable<Value>;

impl<T> SymbolTable<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Bind `name`. Names are unique within a table.
    pub fn insert(&mut self, name: impl Into<String>, item: T) -> Result<(), DuplicateSymbol> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(DuplicateSymbol(name));
        }
        self.entries.insert(name, item);
        Ok(())
    }

    /// Build a table from `(name, item)` pairs, rejecting duplicates.
    pub fn from_entries<N: Into<String>>(
        entries: impl IntoIterator<Item = (N, T)>,
    ) -> Result<Self, DuplicateSymbol> {
        let mut table = Self::new();
        for (name, item) in entries {
            table.insert(name, item)?;
        }
        Ok(table)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, item)| (name.as_str(), item))
    }
}

impl<T> Default for SymbolTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable<Value> {
    /// The build-time table matching this run-time table.
    pub fn types(&self) -> TypeTable {
        SymbolTable {
            entries: self
                .entries
                .iter()
                .map(|(name, value)| (name.clone(), value.ty()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = TypeTable::new();
        table.insert("x", Type::Int).unwrap();
        assert_eq!(table.get("x"), Some(&Type::Int));
        assert!(table.contains("x"));
        assert!(!table.contains("y"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut table = TypeTable::new();
        table.insert("x", Type::Int).unwrap();
        let err = table.insert("x", Type::String).unwrap_err();
        assert_eq!(err, DuplicateSymbol("x".to_string()));
        assert_eq!(err.to_string(), "symbol 'x' is already defined");
        // The original binding is kept.
        assert_eq!(table.get("x"), Some(&Type::Int));
    }

    #[test]
    fn test_from_entries() {
        let table = ValueTable::from_entries([("x", Value::Int(2)), ("y", Value::str("a"))]).unwrap();
        assert_eq!(table.len(), 2);

        let err = ValueTable::from_entries([("x", Value::Int(2)), ("x", Value::Int(3))]);
        assert!(err.is_err());
    }

    #[test]
    fn test_types_from_values() {
        let values = ValueTable::from_entries([("x", Value::Int(2)), ("s", Value::str("a"))]).unwrap();
        let types = values.types();
        assert_eq!(types.get("x"), Some(&Type::Int));
        assert_eq!(types.get("s"), Some(&Type::String));
        assert_eq!(types.len(), 2);
    }

    #[test]
    fn test_empty_table() {
        let table = ValueTable::default();
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }
}
