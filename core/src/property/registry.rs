use indexmap::IndexMap;

use crate::error::{ParameterError, PropertyNotFoundError};

use super::{builtin, PropertyTable};

/// An ordered collection of property tables, keyed by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registry(IndexMap<String, PropertyTable>);

impl Registry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry containing every built-in property table.
    pub fn builtin() -> Self {
        builtin::autocorrelation()
            .into_iter()
            .chain(builtin::pseudo())
            .collect()
    }

    /// Returns the table with the provided name.
    pub fn get(&self, name: &str) -> Result<&PropertyTable, PropertyNotFoundError> {
        self.0.get(name).ok_or_else(|| PropertyNotFoundError {
            name: name.to_string(),
        })
    }

    /// Returns the tables with the provided names, in the provided order.
    ///
    /// # Errors
    ///
    /// If any name is missing from the registry.
    pub fn resolve<S>(&self, names: &[S]) -> Result<Vec<PropertyTable>, PropertyNotFoundError>
    where
        S: AsRef<str>,
    {
        names
            .iter()
            .map(|name| self.get(name.as_ref()).cloned())
            .collect()
    }

    /// Inserts a table, returning the table previously registered under the same name, if any.
    ///
    /// A replaced table keeps its position in the registry.
    pub fn insert(&mut self, table: PropertyTable) -> Option<PropertyTable> {
        self.0.insert(table.name().to_string(), table)
    }

    /// Returns `true` if a table with the provided name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns an iterator over the registered names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over the registered tables, in order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyTable> {
        self.0.values()
    }

    /// Returns the number of registered tables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no tables are registered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PropertyTable> for Registry {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = PropertyTable>,
    {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl Extend<PropertyTable> for Registry {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = PropertyTable>,
    {
        iter.into_iter().for_each(|table| {
            self.insert(table);
        });
    }
}

/// Checks that no two tables share a name.
pub(crate) fn check_unique(tables: &[PropertyTable]) -> Result<(), ParameterError> {
    tables
        .iter()
        .enumerate()
        .find(|(i, table)| tables[..*i].iter().any(|other| other.name() == table.name()))
        .map_or(Ok(()), |(_, table)| {
            Err(ParameterError::DuplicateProperty {
                name: table.name().to_string(),
            })
        })
}
