//! Labelled descriptor vectors.

use std::ops::Index;

use indexmap::{map::Entry, IndexMap};

use crate::error::ParameterError;

/// An ordered vector of labelled descriptor values.
///
/// The insertion order of labels is part of the output: calculating the same descriptors for two
/// sequences yields vectors with identical label order, so that they may be serialized as rows of
/// the same table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Descriptors(IndexMap<String, f64>);

impl Descriptors {
    /// Creates a new, empty descriptor vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty descriptor vector with room for `capacity` descriptors.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Returns the value of the descriptor with the provided label, if any.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.get(label).copied()
    }

    /// Appends a descriptor.
    ///
    /// If the label is already present, its value is replaced in place.
    pub fn insert<L>(&mut self, label: L, value: f64)
    where
        L: Into<String>,
    {
        self.0.insert(label.into(), value);
    }

    /// Appends a descriptor with a label that must not already be present.
    ///
    /// # Errors
    ///
    /// If the label is already present. The existing value is left unchanged.
    pub fn try_insert<L>(&mut self, label: L, value: f64) -> Result<(), ParameterError>
    where
        L: Into<String>,
    {
        match self.0.entry(label.into()) {
            Entry::Occupied(entry) => Err(ParameterError::DuplicateLabel {
                label: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    /// Appends all descriptors of `other`, in order.
    ///
    /// Labels already present are replaced in place. See [`Descriptors::try_append`] to reject
    /// them instead.
    pub fn append(&mut self, other: Descriptors) {
        self.0.extend(other.0);
    }

    /// Appends all descriptors of `other`, in order, none of which may already be present.
    ///
    /// # Errors
    ///
    /// If any label of `other` is already present. Descriptors preceding the duplicate in `other`
    /// will have been appended.
    pub fn try_append(&mut self, other: Descriptors) -> Result<(), ParameterError> {
        other
            .into_iter()
            .try_for_each(|(label, value)| self.try_insert(label, value))
    }

    /// Returns an iterator over labels and values, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(label, &value)| (label.as_str(), value))
    }

    /// Returns an iterator over labels, in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over values, in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.values().copied()
    }

    /// Returns the number of descriptors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no descriptors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the sum of all values.
    pub fn sum(&self) -> f64 {
        self.values().sum()
    }
}

impl Index<&str> for Descriptors {
    type Output = f64;

    fn index(&self, label: &str) -> &Self::Output {
        &self.0[label]
    }
}

impl<L> FromIterator<(L, f64)> for Descriptors
where
    L: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
    {
        Self(IndexMap::from_iter(
            iter.into_iter().map(|(label, value)| (label.into(), value)),
        ))
    }
}

impl<L> Extend<(L, f64)> for Descriptors
where
    L: Into<String>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (L, f64)>,
    {
        self.0
            .extend(iter.into_iter().map(|(label, value)| (label.into(), value)));
    }
}

impl IntoIterator for Descriptors {
    type Item = (String, f64);

    type IntoIter = indexmap::map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let descriptors = Descriptors::from_iter([("b", 1.0), ("a", 2.0), ("c", 3.0)]);

        assert_eq!(descriptors.labels().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(descriptors.values().collect::<Vec<_>>(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_insert_existing_label_keeps_position() {
        let mut descriptors = Descriptors::from_iter([("a", 1.0), ("b", 2.0)]);
        descriptors.insert("a", 3.0);

        assert_eq!(descriptors.labels().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(descriptors["a"], 3.0);
    }

    #[test]
    fn test_append() {
        let mut descriptors = Descriptors::from_iter([("a", 1.0)]);
        descriptors.append(Descriptors::from_iter([("b", 2.0), ("c", 3.0)]));

        assert_eq!(descriptors.len(), 3);
        assert_eq!(descriptors.labels().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(descriptors.sum(), 6.0);
    }

    #[test]
    fn test_try_insert_rejects_existing_label() {
        let mut descriptors = Descriptors::from_iter([("a", 1.0)]);

        assert_eq!(
            descriptors.try_insert("a", 2.0),
            Err(ParameterError::DuplicateLabel {
                label: String::from("a")
            })
        );
        assert_eq!(descriptors["a"], 1.0);
        assert!(descriptors.try_insert("b", 2.0).is_ok());
    }

    #[test]
    fn test_try_append_rejects_overlap() {
        let mut descriptors = Descriptors::from_iter([("tausw1", 1.0), ("tausw2", 2.0)]);

        let result = descriptors.try_append(Descriptors::from_iter([("tausw1", 4.0)]));

        assert!(matches!(result, Err(ParameterError::DuplicateLabel { label }) if label == "tausw1"));
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors["tausw1"], 1.0);
    }

    #[test]
    fn test_get_missing() {
        assert_eq!(Descriptors::new().get("a"), None);
    }
}
