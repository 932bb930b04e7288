//! Physicochemical property tables.

use std::ops::Index;

use crate::{
    error::{DegeneratePropertyError, Scope},
    residue::{Residue, N},
    utils::{is_degenerate, mean, variance},
};

pub mod builtin;

mod registry;
pub(crate) use registry::check_unique;
pub use registry::Registry;

/// A named mapping from each standard residue to a physicochemical scalar.
///
/// Values are stored in canonical residue order, see [`ALPHABET`](crate::residue::ALPHABET).
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyTable {
    name: String,
    values: [f64; N],
}

impl PropertyTable {
    /// Creates a new property table from values in canonical residue order.
    pub fn new<S>(name: S, values: [f64; N]) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Returns the name of the property.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property values in canonical residue order.
    pub fn values(&self) -> &[f64; N] {
        &self.values
    }

    /// Returns the property value of a residue.
    #[inline]
    pub fn get(&self, residue: Residue) -> f64 {
        self.values[residue.index()]
    }

    /// Returns the mean of the property across the standard residues.
    pub fn mean(&self) -> f64 {
        mean(self.values)
    }

    /// Returns the population variance of the property across the standard residues.
    pub fn variance(&self) -> f64 {
        variance(self.values)
    }

    /// Returns a copy of the table standardized to zero mean and unit variance across the
    /// standard residues.
    ///
    /// The name is kept unchanged. Standardization uses the population standard deviation.
    ///
    /// # Errors
    ///
    /// If the property has zero variance across the standard residues.
    pub fn standardized(&self) -> Result<Self, DegeneratePropertyError> {
        let variance = self.variance();

        if is_degenerate(variance) {
            return Err(DegeneratePropertyError {
                name: self.name.clone(),
                scope: Scope::Alphabet,
            });
        }

        let (mean, sd) = (self.mean(), variance.sqrt());

        Ok(Self {
            name: self.name.clone(),
            values: self.values.map(|x| (x - mean) / sd),
        })
    }
}

impl Index<Residue> for PropertyTable {
    type Output = f64;

    fn index(&self, residue: Residue) -> &Self::Output {
        &self.values[residue.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> PropertyTable {
        PropertyTable::new("Ramp", std::array::from_fn(|i| i as f64))
    }

    #[test]
    fn test_get_follows_alphabet() {
        let table = ramp();

        assert_eq!(table.get(Residue::from_byte(b'A').unwrap()), 0.0);
        assert_eq!(table[Residue::from_byte(b'R').unwrap()], 1.0);
        assert_eq!(table.get(Residue::from_byte(b'V').unwrap()), 19.0);
    }

    #[test]
    fn test_standardized_moments() {
        let standardized = ramp().standardized().unwrap();

        assert_eq!(standardized.name(), "Ramp");
        assert_approx_eq!(standardized.mean(), 0.0);
        assert_approx_eq!(standardized.variance(), 1.0);
    }

    #[test]
    fn test_standardized_constant_is_degenerate() {
        let table = PropertyTable::new("Constant", [1.5; N]);

        assert_eq!(
            table.standardized(),
            Err(DegeneratePropertyError {
                name: String::from("Constant"),
                scope: Scope::Alphabet,
            })
        );
    }
}
