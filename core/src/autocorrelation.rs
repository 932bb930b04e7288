//! Autocorrelation descriptors of physicochemical properties along a sequence.
//!
//! Each property table is first standardized across the 20 standard residues. The sequence is then
//! mapped to its standardized property values, and one of three statistics is computed for every
//! lag up to a maximum lag.

use std::marker::PhantomData;

use crate::{
    error::{check_lag, DegeneratePropertyError, DescriptorError, ParameterError, Scope},
    property::{check_unique, PropertyTable},
    utils::{is_degenerate, mean, variance},
    Descriptors, Sequence,
};

/// The default maximum lag.
pub const DEFAULT_MAXLAG: usize = 30;

mod private {
    pub trait Estimator {
        const LABEL: &'static str;

        /// Whether the statistic is undefined for sequences with constant property values.
        const REQUIRES_VARIATION: bool;

        /// Estimates the statistic at `lag` for standardized values along a sequence.
        ///
        /// The lag is assumed to be at least 1 and less than the number of values.
        fn estimate_unchecked(values: &[f64], lag: usize) -> f64;
    }
}

/// An autocorrelation statistic.
///
/// This trait is sealed and cannot be implemented outside this crate.
pub trait AutocorrelationStatistic: private::Estimator {}
impl<T> AutocorrelationStatistic for T where T: private::Estimator {}

/// The normalized Moreau-Broto autocorrelation.
///
/// The average product of standardized property values separated by the lag.
#[non_exhaustive]
pub struct MoreauBroto;

impl private::Estimator for MoreauBroto {
    const LABEL: &'static str = "MoreauBrotoAuto";

    const REQUIRES_VARIATION: bool = false;

    fn estimate_unchecked(values: &[f64], lag: usize) -> f64 {
        mean(lagged(values, lag).map(|(x, y)| x * y))
    }
}

/// Moran's autocorrelation.
///
/// The average product of centred property values separated by the lag, divided by the
/// population variance of the property values along the sequence.
#[non_exhaustive]
pub struct Moran;

impl private::Estimator for Moran {
    const LABEL: &'static str = "MoranAuto";

    const REQUIRES_VARIATION: bool = true;

    fn estimate_unchecked(values: &[f64], lag: usize) -> f64 {
        let mean = mean(values.iter().copied());
        let numerator = self::mean(lagged(values, lag).map(|(x, y)| (x - mean) * (y - mean)));

        numerator / variance(values.iter().copied())
    }
}

/// Geary's autocorrelation.
///
/// Half the average squared difference between property values separated by the lag, divided by
/// the sample variance of the property values along the sequence scaled by `n / (n - 1)`.
#[non_exhaustive]
pub struct Geary;

impl private::Estimator for Geary {
    const LABEL: &'static str = "GearyAuto";

    const REQUIRES_VARIATION: bool = true;

    fn estimate_unchecked(values: &[f64], lag: usize) -> f64 {
        let n = values.len() as f64;
        let numerator = mean(lagged(values, lag).map(|(x, y)| (x - y).powi(2))) / 2.0;

        let sample_variance = variance(values.iter().copied()) * n / (n - 1.0);
        numerator / (sample_variance * n / (n - 1.0))
    }
}

fn lagged(values: &[f64], lag: usize) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
    values.iter().copied().zip(values.iter().copied().skip(lag))
}

/// A calculator of one autocorrelation statistic.
pub struct Autocorrelation<S: AutocorrelationStatistic> {
    maxlag: usize,
    statistic: PhantomData<S>,
}

impl<S: AutocorrelationStatistic> Autocorrelation<S> {
    /// Creates a new calculator for lags `1..=maxlag`.
    pub fn new(maxlag: usize) -> Self {
        Self {
            maxlag,
            statistic: PhantomData,
        }
    }

    /// Returns the maximum lag.
    pub fn maxlag(&self) -> usize {
        self.maxlag
    }

    /// Computes the statistic for each property and each lag.
    ///
    /// Descriptors are labelled `{Statistic}_{Property}{lag}` and ordered property-major,
    /// lag-minor.
    ///
    /// # Errors
    ///
    /// If no properties are provided, if two properties share a name or would produce the same
    /// label (such as `P` and `P1` with a maximum lag of at least 11), if the maximum lag is not
    /// less than the sequence length, or if a property is degenerate. A property is degenerate if
    /// it has zero variance across the standard residues or, for Moran and Geary, across the
    /// positions of the sequence.
    pub fn compute(
        &self,
        sequence: &Sequence,
        properties: &[PropertyTable],
    ) -> Result<Descriptors, DescriptorError> {
        if properties.is_empty() {
            return Err(ParameterError::NoProperties.into());
        }
        check_unique(properties)?;
        check_lag("maxlag", self.maxlag, sequence.len())?;

        let mut descriptors = Descriptors::with_capacity(properties.len() * self.maxlag);

        for property in properties {
            let standardized = property.standardized()?;
            let values = sequence
                .iter()
                .map(|residue| standardized.get(residue))
                .collect::<Vec<_>>();

            if S::REQUIRES_VARIATION && is_degenerate(variance(values.iter().copied())) {
                return Err(DegeneratePropertyError {
                    name: property.name().to_string(),
                    scope: Scope::Sequence,
                }
                .into());
            }

            for lag in 1..=self.maxlag {
                descriptors.try_insert(
                    format!("{}_{}{lag}", S::LABEL, property.name()),
                    S::estimate_unchecked(&values, lag),
                )?;
            }
        }

        Ok(descriptors)
    }
}

/// An autocorrelation statistic, selected at runtime.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Statistic {
    /// See [`MoreauBroto`].
    MoreauBroto,
    /// See [`Moran`].
    Moran,
    /// See [`Geary`].
    Geary,
}

impl Statistic {
    /// All statistics, in output order.
    pub const ALL: [Self; 3] = [Self::MoreauBroto, Self::Moran, Self::Geary];

    /// Computes the statistic for each property and each lag in `1..=maxlag`.
    ///
    /// See [`Autocorrelation::compute`].
    pub fn compute(
        &self,
        sequence: &Sequence,
        properties: &[PropertyTable],
        maxlag: usize,
    ) -> Result<Descriptors, DescriptorError> {
        match self {
            Self::MoreauBroto => moreau_broto(sequence, properties, maxlag),
            Self::Moran => moran(sequence, properties, maxlag),
            Self::Geary => geary(sequence, properties, maxlag),
        }
    }
}

/// Returns the normalized Moreau-Broto autocorrelation descriptors of a sequence.
///
/// See [`Autocorrelation::compute`].
pub fn moreau_broto(
    sequence: &Sequence,
    properties: &[PropertyTable],
    maxlag: usize,
) -> Result<Descriptors, DescriptorError> {
    Autocorrelation::<MoreauBroto>::new(maxlag).compute(sequence, properties)
}

/// Returns the Moran autocorrelation descriptors of a sequence.
///
/// See [`Autocorrelation::compute`].
pub fn moran(
    sequence: &Sequence,
    properties: &[PropertyTable],
    maxlag: usize,
) -> Result<Descriptors, DescriptorError> {
    Autocorrelation::<Moran>::new(maxlag).compute(sequence, properties)
}

/// Returns the Geary autocorrelation descriptors of a sequence.
///
/// See [`Autocorrelation::compute`].
pub fn geary(
    sequence: &Sequence,
    properties: &[PropertyTable],
    maxlag: usize,
) -> Result<Descriptors, DescriptorError> {
    Autocorrelation::<Geary>::new(maxlag).compute(sequence, properties)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{property::builtin, residue::N, sequence::tests::seq};

    fn ramp() -> Vec<PropertyTable> {
        vec![PropertyTable::new("Ramp", std::array::from_fn(|i| i as f64))]
    }

    #[test]
    fn test_moreau_broto() {
        let descriptors = moreau_broto(&seq("ARN"), &ramp(), 2).unwrap();

        assert_eq!(
            descriptors.labels().collect::<Vec<_>>(),
            ["MoreauBrotoAuto_Ramp1", "MoreauBrotoAuto_Ramp2"]
        );
        // Standardized values are -9.5, -8.5, and -7.5 over a variance of 33.25
        assert_approx_eq!(descriptors["MoreauBrotoAuto_Ramp1"], 72.25 / 33.25);
        assert_approx_eq!(descriptors["MoreauBrotoAuto_Ramp2"], 71.25 / 33.25);
    }

    #[test]
    fn test_moran() {
        let descriptors = moran(&seq("ARN"), &ramp(), 2).unwrap();

        assert_approx_eq!(descriptors["MoranAuto_Ramp1"], 0.0);
        assert_approx_eq!(descriptors["MoranAuto_Ramp2"], -1.5);
    }

    #[test]
    fn test_geary() {
        let descriptors = geary(&seq("ARN"), &ramp(), 2).unwrap();

        // The sample variance along the sequence is scaled by 3 / 2
        assert_approx_eq!(descriptors["GearyAuto_Ramp1"], 1.0 / 3.0);
        assert_approx_eq!(descriptors["GearyAuto_Ramp2"], 4.0 / 3.0);
    }

    #[test]
    fn test_property_major_lag_minor() {
        let properties = builtin::autocorrelation();
        let descriptors = moran(&seq("MKVLAAGIVGALLLSTPAWA"), &properties, 3).unwrap();

        assert_eq!(descriptors.len(), 8 * 3);

        let labels = descriptors.labels().collect::<Vec<_>>();
        assert_eq!(
            labels[..4],
            [
                "MoranAuto_Hydrophobicity1",
                "MoranAuto_Hydrophobicity2",
                "MoranAuto_Hydrophobicity3",
                "MoranAuto_AvFlexibility1",
            ]
        );
        assert_eq!(labels.last(), Some(&"MoranAuto_Mutability3"));
    }

    #[test]
    fn test_runtime_statistic_matches_static() {
        let sequence = seq("MKVLAAGIVGALLLSTPAWA");
        let properties = builtin::autocorrelation();

        assert_approx_eq!(
            Statistic::Geary.compute(&sequence, &properties, 5).unwrap(),
            geary(&sequence, &properties, 5).unwrap()
        );
    }

    #[test]
    fn test_constant_property_is_degenerate() {
        let properties = [PropertyTable::new("Constant", [2.0; N])];

        for statistic in Statistic::ALL {
            let result = statistic.compute(&seq("ARNDC"), &properties, 2);

            assert!(matches!(
                result,
                Err(DescriptorError::DegenerateProperty(e)) if e.scope() == Scope::Alphabet
            ));
        }
    }

    #[test]
    fn test_constant_sequence_is_degenerate_for_moran_and_geary() {
        let sequence = seq("AAAA");

        assert!(moreau_broto(&sequence, &ramp(), 2).is_ok());

        for result in [moran(&sequence, &ramp(), 2), geary(&sequence, &ramp(), 2)] {
            assert!(matches!(
                result,
                Err(DescriptorError::DegenerateProperty(e)) if e.scope() == Scope::Sequence
            ));
        }
    }

    #[test]
    fn test_maxlag_out_of_range() {
        let sequence = seq("ARNDC");

        for maxlag in [0, 5, 6] {
            assert!(matches!(
                moreau_broto(&sequence, &ramp(), maxlag),
                Err(DescriptorError::Parameter(ParameterError::Lag { .. }))
            ));
        }
    }

    #[test]
    fn test_colliding_labels() {
        let properties = [
            PropertyTable::new("P", std::array::from_fn(|i| i as f64)),
            PropertyTable::new("P1", std::array::from_fn(|i| (i * i) as f64)),
        ];

        assert_eq!(
            moran(&seq("ARNDCQEGHILK"), &properties, 11),
            Err(DescriptorError::Parameter(ParameterError::DuplicateLabel {
                label: String::from("MoranAuto_P11")
            }))
        );
        assert!(moran(&seq("ARNDCQEGHILK"), &properties, 10).is_ok());
    }

    #[test]
    fn test_no_properties() {
        assert_eq!(
            moran(&seq("ARNDC"), &[], 2),
            Err(DescriptorError::Parameter(ParameterError::NoProperties))
        );
    }

    #[test]
    fn test_duplicate_properties() {
        let properties = [ramp(), ramp()].concat();

        assert!(matches!(
            geary(&seq("ARNDC"), &properties, 2),
            Err(DescriptorError::Parameter(
                ParameterError::DuplicateProperty { .. }
            ))
        ));
    }
}
