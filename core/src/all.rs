//! Aggregate calculation of several descriptor families.

use std::fmt;

use crate::{
    autocorrelation::Statistic,
    composition, ctd,
    distance::{Distance, DistanceMatrix},
    error::{check_weight, DescriptorError, ParameterError},
    property::{builtin, check_unique, PropertyTable},
    pseudo, sequence_order, Descriptors, Sequence,
};

/// A family of descriptors.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Family {
    /// Amino acid composition, see [`composition::aac`].
    Aac,
    /// Dipeptide composition, see [`composition::dpc`].
    Dpc,
    /// Tripeptide composition, see [`composition::tpc`].
    Tpc,
    /// Normalized Moreau-Broto autocorrelation, see [`crate::autocorrelation::moreau_broto`].
    MoreauBroto,
    /// Moran autocorrelation, see [`crate::autocorrelation::moran`].
    Moran,
    /// Geary autocorrelation, see [`crate::autocorrelation::geary`].
    Geary,
    /// Composition, transition, and distribution, see [`ctd::ctd`].
    Ctd,
    /// Sequence-order-coupling numbers, see [`sequence_order::socn`].
    Socn,
    /// Quasi-sequence-order descriptors, see [`sequence_order::qso`].
    Qso,
    /// Type I pseudo amino acid composition, see [`pseudo::paac`].
    Paac,
    /// Type II pseudo amino acid composition, see [`pseudo::apaac`].
    Apaac,
}

impl Family {
    /// All families, in output order.
    pub const ALL: [Self; 11] = [
        Self::Aac,
        Self::Dpc,
        Self::Tpc,
        Self::MoreauBroto,
        Self::Moran,
        Self::Geary,
        Self::Ctd,
        Self::Socn,
        Self::Qso,
        Self::Paac,
        Self::Apaac,
    ];

    /// Returns the composition family for k-mers of size `k`, if any.
    pub fn from_kmer_size(k: usize) -> Option<Self> {
        match k {
            1 => Some(Self::Aac),
            2 => Some(Self::Dpc),
            3 => Some(Self::Tpc),
            _ => None,
        }
    }

    /// Returns the short name of the family.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aac => "aac",
            Self::Dpc => "dpc",
            Self::Tpc => "tpc",
            Self::MoreauBroto => "moreau-broto",
            Self::Moran => "moran",
            Self::Geary => "geary",
            Self::Ctd => "ctd",
            Self::Socn => "socn",
            Self::Qso => "qso",
            Self::Paac => "paac",
            Self::Apaac => "apaac",
        }
    }

    fn is_composition(&self) -> bool {
        matches!(self, Self::Aac | Self::Dpc | Self::Tpc)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A builder to configure a [`Calculator`].
///
/// By default, every family except tripeptide composition is computed, using the default
/// parameters of each family, the built-in autocorrelation properties, and both built-in
/// distance matrices.
#[derive(Clone, Debug)]
pub struct Builder {
    families: Vec<Family>,
    kmer_sizes: Option<Vec<usize>>,
    maxlag: usize,
    lamda: usize,
    weight: f64,
    qso_weight: f64,
    properties: Vec<PropertyTable>,
    paac_properties: Option<Vec<PropertyTable>>,
    distance_matrices: Vec<DistanceMatrix>,
}

impl Builder {
    /// Builds the calculator.
    ///
    /// # Errors
    ///
    /// If no families are selected, if a k-mer size is not 1, 2, or 3, if a weight is negative
    /// or not finite, if no properties or no distance matrices are provided for families that
    /// require them, or if properties or distance matrices are duplicated. Distance matrices
    /// whose labels coincide count as duplicates.
    pub fn build(self) -> Result<Calculator, ParameterError> {
        let Builder {
            families,
            kmer_sizes,
            maxlag,
            lamda,
            weight,
            qso_weight,
            properties,
            paac_properties,
            distance_matrices,
        } = self;

        let families = Self::build_families(families, kmer_sizes)?;
        check_weight(weight)?;
        check_weight(qso_weight)?;

        let uses = |family: Family| families.binary_search(&family).is_ok();

        if uses(Family::MoreauBroto) || uses(Family::Moran) || uses(Family::Geary) {
            Self::check_properties(&properties)?;
        }

        if let Some(paac_properties) = &paac_properties {
            Self::check_properties(paac_properties)?;
        }

        if uses(Family::Socn) || uses(Family::Qso) {
            Self::check_distance_matrices(&distance_matrices)?;
        }

        Ok(Calculator {
            families,
            maxlag,
            lamda,
            weight,
            qso_weight,
            properties,
            paac_properties,
            distance_matrices,
        })
    }

    fn build_families(
        mut families: Vec<Family>,
        kmer_sizes: Option<Vec<usize>>,
    ) -> Result<Vec<Family>, ParameterError> {
        if let Some(kmer_sizes) = kmer_sizes {
            families.retain(|family| !family.is_composition());

            for k in kmer_sizes {
                families.push(Family::from_kmer_size(k).ok_or(ParameterError::KmerSize { k })?);
            }
        }

        families.sort_unstable();
        families.dedup();

        if families.is_empty() {
            Err(ParameterError::NoFamilies)
        } else {
            Ok(families)
        }
    }

    fn check_properties(properties: &[PropertyTable]) -> Result<(), ParameterError> {
        if properties.is_empty() {
            Err(ParameterError::NoProperties)
        } else {
            check_unique(properties)
        }
    }

    fn check_distance_matrices(matrices: &[DistanceMatrix]) -> Result<(), ParameterError> {
        if matrices.is_empty() {
            return Err(ParameterError::NoDistanceMatrices);
        }

        matrices
            .iter()
            .enumerate()
            .find(|(i, matrix)| {
                matrices[..*i].iter().any(|other| {
                    other.name() == matrix.name()
                        || other.socn_stem() == matrix.socn_stem()
                        || other.qso_stem() == matrix.qso_stem()
                })
            })
            .map_or(Ok(()), |(_, matrix)| {
                Err(ParameterError::DuplicateDistanceMatrix {
                    name: matrix.name().to_string(),
                })
            })
    }

    /// Sets the families to compute.
    ///
    /// Families are always computed in the order of [`Family::ALL`], regardless of the order
    /// provided here.
    pub fn set_families<I>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = Family>,
    {
        self.families = families.into_iter().collect();
        self
    }

    /// Sets the k-mer sizes of the composition families to compute.
    ///
    /// This replaces any composition families set by [`Builder::set_families`].
    pub fn set_kmer_sizes<I>(mut self, kmer_sizes: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.kmer_sizes = Some(kmer_sizes.into_iter().collect());
        self
    }

    /// Sets the maximum lag of autocorrelation and sequence-order descriptors.
    pub fn set_maxlag(mut self, maxlag: usize) -> Self {
        self.maxlag = maxlag;
        self
    }

    /// Sets the maximum correlation rank of pseudo amino acid composition descriptors.
    pub fn set_lamda(mut self, lamda: usize) -> Self {
        self.lamda = lamda;
        self
    }

    /// Sets the weight of correlation terms in pseudo amino acid composition descriptors.
    pub fn set_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the weight of sequence-order terms in quasi-sequence-order descriptors.
    pub fn set_qso_weight(mut self, weight: f64) -> Self {
        self.qso_weight = weight;
        self
    }

    /// Sets the properties of autocorrelation descriptors.
    pub fn set_properties(mut self, properties: Vec<PropertyTable>) -> Self {
        self.properties = properties;
        self
    }

    /// Sets custom properties of type I pseudo amino acid composition descriptors.
    ///
    /// See [`pseudo::paac_with_properties`].
    pub fn set_paac_properties(mut self, properties: Vec<PropertyTable>) -> Self {
        self.paac_properties = Some(properties);
        self
    }

    /// Sets the distance matrices of sequence-order descriptors.
    pub fn set_distance_matrices<I>(mut self, matrices: I) -> Self
    where
        I: IntoIterator<Item = DistanceMatrix>,
    {
        self.distance_matrices = matrices.into_iter().collect();
        self
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            families: Family::ALL
                .into_iter()
                .filter(|family| family != &Family::Tpc)
                .collect(),
            kmer_sizes: None,
            maxlag: sequence_order::DEFAULT_MAXLAG,
            lamda: pseudo::DEFAULT_LAMDA,
            weight: pseudo::DEFAULT_WEIGHT,
            qso_weight: sequence_order::DEFAULT_WEIGHT,
            properties: builtin::autocorrelation(),
            paac_properties: None,
            distance_matrices: Distance::ALL
                .iter()
                .map(|distance| distance.matrix().clone())
                .collect(),
        }
    }
}

/// A configured calculator of several descriptor families.
///
/// Use a [`Builder`] to create a calculator.
#[derive(Clone, Debug)]
pub struct Calculator {
    families: Vec<Family>,
    maxlag: usize,
    lamda: usize,
    weight: f64,
    qso_weight: f64,
    properties: Vec<PropertyTable>,
    paac_properties: Option<Vec<PropertyTable>>,
    distance_matrices: Vec<DistanceMatrix>,
}

impl Calculator {
    /// Returns the families computed, in output order.
    pub fn families(&self) -> &[Family] {
        &self.families
    }

    /// Computes the descriptors of every configured family and concatenates them.
    ///
    /// Sequence-order families are computed once per distance matrix, in the configured order.
    ///
    /// # Errors
    ///
    /// If any family fails. No partial descriptors are returned.
    pub fn compute(&self, sequence: &Sequence) -> Result<Descriptors, DescriptorError> {
        let mut descriptors = Descriptors::new();

        for &family in self.families.iter() {
            descriptors.try_append(self.compute_family(sequence, family)?)?;
        }

        Ok(descriptors)
    }

    fn compute_family(
        &self,
        sequence: &Sequence,
        family: Family,
    ) -> Result<Descriptors, DescriptorError> {
        let descriptors = match family {
            Family::Aac => composition::aac(sequence),
            Family::Dpc => composition::dpc(sequence)?,
            Family::Tpc => composition::tpc(sequence)?,
            Family::MoreauBroto => {
                Statistic::MoreauBroto.compute(sequence, &self.properties, self.maxlag)?
            }
            Family::Moran => Statistic::Moran.compute(sequence, &self.properties, self.maxlag)?,
            Family::Geary => Statistic::Geary.compute(sequence, &self.properties, self.maxlag)?,
            Family::Ctd => ctd::ctd(sequence),
            Family::Socn => {
                let mut descriptors = Descriptors::new();
                for matrix in self.distance_matrices.iter() {
                    let socn = sequence_order::socn(sequence, matrix, self.maxlag)?;
                    descriptors.try_append(socn)?;
                }
                descriptors
            }
            Family::Qso => {
                let mut descriptors = Descriptors::new();
                for matrix in self.distance_matrices.iter() {
                    descriptors.try_append(sequence_order::qso(
                        sequence,
                        matrix,
                        self.maxlag,
                        self.qso_weight,
                    )?)?;
                }
                descriptors
            }
            Family::Paac => match &self.paac_properties {
                Some(properties) => {
                    pseudo::paac_with_properties(sequence, properties, self.lamda, self.weight)?
                }
                None => pseudo::paac(sequence, self.lamda, self.weight)?,
            },
            Family::Apaac => pseudo::apaac(sequence, self.lamda, self.weight)?,
        };

        Ok(descriptors)
    }
}

/// Computes every default descriptor family with default parameters.
///
/// See [`Builder`] for the defaults.
pub fn all(sequence: &Sequence) -> Result<Descriptors, DescriptorError> {
    Builder::default().build()?.compute(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{residue::N, sequence::tests::seq};

    // 40 residues, long enough for the default lags
    const LONG: &str = "MKVLAAGIVGALLLSTPAWAADGCGVPKAVNQEHRSTYWF";

    #[test]
    fn test_default_families() {
        let calculator = Builder::default().build().unwrap();

        assert!(!calculator.families().contains(&Family::Tpc));
        assert_eq!(calculator.families().len(), 10);
    }

    #[test]
    fn test_all_is_concatenation() {
        let sequence = seq(LONG);
        let descriptors = all(&sequence).unwrap();

        let expected_len = 20 + 400 + 3 * 8 * 30 + 147 + 2 * 30 + 2 * 50 + 50 + 80;
        assert_eq!(descriptors.len(), expected_len);

        let labels = descriptors.labels().collect::<Vec<_>>();
        assert_eq!(labels[0], "A");
        assert_eq!(labels[20], "AA");
        assert_eq!(labels[420], "MoreauBrotoAuto_Hydrophobicity1");
        assert_eq!(labels.last(), Some(&"APAAC80"));

        assert_approx_eq!(descriptors["A"], composition::aac(&sequence)["A"]);

        let qso = sequence_order::qso(&sequence, Distance::Grantham.matrix(), 30, 0.1).unwrap();
        assert_approx_eq!(descriptors["QSOgrant3"], qso["QSOgrant3"]);
    }

    #[test]
    fn test_order_independent_of_selection_order() {
        let sequence = seq("ADGCGVPKAV");

        let a = Builder::default()
            .set_families([Family::Ctd, Family::Aac])
            .build()
            .unwrap()
            .compute(&sequence)
            .unwrap();
        let b = Builder::default()
            .set_families([Family::Aac, Family::Ctd, Family::Aac])
            .build()
            .unwrap()
            .compute(&sequence)
            .unwrap();

        assert_eq!(a.len(), 20 + 147);
        assert_approx_eq!(a, b);
    }

    #[test]
    fn test_kmer_sizes_replace_composition() {
        let calculator = Builder::default()
            .set_families([Family::Aac, Family::Ctd])
            .set_kmer_sizes([3, 2])
            .build()
            .unwrap();

        assert_eq!(calculator.families(), [Family::Dpc, Family::Tpc, Family::Ctd]);
    }

    #[test]
    fn test_invalid_kmer_size() {
        let result = Builder::default().set_kmer_sizes([1, 4]).build();

        assert_eq!(result.unwrap_err(), ParameterError::KmerSize { k: 4 });
    }

    #[test]
    fn test_no_families() {
        let result = Builder::default().set_families([]).build();

        assert_eq!(result.unwrap_err(), ParameterError::NoFamilies);
    }

    #[test]
    fn test_invalid_weight() {
        let result = Builder::default().set_qso_weight(-0.1).build();

        assert_eq!(result.unwrap_err(), ParameterError::Weight { weight: -0.1 });
    }

    #[test]
    fn test_properties_only_checked_when_used() {
        assert!(Builder::default()
            .set_families([Family::Aac])
            .set_properties(Vec::new())
            .build()
            .is_ok());

        assert_eq!(
            Builder::default()
                .set_families([Family::Moran])
                .set_properties(Vec::new())
                .build()
                .unwrap_err(),
            ParameterError::NoProperties
        );
    }

    #[test]
    fn test_duplicate_distance_matrices() {
        let matrix = DistanceMatrix::new("Custom", [[1.0; N]; N]);

        let result = Builder::default()
            .set_families([Family::Socn])
            .set_distance_matrices([matrix.clone(), matrix])
            .build();

        assert_eq!(
            result.unwrap_err(),
            ParameterError::DuplicateDistanceMatrix {
                name: String::from("Custom")
            }
        );
    }

    #[test]
    fn test_distance_matrices_with_shared_labels() {
        // Named differently from the built-in matrix, but labelled tausw{d} all the same
        let custom = DistanceMatrix::new("sw", [[1.0; N]; N]);

        let result = Builder::default()
            .set_families([Family::Socn])
            .set_distance_matrices([Distance::SchneiderWrede.matrix().clone(), custom])
            .build();

        assert_eq!(
            result.unwrap_err(),
            ParameterError::DuplicateDistanceMatrix {
                name: String::from("sw")
            }
        );
    }

    #[test]
    fn test_properties_with_colliding_labels() {
        let properties = vec![
            PropertyTable::new("P", std::array::from_fn(|i| i as f64)),
            PropertyTable::new("P1", std::array::from_fn(|i| (i * i) as f64)),
        ];

        let calculator = Builder::default()
            .set_families([Family::MoreauBroto])
            .set_properties(properties)
            .set_maxlag(11)
            .build()
            .unwrap();

        assert_eq!(
            calculator.compute(&seq(LONG)),
            Err(DescriptorError::Parameter(ParameterError::DuplicateLabel {
                label: String::from("MoreauBrotoAuto_P11")
            }))
        );
    }

    #[test]
    fn test_custom_distance_matrix() {
        let descriptors = Builder::default()
            .set_families([Family::Socn])
            .set_distance_matrices([DistanceMatrix::new("Unit", [[1.0; N]; N])])
            .set_maxlag(2)
            .build()
            .unwrap()
            .compute(&seq("ARNDC"))
            .unwrap();

        assert_eq!(descriptors.labels().collect::<Vec<_>>(), ["tauUnit1", "tauUnit2"]);
        assert_approx_eq!(descriptors["tauUnit1"], 4.0);
        assert_approx_eq!(descriptors["tauUnit2"], 3.0);
    }

    #[test]
    fn test_short_sequence_fails_without_partial_output() {
        let result = all(&seq("ADGCGVPKAV"));

        assert!(matches!(
            result,
            Err(DescriptorError::Parameter(ParameterError::Lag {
                name: "maxlag",
                lag: 30,
                length: 10
            }))
        ));
    }
}
