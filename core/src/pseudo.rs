//! Pseudo amino acid composition descriptors.
//!
//! Both type I (PAAC) and type II, or amphiphilic, (APAAC) pseudo amino acid composition extend
//! the amino acid composition of a sequence with sequence-order correlation factors. The
//! composition terms and the weighted correlation terms are scaled jointly so that the vector
//! sums to 100.

use crate::{
    composition::frequencies,
    error::{check_lag, check_weight, DescriptorError, ParameterError},
    property::{builtin, check_unique, PropertyTable},
    Descriptors, Sequence,
};

/// The default maximum correlation rank.
pub const DEFAULT_LAMDA: usize = 30;

/// The default weight of correlation terms.
pub const DEFAULT_WEIGHT: f64 = 0.05;

/// Returns the type I pseudo amino acid composition of a sequence.
///
/// The correlation between two residues is the mean squared difference of their standardized
/// hydrophobicity, hydrophilicity, and side-chain mass. See [`paac_with_properties`].
pub fn paac(
    sequence: &Sequence,
    lamda: usize,
    weight: f64,
) -> Result<Descriptors, DescriptorError> {
    paac_with_properties(sequence, &builtin::pseudo(), lamda, weight)
}

/// Returns the type I pseudo amino acid composition of a sequence using custom properties.
///
/// The correlation between two residues is the mean squared difference of their property values,
/// after standardizing each property across the standard residues. The correlation factor at
/// lag `d` is the average correlation of residues `d` positions apart.
///
/// The `20 + lamda` descriptors are labelled `PAAC1`, `PAAC2`, and so on: first the residue
/// composition terms in canonical order, then the correlation terms by increasing lag.
///
/// # Errors
///
/// If no properties are provided, if two properties share a name, if `lamda` is zero or not less
/// than the sequence length, if the weight is negative or not finite, or if a property has zero
/// variance across the standard residues.
pub fn paac_with_properties(
    sequence: &Sequence,
    properties: &[PropertyTable],
    lamda: usize,
    weight: f64,
) -> Result<Descriptors, DescriptorError> {
    if properties.is_empty() {
        return Err(ParameterError::NoProperties.into());
    }
    check_unique(properties)?;
    check_lag("lamda", lamda, sequence.len())?;
    check_weight(weight)?;

    let standardized = properties
        .iter()
        .map(PropertyTable::standardized)
        .collect::<Result<Vec<_>, _>>()?;

    let factors = (1..=lamda)
        .map(|lag| {
            let correlations = sequence.lagged_pairs(lag).map(|(a, b)| {
                let squared_differences = standardized
                    .iter()
                    .map(|table| (table.get(a) - table.get(b)).powi(2));

                squared_differences.sum::<f64>() / standardized.len() as f64
            });

            correlations.sum::<f64>() / (sequence.len() - lag) as f64
        })
        .collect::<Vec<_>>();

    Ok(pseudo_composition(sequence, "PAAC", &factors, weight))
}

/// Returns the type II, or amphiphilic, pseudo amino acid composition of a sequence.
///
/// For each lag `d`, two correlation factors are computed: the average product of the
/// standardized hydrophobicity of residues `d` positions apart, followed by the same for
/// hydrophilicity.
///
/// The `20 + 2 * lamda` descriptors are labelled `APAAC1`, `APAAC2`, and so on: first the residue
/// composition terms in canonical order, then the correlation terms by increasing lag.
///
/// # Errors
///
/// If `lamda` is zero or not less than the sequence length, or if the weight is negative or not
/// finite.
pub fn apaac(
    sequence: &Sequence,
    lamda: usize,
    weight: f64,
) -> Result<Descriptors, DescriptorError> {
    check_lag("lamda", lamda, sequence.len())?;
    check_weight(weight)?;

    let hydrophobicity =
        PropertyTable::new("HydrophobicityTanford", builtin::HYDROPHOBICITY_TANFORD)
            .standardized()?;
    let hydrophilicity =
        PropertyTable::new("HydrophilicityHoppWoods", builtin::HYDROPHILICITY_HOPP_WOODS)
            .standardized()?;

    let factors = (1..=lamda)
        .flat_map(|lag| {
            let pairs = (sequence.len() - lag) as f64;

            [&hydrophobicity, &hydrophilicity].map(|table| {
                sequence
                    .lagged_pairs(lag)
                    .map(|(a, b)| table.get(a) * table.get(b))
                    .sum::<f64>()
                    / pairs
            })
        })
        .collect::<Vec<_>>();

    Ok(pseudo_composition(sequence, "APAAC", &factors, weight))
}

fn pseudo_composition(
    sequence: &Sequence,
    stem: &str,
    factors: &[f64],
    weight: f64,
) -> Descriptors {
    let denominator = 1.0 + weight * factors.iter().sum::<f64>();

    let residue_terms = frequencies(sequence).map(|frequency| frequency * 100.0 / denominator);
    let correlation_terms = factors
        .iter()
        .map(|factor| weight * factor / denominator * 100.0);

    residue_terms
        .into_iter()
        .chain(correlation_terms)
        .enumerate()
        .map(|(i, value)| (format!("{stem}{}", i + 1), value))
        .collect()
}
