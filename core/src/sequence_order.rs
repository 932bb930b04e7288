//! Sequence-order-coupling numbers and quasi-sequence-order descriptors.

use crate::{
    composition::frequencies,
    distance::DistanceMatrix,
    error::{check_lag, check_weight, ParameterError},
    Descriptors, Sequence,
};

/// The default maximum lag.
pub const DEFAULT_MAXLAG: usize = 30;

/// The default weight of sequence-order terms in quasi-sequence-order descriptors.
pub const DEFAULT_WEIGHT: f64 = 0.1;

/// Returns the sequence-order-coupling numbers of a sequence for lags `1..=maxlag`.
///
/// The coupling number at lag `d` is the sum of squared distances between residues `d` positions
/// apart. Descriptors are labelled by the matrix stem followed by the lag, e.g. `tausw1`.
///
/// # Errors
///
/// If `maxlag` is zero or not less than the sequence length.
pub fn socn(
    sequence: &Sequence,
    matrix: &DistanceMatrix,
    maxlag: usize,
) -> Result<Descriptors, ParameterError> {
    check_lag("maxlag", maxlag, sequence.len())?;

    Ok(coupling_numbers(sequence, matrix, maxlag)
        .into_iter()
        .enumerate()
        .map(|(i, tau)| (format!("{}{}", matrix.socn_stem(), i + 1), tau))
        .collect())
}

/// Returns the quasi-sequence-order descriptors of a sequence.
///
/// The first 20 descriptors are the residue frequencies in canonical order, and the following
/// `maxlag` descriptors are the weighted sequence-order-coupling numbers. All are divided by
/// `1 + weight * sum(tau)`, so that they sum to one. Descriptors are labelled by the matrix stem
/// followed by the 1-based index, e.g. `QSOSW1`.
///
/// # Errors
///
/// If `maxlag` is zero or not less than the sequence length, or if the weight is negative or not
/// finite.
pub fn qso(
    sequence: &Sequence,
    matrix: &DistanceMatrix,
    maxlag: usize,
    weight: f64,
) -> Result<Descriptors, ParameterError> {
    check_lag("maxlag", maxlag, sequence.len())?;
    check_weight(weight)?;

    let taus = coupling_numbers(sequence, matrix, maxlag);
    let denominator = 1.0 + weight * taus.iter().sum::<f64>();

    let residue_terms = frequencies(sequence).map(|frequency| frequency / denominator);
    let order_terms = taus.iter().map(|tau| weight * tau / denominator);

    Ok(residue_terms
        .into_iter()
        .chain(order_terms)
        .enumerate()
        .map(|(i, value)| (format!("{}{}", matrix.qso_stem(), i + 1), value))
        .collect())
}

fn coupling_numbers(sequence: &Sequence, matrix: &DistanceMatrix, maxlag: usize) -> Vec<f64> {
    (1..=maxlag)
        .map(|lag| {
            sequence
                .lagged_pairs(lag)
                .map(|(a, b)| matrix.get(a, b).powi(2))
                .sum::<f64>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{distance::Distance, sequence::tests::seq};

    #[test]
    fn test_socn_grantham() {
        let socn = socn(&seq("ARN"), Distance::Grantham.matrix(), 2).unwrap();

        assert_eq!(socn.labels().collect::<Vec<_>>(), ["taugrant1", "taugrant2"]);
        assert_approx_eq!(socn["taugrant1"], 112f64.powi(2) + 86f64.powi(2));
        assert_approx_eq!(socn["taugrant2"], 111f64.powi(2));
    }

    #[test]
    fn test_socn_schneider_wrede_is_directional() {
        let matrix = Distance::SchneiderWrede.matrix();

        assert_approx_eq!(socn(&seq("AC"), matrix, 1).unwrap()["tausw1"], 0.112f64.powi(2));
        assert_approx_eq!(socn(&seq("CA"), matrix, 1).unwrap()["tausw1"], 0.114f64.powi(2));
    }

    #[test]
    fn test_qso_grantham() {
        let qso = qso(&seq("ARN"), Distance::Grantham.matrix(), 2, 0.1).unwrap();

        assert_eq!(qso.len(), 22);
        assert_eq!(qso.labels().next(), Some("QSOgrant1"));
        assert_eq!(qso.labels().last(), Some("QSOgrant22"));

        let denominator = 1.0 + 0.1 * (19940.0 + 12321.0);
        assert_approx_eq!(qso["QSOgrant1"], (1.0 / 3.0) / denominator);
        assert_approx_eq!(qso["QSOgrant5"], 0.0);
        assert_approx_eq!(qso["QSOgrant21"], 1994.0 / denominator);
        assert_approx_eq!(qso["QSOgrant22"], 1232.1 / denominator);
        assert_approx_eq!(qso.sum(), 1.0);
    }

    #[test]
    fn test_qso_zero_weight_is_composition() {
        let qso = qso(&seq("ADGCGVPKAV"), Distance::SchneiderWrede.matrix(), 5, 0.0).unwrap();

        assert_approx_eq!(qso["QSOSW1"], 0.2);
        assert_approx_eq!(qso["QSOSW21"], 0.0);
    }

    #[test]
    fn test_maxlag_equal_to_length() {
        let matrix = Distance::Grantham.matrix();

        assert!(matches!(
            socn(&seq("ARN"), matrix, 3),
            Err(ParameterError::Lag { lag: 3, length: 3, .. })
        ));
        assert!(qso(&seq("ARN"), matrix, 3, 0.1).is_err());
    }

    #[test]
    fn test_negative_weight() {
        assert_eq!(
            qso(&seq("ARN"), Distance::Grantham.matrix(), 1, -1.0),
            Err(ParameterError::Weight { weight: -1.0 })
        );
    }
}
