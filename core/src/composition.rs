//! k-mer composition descriptors.

use crate::{
    error::ParameterError,
    residue::{Residue, ALPHABET, N},
    Descriptors, Sequence,
};

/// The largest supported k-mer size.
pub const MAX_K: usize = 3;

/// Returns the amino acid composition (AAC) of a sequence.
///
/// See [`composition`].
pub fn aac(sequence: &Sequence) -> Descriptors {
    kmer_composition(sequence, 1)
}

/// Returns the dipeptide composition (DPC) of a sequence.
///
/// See [`composition`].
pub fn dpc(sequence: &Sequence) -> Result<Descriptors, ParameterError> {
    composition(sequence, 2)
}

/// Returns the tripeptide composition (TPC) of a sequence.
///
/// See [`composition`].
pub fn tpc(sequence: &Sequence) -> Result<Descriptors, ParameterError> {
    composition(sequence, 3)
}

/// Returns the k-mer composition of a sequence.
///
/// Every k-mer over the standard residues is labelled by its one-letter codes, and labels are
/// ordered lexicographically in canonical residue order. The value of each k-mer is the
/// percentage of the `L - k + 1` overlapping windows of width `k` that match it.
///
/// # Errors
///
/// If `k` is not 1, 2, or 3, or if the sequence is shorter than `k`.
pub fn composition(sequence: &Sequence, k: usize) -> Result<Descriptors, ParameterError> {
    if !(1..=MAX_K).contains(&k) {
        return Err(ParameterError::KmerSize { k });
    }

    if sequence.len() < k {
        return Err(ParameterError::SequenceShorterThanKmer {
            k,
            length: sequence.len(),
        });
    }

    Ok(kmer_composition(sequence, k))
}

/// Returns the residue frequencies of a sequence as fractions in canonical residue order.
pub(crate) fn frequencies(sequence: &Sequence) -> [f64; N] {
    let total = sequence.len() as f64;

    sequence.residue_counts().map(|count| count as f64 / total)
}

fn kmer_composition(sequence: &Sequence, k: usize) -> Descriptors {
    let mut counts = vec![0usize; N.pow(k as u32)];
    sequence
        .as_slice()
        .windows(k)
        .for_each(|kmer| counts[kmer_index(kmer)] += 1);

    let windows = (sequence.len() + 1 - k) as f64;

    counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| (kmer_label(index, k), count as f64 / windows * 100.0))
        .collect()
}

fn kmer_index(kmer: &[Residue]) -> usize {
    kmer.iter().fold(0, |index, residue| index * N + residue.index())
}

fn kmer_label(index: usize, k: usize) -> String {
    (0..k)
        .rev()
        .map(|position| char::from(ALPHABET[index / N.pow(position as u32) % N]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::sequence::tests::seq;

    #[test]
    fn test_aac_labels_and_values() {
        let aac = aac(&seq("ADGCGVPKAV"));

        assert_eq!(aac.len(), 20);
        assert_eq!(aac.labels().collect::<String>(), "ARNDCQEGHILKMFPSTWYV");
        assert_approx_eq!(aac["A"], 20.0);
        assert_approx_eq!(aac["G"], 20.0);
        assert_approx_eq!(aac["D"], 10.0);
        assert_approx_eq!(aac["W"], 0.0);
    }

    #[test]
    fn test_aac_sums_to_hundred() {
        for s in ["A", "ADGCGVPKAV", "MKVLAAGIVGALLLSTPAWA"] {
            assert_approx_eq!(aac(&seq(s)).sum(), 100.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_dpc_overlapping_windows() {
        let dpc = dpc(&seq("AAAR")).unwrap();

        assert_eq!(dpc.len(), 400);
        assert_eq!(dpc.labels().take(3).collect::<Vec<_>>(), ["AA", "AR", "AN"]);
        assert_approx_eq!(dpc["AA"], 200.0 / 3.0);
        assert_approx_eq!(dpc["AR"], 100.0 / 3.0);
        assert_approx_eq!(dpc.sum(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_tpc_single_window() {
        let tpc = tpc(&seq("AAA")).unwrap();

        assert_eq!(tpc.len(), 8000);
        assert_eq!(tpc.labels().last(), Some("VVV"));
        assert_eq!(tpc.values().filter(|&v| v > 0.0).count(), 1);
        assert_approx_eq!(tpc["AAA"], 100.0);
    }

    #[test]
    fn test_k_equal_to_length() {
        let dpc = dpc(&seq("WY")).unwrap();

        assert_eq!(dpc.values().filter(|&v| v > 0.0).count(), 1);
        assert_approx_eq!(dpc["WY"], 100.0);
    }

    #[test]
    fn test_sequence_shorter_than_k() {
        assert_eq!(
            tpc(&seq("AR")),
            Err(ParameterError::SequenceShorterThanKmer { k: 3, length: 2 })
        );
    }

    #[test]
    fn test_unsupported_k() {
        let sequence = seq("ARNDC");

        assert_eq!(
            composition(&sequence, 0),
            Err(ParameterError::KmerSize { k: 0 })
        );
        assert_eq!(
            composition(&sequence, 4),
            Err(ParameterError::KmerSize { k: 4 })
        );
    }

    #[test]
    fn test_frequencies() {
        let frequencies = frequencies(&seq("ADGCGVPKAV"));

        assert_approx_eq!(frequencies[0], 0.2);
        assert_approx_eq!(frequencies.iter().sum::<f64>(), 1.0);
    }
}
