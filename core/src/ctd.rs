//! Composition, transition, and distribution (CTD) descriptors.
//!
//! Each residue of a sequence is assigned to one of three classes for each
//! [`StructuralProperty`], and the resulting class sequences are summarised.

use crate::{
    classification::{StructuralProperty, CLASSES},
    Descriptors, Sequence,
};

/// Unordered class pairs summarised by transition descriptors.
const PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// Percentiles of class occurrences summarised by distribution descriptors.
const PERCENTILES: [usize; 5] = [0, 25, 50, 75, 100];

/// Returns all CTD descriptors of a sequence.
///
/// This is the concatenation of [`composition`], [`transition`], and [`distribution`].
pub fn ctd(sequence: &Sequence) -> Descriptors {
    let mut descriptors = composition(sequence);
    descriptors.append(transition(sequence));
    descriptors.append(distribution(sequence));
    descriptors
}

/// Returns the fraction of residues in each class, for each structural property.
///
/// Descriptors are labelled `_{Property}C{class}`.
pub fn composition(sequence: &Sequence) -> Descriptors {
    StructuralProperty::ALL
        .iter()
        .flat_map(|property| {
            let classes = classes(sequence, property);
            let total = classes.len() as f64;

            (0..CLASSES).map(move |c| {
                let count = classes.iter().filter(|&&class| class == c).count();
                (label(property, 'C', c + 1), count as f64 / total)
            })
        })
        .collect()
}

/// Returns the fraction of adjacent residue pairs whose classes form each unordered class pair,
/// for each structural property.
///
/// Descriptors are labelled `_{Property}T{class}{class}`. A sequence of length 1 has no adjacent
/// pairs, and all its transitions are zero.
pub fn transition(sequence: &Sequence) -> Descriptors {
    StructuralProperty::ALL
        .iter()
        .flat_map(|property| {
            let classes = classes(sequence, property);
            let total = classes.len().saturating_sub(1);

            PAIRS.iter().map(move |&(a, b)| {
                let count = classes
                    .windows(2)
                    .filter(|pair| (pair[0], pair[1]) == (a, b) || (pair[0], pair[1]) == (b, a))
                    .count();

                let value = if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                };

                (label(property, 'T', (a + 1) * 10 + b + 1), value)
            })
        })
        .collect()
}

/// Returns the relative positions of the first, 25%, 50%, 75%, and last occurrences of each class,
/// for each structural property.
///
/// The occurrence at percentile `q` of the `n` occurrences of a class is the one at 1-based rank
/// `ceil(q * n)`. Its position is reported as a percentage of the sequence length. If a class
/// does not occur in the sequence, all its values are zero.
///
/// Descriptors are labelled `_{Property}D{class}{percentile}`, with percentiles formatted
/// `001`, `025`, `050`, `075`, and `100`.
pub fn distribution(sequence: &Sequence) -> Descriptors {
    let length = sequence.len() as f64;

    let mut descriptors = Descriptors::with_capacity(StructuralProperty::ALL.len() * CLASSES * 5);

    for property in StructuralProperty::ALL.iter() {
        let classes = classes(sequence, property);

        for c in 0..CLASSES {
            let positions = classes
                .iter()
                .enumerate()
                .filter(|&(_, &class)| class == c)
                .map(|(i, _)| i + 1)
                .collect::<Vec<_>>();
            let n = positions.len();

            for percentile in PERCENTILES {
                let value = if n == 0 {
                    0.0
                } else {
                    let rank = ((percentile * n + 99) / 100).max(1);
                    positions[rank - 1] as f64 / length * 100.0
                };

                let suffix = format!("{}{:03}", c + 1, percentile.max(1));
                descriptors.insert(format!("_{}D{suffix}", property.name()), value);
            }
        }
    }

    descriptors
}

fn classes(sequence: &Sequence, property: &StructuralProperty) -> Vec<usize> {
    sequence
        .iter()
        .map(|residue| property.class(residue))
        .collect()
}

fn label(property: &StructuralProperty, statistic: char, suffix: usize) -> String {
    format!("_{}{statistic}{suffix}", property.name())
}
