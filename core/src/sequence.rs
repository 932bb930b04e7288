//! Validated protein sequences.

use std::{fmt, str::FromStr};

use crate::{error::InvalidSequenceError, residue::Residue};

/// A non-empty protein sequence over the 20 standard residues.
///
/// A sequence can only be constructed through validation, so every descriptor calculation can
/// rely on all residues being present in every per-residue table.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Sequence(Vec<Residue>);

impl Sequence {
    /// Creates a new sequence from one-letter codes.
    ///
    /// Only the upper-case one-letter codes of the 20 standard residues are accepted.
    pub fn new<B>(raw: B) -> Result<Self, InvalidSequenceError>
    where
        B: AsRef<[u8]>,
    {
        let raw = raw.as_ref();

        if raw.is_empty() {
            return Err(InvalidSequenceError::Empty);
        }

        raw.iter()
            .enumerate()
            .map(|(i, &byte)| {
                Residue::from_byte(byte).ok_or(InvalidSequenceError::InvalidSymbol {
                    symbol: char::from(byte),
                    position: i + 1,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Returns the residues of the sequence.
    pub fn as_slice(&self) -> &[Residue] {
        &self.0
    }

    /// Returns the number of residues in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `false`, since a sequence always contains at least one residue.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the residues of the sequence.
    pub fn iter(&self) -> impl Iterator<Item = Residue> + '_ {
        self.0.iter().copied()
    }

    /// Returns an iterator over the residue pairs separated by `lag` positions.
    ///
    /// For a sequence of length L, this yields the L - lag pairs `(s[i], s[i + lag])`.
    pub fn lagged_pairs(&self, lag: usize) -> impl Iterator<Item = (Residue, Residue)> + '_ {
        self.0.iter().zip(self.0.iter().skip(lag)).map(|(&a, &b)| (a, b))
    }

    /// Returns the number of occurrences of each residue, indexed by canonical residue order.
    pub fn residue_counts(&self) -> [usize; crate::residue::N] {
        let mut counts = [0; crate::residue::N];
        self.iter().for_each(|residue| counts[residue.index()] += 1);
        counts
    }

    /// Returns every window of length `2 * window + 1` centred on an occurrence of `centre`.
    ///
    /// Occurrences too close to either end of the sequence for the full window to fit are
    /// skipped. Windows are returned in order of occurrence.
    pub fn windows_around(&self, centre: Residue, window: usize) -> Vec<Sequence> {
        let width = 2 * window + 1;
        if width > self.len() {
            return Vec::new();
        }

        self.0
            .windows(width)
            .filter(|slice| slice[window] == centre)
            .map(|slice| Self(slice.to_vec()))
            .collect()
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|residue| write!(f, "{residue}"))
    }
}
