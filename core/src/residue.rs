//! The 20 standard amino acid residues.

use std::fmt;

/// The number of standard residues.
pub const N: usize = 20;

/// One-letter codes of the standard residues in canonical order.
///
/// Every per-residue table and every per-residue block of descriptors follows this order.
pub const ALPHABET: [u8; N] = *b"ARNDCQEGHILKMFPSTWYV";

/// A standard amino acid residue.
///
/// Internally, a residue is stored as its index in [`ALPHABET`], so that it can be used directly
/// to index into per-residue tables.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Residue(u8);

impl Residue {
    /// Returns the residue with the provided one-letter code, if any.
    ///
    /// Only upper-case codes are recognised.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        let index = match byte {
            b'A' => 0,
            b'R' => 1,
            b'N' => 2,
            b'D' => 3,
            b'C' => 4,
            b'Q' => 5,
            b'E' => 6,
            b'G' => 7,
            b'H' => 8,
            b'I' => 9,
            b'L' => 10,
            b'K' => 11,
            b'M' => 12,
            b'F' => 13,
            b'P' => 14,
            b'S' => 15,
            b'T' => 16,
            b'W' => 17,
            b'Y' => 18,
            b'V' => 19,
            _ => return None,
        };

        Some(Self(index))
    }

    /// Returns the residue with the provided one-letter code, if any.
    pub fn from_char(c: char) -> Option<Self> {
        u8::try_from(c).ok().and_then(Self::from_byte)
    }

    /// Returns the residue at the provided index in [`ALPHABET`], if any.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < N).then(|| Self(index as u8))
    }

    /// Returns the index of the residue in [`ALPHABET`].
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the one-letter code of the residue.
    pub fn as_byte(self) -> u8 {
        ALPHABET[self.index()]
    }

    /// Returns the one-letter code of the residue.
    pub fn as_char(self) -> char {
        char::from(self.as_byte())
    }

    /// Returns an iterator over all residues in canonical order.
    pub fn iter() -> impl Iterator<Item = Self> + Clone {
        (0..N as u8).map(Self)
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte_roundtrips_alphabet() {
        for (i, &byte) in ALPHABET.iter().enumerate() {
            let residue = Residue::from_byte(byte).unwrap();
            assert_eq!(residue.index(), i);
            assert_eq!(residue.as_byte(), byte);
        }
    }

    #[test]
    fn test_from_byte_rejects_non_standard() {
        for byte in [b'B', b'J', b'O', b'U', b'X', b'Z', b'a', b'*', b'-'] {
            assert_eq!(Residue::from_byte(byte), None);
        }
    }

    #[test]
    fn test_iter_follows_alphabet() {
        let codes = Residue::iter().map(Residue::as_char).collect::<String>();
        assert_eq!(codes, "ARNDCQEGHILKMFPSTWYV");
    }
}
