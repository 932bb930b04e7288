//! Three-class partitions of the standard residues by structural property.

use std::fmt;

use crate::residue::{Residue, N};

/// The number of classes in each partition.
pub const CLASSES: usize = 3;

/// A structural property partitioning the standard residues into three ordinal classes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StructuralProperty {
    /// Polar, neutral, hydrophobic.
    Hydrophobicity,
    /// Normalized van der Waals volume, from small to large.
    NormalizedVDWV,
    /// Polarity, from low to high.
    Polarity,
    /// Positive, neutral, negative.
    Charge,
    /// Helix, strand, coil.
    SecondaryStr,
    /// Buried, exposed, intermediate.
    SolventAccessibility,
    /// Polarizability, from low to high.
    Polarizability,
}

impl StructuralProperty {
    /// All structural properties, in output order.
    pub const ALL: [Self; 7] = [
        Self::Hydrophobicity,
        Self::NormalizedVDWV,
        Self::Polarity,
        Self::Charge,
        Self::SecondaryStr,
        Self::SolventAccessibility,
        Self::Polarizability,
    ];

    /// Returns the name used in descriptor labels.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hydrophobicity => "Hydrophobicity",
            Self::NormalizedVDWV => "NormalizedVDWV",
            Self::Polarity => "Polarity",
            Self::Charge => "Charge",
            Self::SecondaryStr => "SecondaryStr",
            Self::SolventAccessibility => "SolventAccessibility",
            Self::Polarizability => "Polarizability",
        }
    }

    /// Returns the residues in each of the three classes, as one-letter codes.
    pub fn groups(&self) -> [&'static str; CLASSES] {
        self.definition().0
    }

    /// Returns the zero-based class of a residue.
    #[inline]
    pub fn class(&self, residue: Residue) -> usize {
        self.table()[residue.index()] as usize
    }

    fn table(&self) -> &'static [u8; N] {
        &self.definition().1
    }

    fn definition(&self) -> &'static Partition {
        match self {
            Self::Hydrophobicity => &HYDROPHOBICITY,
            Self::NormalizedVDWV => &NORMALIZED_VDWV,
            Self::Polarity => &POLARITY,
            Self::Charge => &CHARGE,
            Self::SecondaryStr => &SECONDARY_STR,
            Self::SolventAccessibility => &SOLVENT_ACCESSIBILITY,
            Self::Polarizability => &POLARIZABILITY,
        }
    }
}

impl fmt::Display for StructuralProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Partition = ([&'static str; CLASSES], [u8; N]);

static HYDROPHOBICITY: Partition = partition(["RKEDQN", "GASTPHY", "CLVIMFW"]);
static NORMALIZED_VDWV: Partition = partition(["GASTPDC", "NVEQIL", "MHKFRYW"]);
static POLARITY: Partition = partition(["LIFWCMVY", "PATGS", "HQRKNED"]);
static CHARGE: Partition = partition(["KR", "ANCQGHILMFPSTWYV", "DE"]);
static SECONDARY_STR: Partition = partition(["EALMQKRH", "VIYCWFT", "GNPSD"]);
static SOLVENT_ACCESSIBILITY: Partition = partition(["ALFCGIVW", "RKQEND", "MPSTHY"]);
static POLARIZABILITY: Partition = partition(["GASDT", "CPNVEQIL", "KMHFRYW"]);

/// Builds a residue-indexed class table at compile time.
///
/// Panics during compilation unless the groups partition the standard residues.
const fn partition(groups: [&'static str; CLASSES]) -> Partition {
    const UNASSIGNED: u8 = u8::MAX;

    let mut table = [UNASSIGNED; N];

    let mut class = 0;
    while class < CLASSES {
        let group = groups[class].as_bytes();
        let mut i = 0;
        while i < group.len() {
            match Residue::from_byte(group[i]) {
                Some(residue) if table[residue.index()] == UNASSIGNED => {
                    table[residue.index()] = class as u8
                }
                Some(_) => panic!("residue assigned to more than one class"),
                None => panic!("non-standard residue in class"),
            }
            i += 1;
        }
        class += 1;
    }

    let mut i = 0;
    while i < N {
        if table[i] == UNASSIGNED {
            panic!("residue not assigned to any class");
        }
        i += 1;
    }

    (groups, table)
}
