//! Built-in property scales.
//!
//! All values are listed in canonical residue order `ARNDCQEGHILKMFPSTWYV`, ten per line as in
//! AAindex1 value blocks (`A..I`, then `L..V`).

use crate::residue::N;

use super::PropertyTable;

/// Hydrophobicity scale used by the autocorrelation descriptors.
#[rustfmt::skip]
pub const HYDROPHOBICITY: [f64; N] = [
    0.02, -0.42, -0.77, -1.04, 0.77, -1.10, -1.14, -0.80, 0.26, 1.81,
    1.14, -0.41, 1.00, 1.35, -0.09, -0.97, -0.77, 1.71, 1.11, 1.13,
];

/// Average flexibility indices.
#[rustfmt::skip]
pub const AV_FLEXIBILITY: [f64; N] = [
    0.357, 0.529, 0.463, 0.511, 0.346, 0.493, 0.497, 0.544, 0.323, 0.462,
    0.365, 0.466, 0.295, 0.314, 0.509, 0.507, 0.444, 0.305, 0.420, 0.386,
];

/// Polarizability parameters.
#[rustfmt::skip]
pub const POLARIZABILITY: [f64; N] = [
    0.046, 0.291, 0.134, 0.105, 0.128, 0.180, 0.151, 0.000, 0.230, 0.186,
    0.186, 0.219, 0.221, 0.290, 0.131, 0.062, 0.108, 0.409, 0.298, 0.140,
];

/// Free energy of solution in water.
#[rustfmt::skip]
pub const FREE_ENERGY: [f64; N] = [
    -0.368, -1.03, 0.0, 2.06, 4.53, 0.731, 1.77, -0.525, 0.0, 0.791,
    1.07, 0.0, 0.656, 1.06, -2.24, -0.524, 0.0, 1.60, 4.91, 0.401,
];

/// Accessible surface area in tripeptides.
#[rustfmt::skip]
pub const RESIDUE_ASA: [f64; N] = [
    115.0, 225.0, 160.0, 150.0, 135.0, 180.0, 190.0, 75.0, 195.0, 175.0,
    170.0, 200.0, 185.0, 210.0, 145.0, 115.0, 140.0, 255.0, 230.0, 155.0,
];

/// Residue volume.
#[rustfmt::skip]
pub const RESIDUE_VOL: [f64; N] = [
    52.6, 109.1, 75.7, 68.4, 68.3, 89.7, 84.7, 36.3, 91.9, 102.0,
    102.0, 105.1, 97.7, 113.9, 73.6, 54.9, 71.2, 135.4, 116.2, 85.1,
];

/// Steric parameters.
#[rustfmt::skip]
pub const STERIC: [f64; N] = [
    0.52, 0.68, 0.76, 0.76, 0.62, 0.68, 0.68, 0.00, 0.70, 1.02,
    0.98, 0.68, 0.78, 0.70, 0.36, 0.53, 0.50, 0.70, 0.70, 0.76,
];

/// Relative mutability.
#[rustfmt::skip]
pub const MUTABILITY: [f64; N] = [
    100.0, 65.0, 134.0, 106.0, 20.0, 93.0, 102.0, 49.0, 66.0, 96.0,
    40.0, -56.0, 94.0, 41.0, 56.0, 120.0, 97.0, 18.0, 41.0, 74.0,
];

/// Tanford hydrophobicity, used by the pseudo-composition descriptors.
#[rustfmt::skip]
pub const HYDROPHOBICITY_TANFORD: [f64; N] = [
    0.62, -2.53, -0.78, -0.90, 0.29, -0.85, -0.74, 0.48, -0.40, 1.38,
    1.06, -1.50, 0.64, 1.19, 0.12, -0.18, -0.05, 0.81, 0.26, 1.08,
];

/// Hopp-Woods hydrophilicity, used by the pseudo-composition descriptors.
#[rustfmt::skip]
pub const HYDROPHILICITY_HOPP_WOODS: [f64; N] = [
    -0.5, 3.0, 0.2, 3.0, -1.0, 0.2, 3.0, 0.0, -0.5, -1.8,
    -1.8, 3.0, -1.3, -2.5, 0.0, 0.3, -0.4, -3.4, -2.3, -1.5,
];

/// Side-chain mass, used by the pseudo-composition descriptors.
#[rustfmt::skip]
pub const RESIDUE_MASS: [f64; N] = [
    15.0, 101.0, 58.0, 59.0, 47.0, 72.0, 73.0, 1.0, 82.0, 57.0,
    57.0, 73.0, 75.0, 91.0, 42.0, 31.0, 45.0, 130.0, 107.0, 43.0,
];

/// Names and values of the default autocorrelation properties, in output order.
pub const AUTOCORRELATION: [(&str, [f64; N]); 8] = [
    ("Hydrophobicity", HYDROPHOBICITY),
    ("AvFlexibility", AV_FLEXIBILITY),
    ("Polarizability", POLARIZABILITY),
    ("FreeEnergy", FREE_ENERGY),
    ("ResidueASA", RESIDUE_ASA),
    ("ResidueVol", RESIDUE_VOL),
    ("Steric", STERIC),
    ("Mutability", MUTABILITY),
];

/// Names and values of the pseudo-composition properties.
pub const PSEUDO: [(&str, [f64; N]); 3] = [
    ("HydrophobicityTanford", HYDROPHOBICITY_TANFORD),
    ("HydrophilicityHoppWoods", HYDROPHILICITY_HOPP_WOODS),
    ("ResidueMass", RESIDUE_MASS),
];

/// Returns the default autocorrelation property tables.
pub fn autocorrelation() -> Vec<PropertyTable> {
    tables(&AUTOCORRELATION)
}

/// Returns the hydrophobicity, hydrophilicity, and side-chain mass tables used by PAAC.
pub fn pseudo() -> Vec<PropertyTable> {
    tables(&PSEUDO)
}

fn tables(entries: &[(&str, [f64; N])]) -> Vec<PropertyTable> {
    entries
        .iter()
        .map(|&(name, values)| PropertyTable::new(name, values))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_standardize() {
        for table in autocorrelation().iter().chain(pseudo().iter()) {
            assert!(table.standardized().is_ok(), "{}", table.name());
        }
    }

    #[test]
    fn test_builtin_names_unique() {
        let mut names = AUTOCORRELATION
            .iter()
            .chain(PSEUDO.iter())
            .map(|(name, _)| *name)
            .collect::<Vec<_>>();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), 11);
    }
}
