//! Pairwise residue distance matrices.

use std::borrow::Cow;

use crate::residue::{Residue, N};

/// A 20x20 table of pairwise residue distances.
///
/// Rows and columns follow canonical residue order. The table is indexed as (first residue,
/// second residue) and need not be symmetric.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    name: Cow<'static, str>,
    socn_stem: Cow<'static, str>,
    qso_stem: Cow<'static, str>,
    values: [[f64; N]; N],
}

impl DistanceMatrix {
    /// Creates a new distance matrix with rows and columns in canonical residue order.
    ///
    /// Descriptors computed from the matrix are labelled `tau{name}{d}` and `QSO{name}{i}`.
    pub fn new<S>(name: S, values: [[f64; N]; N]) -> Self
    where
        S: Into<String>,
    {
        let name = Cow::Owned(name.into());

        Self {
            socn_stem: Cow::Owned(format!("tau{name}")),
            qso_stem: Cow::Owned(format!("QSO{name}")),
            name,
            values,
        }
    }

    /// Returns the name of the matrix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the label prefix of sequence-order-coupling numbers.
    pub fn socn_stem(&self) -> &str {
        &self.socn_stem
    }

    /// Returns the label prefix of quasi-sequence-order descriptors.
    pub fn qso_stem(&self) -> &str {
        &self.qso_stem
    }

    /// Returns the rows of the matrix.
    pub fn values(&self) -> &[[f64; N]; N] {
        &self.values
    }

    /// Returns the distance from `from` to `to`.
    #[inline]
    pub fn get(&self, from: Residue, to: Residue) -> f64 {
        self.values[from.index()][to.index()]
    }

    /// Returns `true` if the matrix equals its transpose.
    pub fn is_symmetric(&self) -> bool {
        (0..N).all(|i| (0..i).all(|j| self.values[i][j] == self.values[j][i]))
    }
}

/// A built-in distance matrix.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Distance {
    /// The Schneider-Wrede physicochemical distance matrix.
    SchneiderWrede,
    /// The Grantham chemical distance matrix.
    Grantham,
}

impl Distance {
    /// All built-in distance matrices, in output order.
    pub const ALL: [Self; 2] = [Self::SchneiderWrede, Self::Grantham];

    /// Returns the distance matrix.
    pub fn matrix(&self) -> &'static DistanceMatrix {
        match self {
            Self::SchneiderWrede => &SCHNEIDER_WREDE,
            Self::Grantham => &GRANTHAM,
        }
    }
}

// One row per residue, ten values per line
#[rustfmt::skip]
static SCHNEIDER_WREDE: DistanceMatrix = DistanceMatrix {
    name: Cow::Borrowed("SchneiderWrede"),
    socn_stem: Cow::Borrowed("tausw"),
    qso_stem: Cow::Borrowed("QSOSW"),
    values: [
        // A
        [
            0.0, 1.0, 0.318, 0.819, 0.112, 0.372, 0.827, 0.208, 0.696, 0.407,
            0.406, 0.891, 0.379, 0.54, 0.191, 0.094, 0.22, 0.739, 0.552, 0.273,
        ],
        // R
        [
            0.919, 0.0, 0.69, 0.305, 0.905, 0.668, 0.225, 0.928, 0.498, 0.929,
            0.92, 0.141, 0.908, 0.977, 0.796, 0.86, 0.808, 1.0, 0.859, 0.914,
        ],
        // N
        [
            0.424, 1.0, 0.0, 0.838, 0.425, 0.175, 0.835, 0.512, 0.78, 0.615,
            0.603, 0.891, 0.588, 0.766, 0.266, 0.361, 0.368, 0.945, 0.641, 0.503,
        ],
        // D
        [
            0.729, 0.295, 0.56, 0.0, 0.742, 0.584, 0.124, 0.697, 0.435, 0.847,
            0.841, 0.249, 0.819, 0.924, 0.657, 0.667, 0.649, 1.0, 0.836, 0.797,
        ],
        // C
        [
            0.114, 1.0, 0.324, 0.847, 0.0, 0.341, 0.838, 0.32, 0.66, 0.304,
            0.301, 0.887, 0.277, 0.437, 0.157, 0.176, 0.233, 0.639, 0.457, 0.167,
        ],
        // Q
        [
            0.512, 1.0, 0.27, 0.903, 0.462, 0.0, 0.861, 0.504, 0.583, 0.491,
            0.455, 0.896, 0.406, 0.618, 0.272, 0.332, 0.303, 0.835, 0.525, 0.406,
        ],
        // E
        [
            0.79, 0.234, 0.599, 0.133, 0.788, 0.598, 0.0, 0.779, 0.406, 0.86,
            0.854, 0.143, 0.83, 0.932, 0.688, 0.726, 0.682, 1.0, 0.837, 0.824,
        ],
        // G
        [
            0.206, 1.0, 0.381, 0.776, 0.312, 0.467, 0.807, 0.0, 0.769, 0.592,
            0.591, 0.894, 0.557, 0.727, 0.323, 0.158, 0.272, 0.923, 0.728, 0.464,
        ],
        // H
        [
            0.896, 0.697, 0.754, 0.629, 0.836, 0.716, 0.547, 1.0, 0.0, 0.848,
            0.842, 0.566, 0.825, 0.907, 0.777, 0.865, 0.834, 0.981, 0.821, 0.831,
        ],
        // I
        [
            0.403, 1.0, 0.457, 0.942, 0.296, 0.383, 0.891, 0.592, 0.652, 0.0,
            0.013, 0.892, 0.057, 0.134, 0.311, 0.443, 0.396, 0.339, 0.213, 0.133,
        ],
        // L
        [
            0.405, 1.0, 0.452, 0.944, 0.296, 0.376, 0.892, 0.596, 0.653, 0.013,
            0.0, 0.893, 0.062, 0.139, 0.309, 0.443, 0.397, 0.341, 0.205, 0.133,
        ],
        // K
        [
            0.889, 0.154, 0.667, 0.279, 0.871, 0.639, 0.149, 0.9, 0.438, 0.899,
            0.892, 0.0, 0.871, 0.957, 0.757, 0.825, 0.759, 1.0, 0.848, 0.882,
        ],
        // M
        [
            0.383, 1.0, 0.447, 0.932, 0.276, 0.372, 0.879, 0.569, 0.648, 0.058,
            0.062, 0.884, 0.0, 0.182, 0.285, 0.417, 0.358, 0.391, 0.255, 0.12,
        ],
        // F
        [
            0.508, 1.0, 0.541, 0.977, 0.405, 0.459, 0.918, 0.69, 0.663, 0.128,
            0.131, 0.903, 0.169, 0.0, 0.42, 0.548, 0.499, 0.207, 0.179, 0.252,
        ],
        // P
        [
            0.22, 1.0, 0.231, 0.852, 0.179, 0.228, 0.831, 0.376, 0.696, 0.363,
            0.357, 0.875, 0.326, 0.515, 0.0, 0.196, 0.161, 0.72, 0.481, 0.244,
        ],
        // S
        [
            0.1, 1.0, 0.289, 0.801, 0.185, 0.358, 0.812, 0.17, 0.718, 0.478,
            0.474, 0.883, 0.44, 0.622, 0.181, 0.0, 0.174, 0.827, 0.615, 0.342,
        ],
        // T
        [
            0.251, 1.0, 0.315, 0.796, 0.261, 0.322, 0.803, 0.312, 0.737, 0.455,
            0.453, 0.866, 0.403, 0.604, 0.159, 0.185, 0.0, 0.816, 0.596, 0.345,
        ],
        // W
        [
            0.658, 0.968, 0.631, 1.0, 0.56, 0.538, 0.931, 0.829, 0.678, 0.305,
            0.304, 0.892, 0.344, 0.196, 0.555, 0.689, 0.638, 0.0, 0.204, 0.418,
        ],
        // Y
        [
            0.587, 0.995, 0.512, 1.0, 0.478, 0.404, 0.932, 0.782, 0.678, 0.23,
            0.219, 0.904, 0.268, 0.202, 0.444, 0.612, 0.557, 0.244, 0.0, 0.328,
        ],
        // V
        [
            0.275, 1.0, 0.38, 0.9, 0.165, 0.339, 0.867, 0.471, 0.649, 0.135,
            0.134, 0.889, 0.12, 0.269, 0.212, 0.322, 0.305, 0.472, 0.31, 0.0,
        ],
    ],
};

#[rustfmt::skip]
static GRANTHAM: DistanceMatrix = DistanceMatrix {
    name: Cow::Borrowed("Grantham"),
    socn_stem: Cow::Borrowed("taugrant"),
    qso_stem: Cow::Borrowed("QSOgrant"),
    values: [
        // A
        [
            0.0, 112.0, 111.0, 126.0, 195.0, 91.0, 107.0, 60.0, 86.0, 94.0,
            96.0, 106.0, 84.0, 113.0, 27.0, 99.0, 58.0, 148.0, 112.0, 64.0,
        ],
        // R
        [
            112.0, 0.0, 86.0, 96.0, 180.0, 43.0, 54.0, 125.0, 29.0, 97.0,
            102.0, 26.0, 91.0, 97.0, 103.0, 110.0, 71.0, 101.0, 77.0, 96.0,
        ],
        // N
        [
            111.0, 86.0, 0.0, 23.0, 139.0, 46.0, 42.0, 80.0, 68.0, 149.0,
            153.0, 94.0, 142.0, 158.0, 91.0, 46.0, 65.0, 174.0, 143.0, 133.0,
        ],
        // D
        [
            126.0, 96.0, 23.0, 0.0, 154.0, 61.0, 45.0, 94.0, 81.0, 168.0,
            172.0, 101.0, 160.0, 177.0, 108.0, 65.0, 85.0, 181.0, 160.0, 152.0,
        ],
        // C
        [
            195.0, 180.0, 139.0, 154.0, 0.0, 154.0, 170.0, 159.0, 174.0, 198.0,
            198.0, 202.0, 196.0, 205.0, 169.0, 112.0, 149.0, 215.0, 194.0, 192.0,
        ],
        // Q
        [
            91.0, 43.0, 46.0, 61.0, 154.0, 0.0, 29.0, 87.0, 24.0, 109.0,
            113.0, 53.0, 101.0, 116.0, 76.0, 68.0, 42.0, 130.0, 99.0, 96.0,
        ],
        // E
        [
            107.0, 54.0, 42.0, 45.0, 170.0, 29.0, 0.0, 98.0, 40.0, 134.0,
            138.0, 56.0, 126.0, 140.0, 93.0, 80.0, 65.0, 152.0, 122.0, 121.0,
        ],
        // G
        [
            60.0, 125.0, 80.0, 94.0, 159.0, 87.0, 98.0, 0.0, 98.0, 135.0,
            138.0, 127.0, 127.0, 153.0, 42.0, 56.0, 59.0, 184.0, 147.0, 109.0,
        ],
        // H
        [
            86.0, 29.0, 68.0, 81.0, 174.0, 24.0, 40.0, 98.0, 0.0, 94.0,
            99.0, 32.0, 87.0, 100.0, 77.0, 89.0, 47.0, 115.0, 83.0, 84.0,
        ],
        // I
        [
            94.0, 97.0, 149.0, 168.0, 198.0, 109.0, 134.0, 135.0, 94.0, 0.0,
            5.0, 102.0, 10.0, 21.0, 95.0, 142.0, 89.0, 61.0, 33.0, 29.0,
        ],
        // L
        [
            96.0, 102.0, 153.0, 172.0, 198.0, 113.0, 138.0, 138.0, 99.0, 5.0,
            0.0, 107.0, 15.0, 22.0, 98.0, 145.0, 92.0, 61.0, 36.0, 32.0,
        ],
        // K
        [
            106.0, 26.0, 94.0, 101.0, 202.0, 53.0, 56.0, 127.0, 32.0, 102.0,
            107.0, 0.0, 95.0, 102.0, 103.0, 121.0, 78.0, 110.0, 85.0, 97.0,
        ],
        // M
        [
            84.0, 91.0, 142.0, 160.0, 196.0, 101.0, 126.0, 127.0, 87.0, 10.0,
            15.0, 95.0, 0.0, 28.0, 87.0, 135.0, 81.0, 67.0, 36.0, 21.0,
        ],
        // F
        [
            113.0, 97.0, 158.0, 177.0, 205.0, 116.0, 140.0, 153.0, 100.0, 21.0,
            22.0, 102.0, 28.0, 0.0, 114.0, 155.0, 103.0, 40.0, 22.0, 50.0,
        ],
        // P
        [
            27.0, 103.0, 91.0, 108.0, 169.0, 76.0, 93.0, 42.0, 77.0, 95.0,
            98.0, 103.0, 87.0, 114.0, 0.0, 74.0, 38.0, 147.0, 110.0, 68.0,
        ],
        // S
        [
            99.0, 110.0, 46.0, 65.0, 112.0, 68.0, 80.0, 56.0, 89.0, 142.0,
            145.0, 121.0, 135.0, 155.0, 74.0, 0.0, 58.0, 177.0, 144.0, 124.0,
        ],
        // T
        [
            58.0, 71.0, 65.0, 85.0, 149.0, 42.0, 65.0, 59.0, 47.0, 89.0,
            92.0, 78.0, 81.0, 103.0, 38.0, 58.0, 0.0, 128.0, 92.0, 69.0,
        ],
        // W
        [
            148.0, 101.0, 174.0, 181.0, 215.0, 130.0, 152.0, 184.0, 115.0, 61.0,
            61.0, 110.0, 67.0, 40.0, 147.0, 177.0, 128.0, 0.0, 37.0, 88.0,
        ],
        // Y
        [
            112.0, 77.0, 143.0, 160.0, 194.0, 99.0, 122.0, 147.0, 83.0, 33.0,
            36.0, 85.0, 36.0, 22.0, 110.0, 144.0, 92.0, 37.0, 0.0, 55.0,
        ],
        // V
        [
            64.0, 96.0, 133.0, 152.0, 192.0, 96.0, 121.0, 109.0, 84.0, 29.0,
            32.0, 97.0, 21.0, 50.0, 68.0, 124.0, 69.0, 88.0, 55.0, 0.0,
        ],
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn residue(c: char) -> Residue {
        Residue::from_char(c).unwrap()
    }

    #[test]
    fn test_diagonal_is_zero() {
        for distance in Distance::ALL {
            let matrix = distance.matrix();
            for r in Residue::iter() {
                assert_eq!(matrix.get(r, r), 0.0);
            }
        }
    }

    #[test]
    fn test_grantham_symmetric() {
        assert!(Distance::Grantham.matrix().is_symmetric());
        assert!(!Distance::SchneiderWrede.matrix().is_symmetric());
    }

    #[test]
    fn test_lookup() {
        let grantham = Distance::Grantham.matrix();
        assert_eq!(grantham.get(residue('A'), residue('R')), 112.0);
        assert_eq!(grantham.get(residue('W'), residue('C')), 215.0);

        let schneider_wrede = Distance::SchneiderWrede.matrix();
        assert_eq!(schneider_wrede.get(residue('A'), residue('C')), 0.112);
        assert_eq!(schneider_wrede.get(residue('C'), residue('A')), 0.114);
    }

    #[test]
    fn test_custom_stems() {
        let matrix = DistanceMatrix::new("Custom", [[1.0; N]; N]);

        assert_eq!(matrix.socn_stem(), "tauCustom");
        assert_eq!(matrix.qso_stem(), "QSOCustom");
    }
}
