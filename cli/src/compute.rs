use std::{io, num::NonZeroUsize, path::PathBuf};

use anyhow::{Context, Error};

use clap::{ArgAction, Parser, ValueEnum};
use prodesc_core::{
    all::{self, Family},
    io::aaindex,
    property::Registry,
    pseudo, sequence_order, Distance, DistanceMatrix, Input,
};

mod runner;
use runner::Runner;

/// Compute descriptors of protein sequences.
#[derive(Debug, Parser)]
pub struct Compute {
    /// Input sequences.
    ///
    /// Either FASTA, or one raw sequence per line. Gzip compressed input is detected and
    /// decompressed automatically. If no file is provided, stdin will be used.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Descriptor families to compute.
    ///
    /// Multiple, comma-separated values can be provided. Families are always written in the same
    /// order, regardless of the order provided here. By default, all families except tripeptide
    /// composition are computed.
    #[arg(
        short = 'f',
        long,
        value_enum,
        use_value_delimiter = true,
        value_delimiter = ',',
        value_name = "FAMILY,..."
    )]
    families: Option<Vec<FamilyArg>>,

    /// K-mer sizes of composition descriptors.
    ///
    /// Sizes 1, 2, and 3 correspond to amino acid, dipeptide, and tripeptide composition,
    /// respectively. If provided, this replaces any composition families selected by
    /// '--families'.
    #[arg(
        short = 'k',
        long,
        use_value_delimiter = true,
        value_delimiter = ',',
        value_name = "INT,..."
    )]
    kmer_sizes: Option<Vec<usize>>,

    /// Maximum lag of autocorrelation and sequence-order descriptors.
    ///
    /// Must be less than the length of every sequence.
    #[arg(long, default_value_t = sequence_order::DEFAULT_MAXLAG, value_name = "INT")]
    maxlag: usize,

    /// Maximum correlation rank of pseudo amino acid composition descriptors.
    ///
    /// Must be less than the length of every sequence.
    #[arg(long, default_value_t = pseudo::DEFAULT_LAMDA, value_name = "INT")]
    lamda: usize,

    /// Weight of correlation terms in pseudo amino acid composition descriptors.
    #[arg(long, default_value_t = pseudo::DEFAULT_WEIGHT, value_name = "FLOAT")]
    weight: f64,

    /// Weight of sequence-order terms in quasi-sequence-order descriptors.
    #[arg(long, default_value_t = sequence_order::DEFAULT_WEIGHT, value_name = "FLOAT")]
    qso_weight: f64,

    /// Distance matrices of sequence-order descriptors.
    ///
    /// Multiple, comma-separated values can be provided.
    #[arg(
        short = 'd',
        long,
        value_enum,
        use_value_delimiter = true,
        value_delimiter = ',',
        default_values = ["schneider-wrede", "grantham"],
        value_name = "MATRIX,..."
    )]
    distance_matrix: Vec<DistanceArg>,

    /// Properties of autocorrelation descriptors.
    ///
    /// Multiple, comma-separated property names can be provided. Names refer to built-in
    /// properties, or to accessions of properties read using '--aaindex'. By default, the eight
    /// built-in autocorrelation properties are used.
    #[arg(
        short = 'p',
        long,
        use_value_delimiter = true,
        value_delimiter = ',',
        value_name = "NAME,..."
    )]
    properties: Option<Vec<String>>,

    /// Properties of type I pseudo amino acid composition descriptors.
    ///
    /// Names are resolved as for '--properties'. By default, hydrophobicity, hydrophilicity, and
    /// residue mass are used.
    #[arg(long, use_value_delimiter = true, value_delimiter = ',', value_name = "NAME,...")]
    paac_properties: Option<Vec<String>>,

    /// AAindex1 file of additional properties.
    ///
    /// Properties are named by accession. Records with missing values are skipped with a
    /// warning. Gzip compressed files are detected and decompressed automatically.
    #[arg(long, value_name = "FILE")]
    aaindex: Option<PathBuf>,

    /// AAindex2 or AAindex3 file of additional distance matrices.
    ///
    /// Matrices are named by accession, and are used for sequence-order descriptors alongside
    /// those selected by '--distance-matrix'. Lower-triangular matrices are taken to be symmetric.
    /// Records with missing values are skipped with a warning.
    #[arg(long, value_name = "FILE")]
    aaindex_matrices: Option<PathBuf>,

    /// Accessions of matrices to use from '--aaindex-matrices'.
    ///
    /// Multiple, comma-separated values can be provided. By default, every complete matrix in the
    /// file is used.
    #[arg(
        long,
        requires = "aaindex_matrices",
        use_value_delimiter = true,
        value_delimiter = ',',
        value_name = "ACCESSION,..."
    )]
    matrices: Option<Vec<String>>,

    /// Write a header line of descriptor labels.
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    header: bool,

    /// Delimiter between output columns.
    #[arg(long, default_value = "\t", value_name = "STRING")]
    delimiter: String,

    /// Output precision.
    #[arg(long, default_value_t = 6, value_name = "INT")]
    precision: usize,

    /// Promote warnings to errors.
    ///
    /// By default, sequences that contain non-standard residues, or that are too short for the
    /// requested parameters, are skipped with a warning. Using this flag will cause an error
    /// instead of a warning if such sequences are encountered.
    #[arg(long)]
    strict: bool,

    /// Number of threads to use.
    #[arg(short = 't', long, default_value_t = NonZeroUsize::new(4).unwrap(), value_name = "INT")]
    threads: NonZeroUsize,
}

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum FamilyArg {
    /// Amino acid composition.
    Aac,
    /// Dipeptide composition.
    Dpc,
    /// Tripeptide composition.
    Tpc,
    /// Normalized Moreau-Broto autocorrelation.
    MoreauBroto,
    /// Moran autocorrelation.
    Moran,
    /// Geary autocorrelation.
    Geary,
    /// Composition, transition, and distribution.
    Ctd,
    /// Sequence-order-coupling numbers.
    Socn,
    /// Quasi-sequence-order descriptors.
    Qso,
    /// Type I pseudo amino acid composition.
    Paac,
    /// Type II (amphiphilic) pseudo amino acid composition.
    Apaac,
    /// Every family, including tripeptide composition.
    All,
}

impl FamilyArg {
    fn families(self) -> Vec<Family> {
        let family = match self {
            FamilyArg::Aac => Family::Aac,
            FamilyArg::Dpc => Family::Dpc,
            FamilyArg::Tpc => Family::Tpc,
            FamilyArg::MoreauBroto => Family::MoreauBroto,
            FamilyArg::Moran => Family::Moran,
            FamilyArg::Geary => Family::Geary,
            FamilyArg::Ctd => Family::Ctd,
            FamilyArg::Socn => Family::Socn,
            FamilyArg::Qso => Family::Qso,
            FamilyArg::Paac => Family::Paac,
            FamilyArg::Apaac => Family::Apaac,
            FamilyArg::All => return Family::ALL.to_vec(),
        };

        vec![family]
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum DistanceArg {
    /// Schneider-Wrede physicochemical distance matrix.
    SchneiderWrede,
    /// Grantham chemical distance matrix.
    Grantham,
}

impl From<DistanceArg> for Distance {
    fn from(arg: DistanceArg) -> Self {
        match arg {
            DistanceArg::SchneiderWrede => Distance::SchneiderWrede,
            DistanceArg::Grantham => Distance::Grantham,
        }
    }
}

impl Compute {
    pub fn run(self) -> Result<(), Error> {
        let calculator = self.build_calculator()?;

        let input = Input::new(self.input)?;
        let reader = input.open().with_context(|| match input.as_path() {
            Some(path) => format!("Failed to open sequences from path '{}'", path.display()),
            None => String::from("Failed to read sequences from stdin"),
        })?;

        let writer = prodesc_core::io::write::Builder::default()
            .set_delimiter(self.delimiter)
            .set_precision(self.precision)
            .set_header(self.header)
            .build(io::stdout().lock());

        let mut runner = Runner::new(calculator, writer, self.strict);
        runner.run(reader, self.threads)
    }

    fn build_calculator(&self) -> Result<all::Calculator, Error> {
        let registry = self.registry()?;
        let matrices = self.distance_matrices()?;

        let mut builder = all::Builder::default()
            .set_maxlag(self.maxlag)
            .set_lamda(self.lamda)
            .set_weight(self.weight)
            .set_qso_weight(self.qso_weight)
            .set_distance_matrices(matrices);

        if let Some(families) = &self.families {
            builder = builder.set_families(families.iter().flat_map(|arg| arg.families()));
        }

        if let Some(kmer_sizes) = &self.kmer_sizes {
            builder = builder.set_kmer_sizes(kmer_sizes.iter().copied());
        }

        if let Some(names) = &self.properties {
            builder = builder.set_properties(registry.resolve(names)?);
        }

        if let Some(names) = &self.paac_properties {
            builder = builder.set_paac_properties(registry.resolve(names)?);
        }

        Ok(builder.build()?)
    }

    fn registry(&self) -> Result<Registry, Error> {
        let mut registry = Registry::builtin();

        if let Some(path) = &self.aaindex {
            let reader = Input::new_unchecked(Some(path.clone()))
                .open()
                .with_context(|| {
                    format!("Failed to open AAindex from provided path '{}'", path.display())
                })?;

            let (tables, skipped) = aaindex::read_property_tables(reader)
                .with_context(|| format!("Failed to read AAindex from '{}'", path.display()))?;

            if !skipped.is_empty() {
                log::warn!(
                    "Skipped {} AAindex records with missing values: {}.",
                    skipped.len(),
                    skipped.join(", ")
                );
            }

            log::debug!("Read {} properties from AAindex.", tables.len());
            registry.extend(tables);
        }

        Ok(registry)
    }

    fn distance_matrices(&self) -> Result<Vec<DistanceMatrix>, Error> {
        let mut matrices = self
            .distance_matrix
            .iter()
            .map(|&arg| Distance::from(arg).matrix().clone())
            .collect::<Vec<_>>();

        if let Some(path) = &self.aaindex_matrices {
            let reader = Input::new_unchecked(Some(path.clone()))
                .open()
                .with_context(|| {
                    format!("Failed to open AAindex matrices from provided path '{}'", path.display())
                })?;

            let (mut custom, skipped) = aaindex::read_distance_matrices(reader).with_context(|| {
                format!("Failed to read AAindex matrices from '{}'", path.display())
            })?;

            if !skipped.is_empty() {
                log::warn!(
                    "Skipped {} AAindex matrices with missing values: {}.",
                    skipped.len(),
                    skipped.join(", ")
                );
            }

            if let Some(accessions) = &self.matrices {
                custom = select_matrices(custom, accessions)?;
            }

            log::debug!("Read {} distance matrices from AAindex.", custom.len());
            matrices.extend(custom);
        }

        Ok(matrices)
    }
}

fn select_matrices(
    mut matrices: Vec<DistanceMatrix>,
    accessions: &[String],
) -> Result<Vec<DistanceMatrix>, Error> {
    accessions
        .iter()
        .map(|accession| {
            matrices
                .iter()
                .position(|matrix| matrix.name() == accession)
                .map(|i| matrices.swap_remove(i))
                .ok_or_else(|| {
                    anyhow::anyhow!("no complete AAindex matrix with accession '{accession}'")
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::error::ErrorKind as ClapErrorKind;

    use crate::tests::{parse_subcmd, try_parse_subcmd};

    #[test]
    fn test_defaults() {
        let args = parse_subcmd::<Compute>("prodesc compute");

        assert_eq!(args.input, None);
        assert_eq!(args.families, None);
        assert_eq!(args.maxlag, 30);
        assert_eq!(args.lamda, 30);
        assert_eq!(args.weight, 0.05);
        assert_eq!(args.qso_weight, 0.1);
        assert_eq!(
            args.distance_matrix,
            [DistanceArg::SchneiderWrede, DistanceArg::Grantham]
        );
        assert!(args.header);
        assert_eq!(args.delimiter, "\t");
        assert_eq!(args.precision, 6);
        assert!(!args.strict);
        assert_eq!(args.threads.get(), 4);
    }

    #[test]
    fn test_parse_families() {
        let args = parse_subcmd::<Compute>("prodesc compute -f aac,moreau-broto,paac seqs.fa");

        assert_eq!(
            args.families,
            Some(vec![FamilyArg::Aac, FamilyArg::MoreauBroto, FamilyArg::Paac])
        );
        assert_eq!(args.input, Some(PathBuf::from("seqs.fa")));
    }

    #[test]
    fn test_parse_invalid_family() {
        let result = try_parse_subcmd::<Compute>("prodesc compute -f aac,foo");

        assert_eq!(result.unwrap_err().kind(), ClapErrorKind::InvalidValue);
    }

    #[test]
    fn test_parse_header_false() {
        let args = parse_subcmd::<Compute>("prodesc compute --header false");

        assert!(!args.header);
    }

    #[test]
    fn test_parse_zero_threads() {
        let result = try_parse_subcmd::<Compute>("prodesc compute -t 0");

        assert_eq!(result.unwrap_err().kind(), ClapErrorKind::ValueValidation);
    }

    #[test]
    fn test_all_families() {
        assert_eq!(FamilyArg::All.families(), Family::ALL);
        assert_eq!(FamilyArg::Geary.families(), [Family::Geary]);
    }

    #[test]
    fn test_build_calculator_families() {
        let args = parse_subcmd::<Compute>("prodesc compute -f qso,aac,aac -d grantham");

        let calculator = args.build_calculator().unwrap();

        assert_eq!(calculator.families(), [Family::Aac, Family::Qso]);
    }

    #[test]
    fn test_build_calculator_unknown_property() {
        let args = parse_subcmd::<Compute>("prodesc compute -f moran -p Hydrophobicity,Foo");

        let error = args.build_calculator().unwrap_err();

        assert_eq!(error.to_string(), "no property named 'Foo'");
    }

    #[test]
    fn test_parse_matrices_requires_file() {
        let result = try_parse_subcmd::<Compute>("prodesc compute --matrices GRAR740104");

        assert_eq!(
            result.unwrap_err().kind(),
            ClapErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_parse_aaindex_matrices() {
        let args = parse_subcmd::<Compute>(
            "prodesc compute --aaindex-matrices aaindex2 --matrices A,B -d grantham",
        );

        assert_eq!(args.aaindex_matrices, Some(PathBuf::from("aaindex2")));
        assert_eq!(args.matrices, Some(vec![String::from("A"), String::from("B")]));
        assert_eq!(args.distance_matrix, [DistanceArg::Grantham]);
    }

    #[test]
    fn test_select_matrices() {
        let matrix = |name: &str| DistanceMatrix::new(name, [[1.0; 20]; 20]);
        let matrices = vec![matrix("A"), matrix("B"), matrix("C")];

        let selected =
            select_matrices(matrices.clone(), &[String::from("C"), String::from("A")]).unwrap();
        assert_eq!(
            selected.iter().map(DistanceMatrix::name).collect::<Vec<_>>(),
            ["C", "A"]
        );

        let error = select_matrices(matrices, &[String::from("D")]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "no complete AAindex matrix with accession 'D'"
        );
    }

    #[test]
    fn test_build_calculator_invalid_kmer_size() {
        let args = parse_subcmd::<Compute>("prodesc compute -k 1,4");

        assert!(args.build_calculator().is_err());
    }
}
