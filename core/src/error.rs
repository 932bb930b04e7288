//! Errors raised when computing descriptors.

use std::fmt;

/// An error associated with constructing a sequence from raw input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidSequenceError {
    /// The input contained no residues.
    Empty,
    /// The input contained a symbol outside the standard alphabet.
    InvalidSymbol {
        /// The offending symbol.
        symbol: char,
        /// The 1-based position of the offending symbol.
        position: usize,
    },
}

impl fmt::Display for InvalidSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSequenceError::Empty => f.write_str("sequence contains no residues"),
            InvalidSequenceError::InvalidSymbol { symbol, position } => write!(
                f,
                "invalid residue '{}' at position {position} in sequence",
                symbol.escape_default()
            ),
        }
    }
}

impl std::error::Error for InvalidSequenceError {}

/// An error associated with a parameter that is incompatible with the input.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterError {
    /// The k-mer size is not supported.
    KmerSize {
        /// The requested k-mer size.
        k: usize,
    },
    /// The sequence is shorter than the k-mer size.
    SequenceShorterThanKmer {
        /// The requested k-mer size.
        k: usize,
        /// The sequence length.
        length: usize,
    },
    /// A lag parameter is zero, or not smaller than the sequence length.
    Lag {
        /// The name of the parameter.
        name: &'static str,
        /// The requested lag.
        lag: usize,
        /// The sequence length.
        length: usize,
    },
    /// A weight factor is negative or not finite.
    Weight {
        /// The requested weight.
        weight: f64,
    },
    /// No property tables were provided where at least one is required.
    NoProperties,
    /// The same property was provided more than once.
    DuplicateProperty {
        /// The name of the duplicated property.
        name: String,
    },
    /// The same distance matrix was provided more than once, or two distance matrices would
    /// produce the same descriptor labels.
    DuplicateDistanceMatrix {
        /// The name of the duplicated matrix.
        name: String,
    },
    /// No distance matrices were provided where at least one is required.
    NoDistanceMatrices,
    /// Two descriptors would share a label, for instance because of property names such as `P`
    /// and `P1`.
    DuplicateLabel {
        /// The shared label.
        label: String,
    },
    /// No descriptor families were selected.
    NoFamilies,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::KmerSize { k } => {
                write!(f, "unsupported k-mer size {k}, expected 1, 2, or 3")
            }
            ParameterError::SequenceShorterThanKmer { k, length } => write!(
                f,
                "cannot compute {k}-mer composition for sequence of length {length}"
            ),
            ParameterError::Lag { name, lag, length } => write!(
                f,
                "{name} must be at least 1 and less than the sequence length \
                (found {name} {lag} for sequence of length {length})"
            ),
            ParameterError::Weight { weight } => {
                write!(f, "weight must be finite and non-negative (found {weight})")
            }
            ParameterError::NoProperties => f.write_str("at least one property is required"),
            ParameterError::DuplicateProperty { name } => {
                write!(f, "property '{name}' provided more than once")
            }
            ParameterError::DuplicateDistanceMatrix { name } => write!(
                f,
                "distance matrix '{name}' provided more than once or shares labels with another matrix"
            ),
            ParameterError::NoDistanceMatrices => {
                f.write_str("at least one distance matrix is required")
            }
            ParameterError::DuplicateLabel { label } => {
                write!(f, "descriptor label '{label}' produced more than once")
            }
            ParameterError::NoFamilies => f.write_str("at least one descriptor family is required"),
        }
    }
}

impl std::error::Error for ParameterError {}

/// An error associated with looking up a property that does not exist.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyNotFoundError {
    pub(crate) name: String,
}

impl PropertyNotFoundError {
    /// Returns the name of the property that was not found.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for PropertyNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no property named '{}'", self.name)
    }
}

impl std::error::Error for PropertyNotFoundError {}

/// The set of residues across which a property was found to have zero variance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Scope {
    /// All 20 standard residues.
    Alphabet,
    /// The residues of a particular sequence.
    Sequence,
}

/// An error associated with standardizing a property that does not vary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DegeneratePropertyError {
    pub(crate) name: String,
    pub(crate) scope: Scope,
}

impl DegeneratePropertyError {
    /// Returns the name of the degenerate property.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the set of residues across which the property does not vary.
    pub fn scope(&self) -> Scope {
        self.scope
    }
}

impl fmt::Display for DegeneratePropertyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = match self.scope {
            Scope::Alphabet => "the standard residues",
            Scope::Sequence => "the residues of the sequence",
        };

        write!(f, "property '{}' has zero variance across {scope}", self.name)
    }
}

impl std::error::Error for DegeneratePropertyError {}

/// An error raised when computing descriptors.
#[derive(Clone, Debug, PartialEq)]
pub enum DescriptorError {
    /// See [`InvalidSequenceError`].
    InvalidSequence(InvalidSequenceError),
    /// See [`ParameterError`].
    Parameter(ParameterError),
    /// See [`PropertyNotFoundError`].
    PropertyNotFound(PropertyNotFoundError),
    /// See [`DegeneratePropertyError`].
    DegenerateProperty(DegeneratePropertyError),
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorError::InvalidSequence(e) => write!(f, "{e}"),
            DescriptorError::Parameter(e) => write!(f, "{e}"),
            DescriptorError::PropertyNotFound(e) => write!(f, "{e}"),
            DescriptorError::DegenerateProperty(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DescriptorError {}

impl From<InvalidSequenceError> for DescriptorError {
    fn from(e: InvalidSequenceError) -> Self {
        Self::InvalidSequence(e)
    }
}

impl From<ParameterError> for DescriptorError {
    fn from(e: ParameterError) -> Self {
        Self::Parameter(e)
    }
}

impl From<PropertyNotFoundError> for DescriptorError {
    fn from(e: PropertyNotFoundError) -> Self {
        Self::PropertyNotFound(e)
    }
}

impl From<DegeneratePropertyError> for DescriptorError {
    fn from(e: DegeneratePropertyError) -> Self {
        Self::DegenerateProperty(e)
    }
}

/// Checks that a lag parameter is valid for a sequence of the provided length.
pub(crate) fn check_lag(
    name: &'static str,
    lag: usize,
    length: usize,
) -> Result<(), ParameterError> {
    if lag == 0 || lag >= length {
        Err(ParameterError::Lag { name, lag, length })
    } else {
        Ok(())
    }
}

/// Checks that a weight factor is valid.
pub(crate) fn check_weight(weight: f64) -> Result<(), ParameterError> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::Weight { weight })
    }
}
