#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Numeric descriptors of protein sequences.
//!
//! This serves as the core library implementation for the `prodesc` CLI, but can also be used as
//! a free-standing library for turning protein sequences into fixed-length feature vectors.
//!
//! # Overview
//!
//! A validated [`Sequence`] over the 20 standard residues is the input to every calculation, and
//! an ordered, labelled [`Descriptors`] vector is the output. The descriptor families are:
//!
//! - k-mer composition, in [`composition`];
//! - Moreau-Broto, Moran, and Geary autocorrelation of [`PropertyTable`]s, in
//!   [`autocorrelation`];
//! - composition, transition, and distribution of structural classes, in [`ctd`];
//! - sequence-order-coupling numbers and quasi-sequence-order descriptors based on a
//!   [`DistanceMatrix`], in [`sequence_order`];
//! - pseudo amino acid composition, in [`pseudo`].
//!
//! Several families can be computed at once using an [`all::Builder`].
//!
//! # Example
//!
//! ```
//! use prodesc_core::{composition, pseudo, Sequence};
//!
//! let sequence = Sequence::new("ADGCGVPKAV")?;
//!
//! // Two alanines out of ten residues
//! let aac = composition::aac(&sequence);
//! assert_eq!(aac["A"], 20.0);
//!
//! // Composition and correlation terms of PAAC jointly sum to 100
//! let paac = pseudo::paac(&sequence, 3, pseudo::DEFAULT_WEIGHT)?;
//! assert_eq!(paac.len(), 23);
//! assert!((paac.sum() - 100.0).abs() < 1e-9);
//! # Ok::<(), prodesc_core::DescriptorError>(())
//! ```

#[cfg(test)]
#[macro_use]
pub(crate) mod approx;

pub mod all;

pub mod autocorrelation;

pub mod classification;
pub use classification::StructuralProperty;

pub mod composition;

pub mod ctd;

pub mod descriptors;
pub use descriptors::Descriptors;

pub mod distance;
pub use distance::{Distance, DistanceMatrix};

pub mod error;
pub use error::DescriptorError;

pub mod input;
pub use input::Input;

pub mod io;

pub mod property;
pub use property::PropertyTable;

pub mod pseudo;

pub mod residue;
pub use residue::Residue;

pub mod sequence;
pub use sequence::Sequence;

pub mod sequence_order;

pub mod utils;
