//! Reading sequences and properties, and writing descriptors.

pub mod aaindex;

pub mod fasta;

pub mod write;
