//! Reading AAindex property and matrix databases.
//!
//! An AAindex file is a sequence of records, each terminated by a `//` line. Within a record,
//! each line starts with a one-letter key: `H` gives the accession and `D` the description. Other
//! keys are ignored, except for the key introducing the values. Missing values are given as `NA`.
//!
//! In AAindex1 files, `I` introduces the values, which follow on two lines of ten values each. The
//! value columns are `A/L R/K N/M D/F C/P Q/S E/T G/W H/Y I/V`, so that the values are listed in
//! canonical residue order.
//!
//! In AAindex2 and AAindex3 files, a line such as `M rows = ARNDCQEGHILKMFPSTWYV, cols =
//! ARNDCQEGHILKMFPSTWYV` introduces the values, which follow with one line per row. Rows hold
//! either one value per column, or, for lower-triangular matrices, one value per column up to and
//! including the diagonal.

use std::{error, fmt, io};

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::space0,
    combinator::{all_consuming, map, value},
    multi::{count, many1},
    number::complete::double,
    sequence::{delimited, preceded, separated_pair, terminated, tuple},
    IResult,
};

use crate::{
    distance::DistanceMatrix,
    property::PropertyTable,
    residue::{Residue, N},
};

const VALUES_PER_LINE: usize = N / 2;

/// An AAindex1 record.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    accession: String,
    description: String,
    values: [Option<f64>; N],
}

impl Record {
    /// Returns the accession of the record.
    pub fn accession(&self) -> &str {
        &self.accession
    }

    /// Returns the description of the record.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the values of the record in canonical residue order, with `None` for missing values.
    pub fn values(&self) -> &[Option<f64>; N] {
        &self.values
    }

    /// Returns a property table named by the accession, or `None` if any value is missing.
    pub fn property_table(&self) -> Option<PropertyTable> {
        let mut values = [0.0; N];

        for (dst, src) in values.iter_mut().zip(self.values.iter()) {
            *dst = (*src)?;
        }

        Some(PropertyTable::new(self.accession.clone(), values))
    }
}

/// An AAindex2 or AAindex3 matrix record.
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixRecord {
    accession: String,
    description: String,
    rows: Vec<char>,
    cols: Vec<char>,
    values: Vec<Vec<Option<f64>>>,
}

impl MatrixRecord {
    /// Returns the accession of the record.
    pub fn accession(&self) -> &str {
        &self.accession
    }

    /// Returns the description of the record.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the value for the pair of residues, if present.
    ///
    /// Lower-triangular matrices only hold one of the two orderings of a pair, so a pair missing
    /// from the matrix is looked up in the opposite order.
    pub fn get(&self, from: Residue, to: Residue) -> Option<f64> {
        self.get_ordered(from, to)
            .or_else(|| self.get_ordered(to, from))
    }

    fn get_ordered(&self, row: Residue, col: Residue) -> Option<f64> {
        let i = self.rows.iter().position(|&c| c == row.as_char())?;
        let j = self.cols.iter().position(|&c| c == col.as_char())?;

        self.values.get(i)?.get(j).copied().flatten()
    }

    /// Returns a distance matrix named by the accession, or `None` if any pair of standard
    /// residues is missing.
    pub fn distance_matrix(&self) -> Option<DistanceMatrix> {
        let mut values = [[0.0; N]; N];

        for (from, row) in Residue::iter().zip(values.iter_mut()) {
            for (to, dst) in Residue::iter().zip(row.iter_mut()) {
                *dst = self.get(from, to)?;
            }
        }

        Some(DistanceMatrix::new(self.accession.clone(), values))
    }
}

/// An error associated with parsing an AAindex file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// A line in a value block could not be parsed.
    InvalidValues {
        /// The 1-based line number.
        line: usize,
    },
    /// A record ended without a complete value block.
    MissingValues {
        /// The accession of the record.
        accession: String,
    },
    /// A record ended without an accession.
    MissingAccession {
        /// The 1-based line number of the record terminator.
        line: usize,
    },
    /// A matrix row and column specification could not be parsed.
    InvalidMatrixLabels {
        /// The 1-based line number.
        line: usize,
    },
    /// The input ended inside a record.
    UnterminatedRecord,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidValues { line } => {
                write!(f, "invalid AAindex values on line {line}")
            }
            ParseError::MissingValues { accession } => {
                write!(f, "AAindex record '{accession}' has no complete value block")
            }
            ParseError::MissingAccession { line } => {
                write!(f, "AAindex record ending on line {line} has no accession")
            }
            ParseError::InvalidMatrixLabels { line } => {
                write!(f, "invalid AAindex matrix rows and columns on line {line}")
            }
            ParseError::UnterminatedRecord => f.write_str("AAindex input ended inside a record"),
        }
    }
}

impl error::Error for ParseError {}

impl From<ParseError> for io::Error {
    fn from(e: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, e)
    }
}

/// Reads all AAindex1 records from a reader.
pub fn read_records<R>(reader: R) -> io::Result<Vec<Record>>
where
    R: io::BufRead,
{
    let mut records = Vec::new();
    let mut partial = Partial::default();
    let mut in_record = false;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let number = i + 1;

        if let Some(read) = partial.value_lines.filter(|&read| read < 2) {
            let values = parse_value_line(&line).ok_or(ParseError::InvalidValues { line: number })?;
            let offset = read * VALUES_PER_LINE;
            partial.values[offset..offset + VALUES_PER_LINE].copy_from_slice(&values);
            partial.value_lines = Some(read + 1);
            continue;
        }

        if line.starts_with("//") {
            records.push(std::mem::take(&mut partial).finish(number)?);
            in_record = false;
            continue;
        }

        in_record |= !line.trim().is_empty();

        if !partial.header.read_line(&line) && line.starts_with('I') {
            partial.value_lines = Some(0);
        }
    }

    if in_record {
        Err(ParseError::UnterminatedRecord.into())
    } else {
        Ok(records)
    }
}

/// Reads all AAindex2 or AAindex3 records from a reader.
pub fn read_matrix_records<R>(reader: R) -> io::Result<Vec<MatrixRecord>>
where
    R: io::BufRead,
{
    let mut records = Vec::new();
    let mut partial = PartialMatrix::default();
    let mut in_record = false;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let number = i + 1;

        if line.starts_with("//") {
            records.push(std::mem::take(&mut partial).finish(number)?);
            in_record = false;
            continue;
        }

        in_record |= !line.trim().is_empty();

        if partial.labels.is_some() {
            if line.trim().is_empty() {
                continue;
            }

            let row =
                parse_matrix_row(&line).ok_or(ParseError::InvalidValues { line: number })?;
            partial.values.push(row);
        } else if !partial.header.read_line(&line) && line.starts_with('M') {
            let labels = parse_matrix_labels(line.get(1..).unwrap_or_default())
                .ok_or(ParseError::InvalidMatrixLabels { line: number })?;
            partial.labels = Some(labels);
        }
    }

    if in_record {
        Err(ParseError::UnterminatedRecord.into())
    } else {
        Ok(records)
    }
}

/// Reads all records from a reader and returns the property tables of complete records.
///
/// Records with missing values are skipped, and their accessions returned separately.
pub fn read_property_tables<R>(reader: R) -> io::Result<(Vec<PropertyTable>, Vec<String>)>
where
    R: io::BufRead,
{
    let mut tables = Vec::new();
    let mut skipped = Vec::new();

    for record in read_records(reader)? {
        match record.property_table() {
            Some(table) => tables.push(table),
            None => skipped.push(record.accession),
        }
    }

    Ok((tables, skipped))
}

/// Reads all AAindex2 or AAindex3 records from a reader and returns the distance matrices of
/// complete records.
///
/// Records missing a value for any pair of standard residues are skipped, and their accessions
/// returned separately.
pub fn read_distance_matrices<R>(reader: R) -> io::Result<(Vec<DistanceMatrix>, Vec<String>)>
where
    R: io::BufRead,
{
    let mut matrices = Vec::new();
    let mut skipped = Vec::new();

    for record in read_matrix_records(reader)? {
        match record.distance_matrix() {
            Some(matrix) => matrices.push(matrix),
            None => skipped.push(record.accession),
        }
    }

    Ok((matrices, skipped))
}

#[derive(Debug, Default)]
struct Header {
    accession: Option<String>,
    description: String,
    continues_description: bool,
}

impl Header {
    // Returns false if the line does not belong to the header.
    fn read_line(&mut self, line: &str) -> bool {
        let rest = line.get(1..).unwrap_or_default().trim();

        let continues_description = match line.chars().next() {
            Some('H') => {
                self.accession = Some(rest.to_string());
                false
            }
            Some('D') => {
                self.description = rest.to_string();
                true
            }
            Some(' ') if self.continues_description => {
                self.description.push(' ');
                self.description.push_str(rest);
                true
            }
            _ => {
                self.continues_description = false;
                return false;
            }
        };

        self.continues_description = continues_description;
        true
    }

    fn finish(self, line: usize) -> Result<(String, String), ParseError> {
        let accession = self.accession.ok_or(ParseError::MissingAccession { line })?;

        Ok((accession, self.description))
    }
}

#[derive(Debug, Default)]
struct Partial {
    header: Header,
    values: [Option<f64>; N],
    // None until an I line is seen, then the number of value lines read.
    value_lines: Option<usize>,
}

impl Partial {
    fn finish(self, line: usize) -> Result<Record, ParseError> {
        let (accession, description) = self.header.finish(line)?;

        if self.value_lines != Some(2) {
            return Err(ParseError::MissingValues { accession });
        }

        Ok(Record {
            accession,
            description,
            values: self.values,
        })
    }
}

#[derive(Debug, Default)]
struct PartialMatrix {
    header: Header,
    labels: Option<(Vec<char>, Vec<char>)>,
    values: Vec<Vec<Option<f64>>>,
}

impl PartialMatrix {
    fn finish(self, line: usize) -> Result<MatrixRecord, ParseError> {
        let (accession, description) = self.header.finish(line)?;

        let Some((rows, cols)) = self.labels else {
            return Err(ParseError::MissingValues { accession });
        };

        let is_complete = self.values.len() == rows.len()
            && self
                .values
                .iter()
                .enumerate()
                .all(|(i, row)| row.len() == cols.len() || row.len() == i + 1);

        if !is_complete {
            return Err(ParseError::MissingValues { accession });
        }

        Ok(MatrixRecord {
            accession,
            description,
            rows,
            cols,
            values: self.values,
        })
    }
}

fn parse_value_line(line: &str) -> Option<[Option<f64>; VALUES_PER_LINE]> {
    let (_, values) = value_line(line).ok()?;

    values.try_into().ok()
}

fn value_line(input: &str) -> IResult<&str, Vec<Option<f64>>> {
    all_consuming(terminated(
        count(preceded(space0, entry), VALUES_PER_LINE),
        space0,
    ))(input)
}

fn parse_matrix_row(line: &str) -> Option<Vec<Option<f64>>> {
    let (_, values) = matrix_row(line).ok()?;

    Some(values)
}

fn matrix_row(input: &str) -> IResult<&str, Vec<Option<f64>>> {
    all_consuming(terminated(many1(preceded(space0, entry)), space0))(input)
}

fn parse_matrix_labels(input: &str) -> Option<(Vec<char>, Vec<char>)> {
    let (_, (rows, cols)) = matrix_labels(input).ok()?;

    Some((rows.chars().collect(), cols.chars().collect()))
}

fn matrix_labels(input: &str) -> IResult<&str, (&str, &str)> {
    let labels = |name: &'static str| {
        preceded(
            tuple((space0, tag(name), space0, tag("="), space0)),
            take_while1(|c: char| !c.is_whitespace() && c != ','),
        )
    };

    all_consuming(terminated(
        separated_pair(labels("rows"), delimited(space0, tag(","), space0), labels("cols")),
        space0,
    ))(input)
}

fn entry(input: &str) -> IResult<&str, Option<f64>> {
    alt((value(None, tag("NA")), map(double, Some)))(input)
}
