//! Reading sequence records.
//!
//! Two plain-text layouts are supported. If the first non-empty line starts with `>`, the input
//! is read as FASTA, where each record consists of a header line followed by any number of
//! sequence lines. Otherwise, each non-empty line is read as one sequence, and records are named
//! `seq1`, `seq2`, and so on.
//!
//! Sequences are upper-cased and stripped of whitespace, but are otherwise not validated.

use std::io::{self, BufRead};

use crate::{error::InvalidSequenceError, input::ReadStatus, Sequence};

/// A named sequence record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    id: String,
    sequence: Vec<u8>,
}

impl Record {
    /// Creates a new record.
    pub fn new<S>(id: S, sequence: Vec<u8>) -> Self
    where
        S: Into<String>,
    {
        Self {
            id: id.into(),
            sequence,
        }
    }

    /// Returns the record identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the raw sequence.
    pub fn raw_sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Validates the raw sequence.
    pub fn sequence(&self) -> Result<Sequence, InvalidSequenceError> {
        Sequence::new(&self.sequence)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Layout {
    Fasta,
    Lines,
}

/// A reader of sequence records.
pub struct Reader<R> {
    inner: R,
    layout: Option<Layout>,
    // A header read while finishing the previous FASTA record.
    pending_header: Option<String>,
    records: usize,
    buf: String,
}

impl<R> Reader<R>
where
    R: BufRead,
{
    /// Creates a new reader.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            layout: None,
            pending_header: None,
            records: 0,
            buf: String::new(),
        }
    }

    /// Reads the next record.
    pub fn read_record(&mut self) -> ReadStatus<Record> {
        let status = match self.layout {
            Some(Layout::Fasta) => self.read_fasta_record(),
            Some(Layout::Lines) => self.read_line_record(),
            None => match self.read_non_empty_line() {
                Ok(Some(line)) if line.starts_with('>') => {
                    self.layout = Some(Layout::Fasta);
                    self.pending_header = Some(line);
                    self.read_fasta_record()
                }
                Ok(Some(line)) => {
                    self.layout = Some(Layout::Lines);
                    ReadStatus::Read(self.line_record(&line))
                }
                Ok(None) => ReadStatus::Done,
                Err(e) => ReadStatus::Error(e),
            },
        };

        status.map(|record| {
            self.records += 1;
            record
        })
    }

    /// Returns the number of records read so far.
    pub fn records(&self) -> usize {
        self.records
    }

    fn read_fasta_record(&mut self) -> ReadStatus<Record> {
        let Some(header) = self.pending_header.take() else {
            return ReadStatus::Done;
        };

        let id = header[1..]
            .split_ascii_whitespace()
            .next()
            .map(str::to_string)
            .unwrap_or_else(|| format!("seq{}", self.records + 1));

        let mut sequence = Vec::new();
        loop {
            match self.read_non_empty_line() {
                Ok(Some(line)) if line.starts_with('>') => {
                    self.pending_header = Some(line);
                    break;
                }
                Ok(Some(line)) => extend_sequence(&mut sequence, &line),
                Ok(None) => break,
                Err(e) => return ReadStatus::Error(e),
            }
        }

        ReadStatus::Read(Record::new(id, sequence))
    }

    fn read_line_record(&mut self) -> ReadStatus<Record> {
        match self.read_non_empty_line() {
            Ok(Some(line)) => ReadStatus::Read(self.line_record(&line)),
            Ok(None) => ReadStatus::Done,
            Err(e) => ReadStatus::Error(e),
        }
    }

    fn line_record(&self, line: &str) -> Record {
        let mut sequence = Vec::new();
        extend_sequence(&mut sequence, line);

        Record::new(format!("seq{}", self.records + 1), sequence)
    }

    fn read_non_empty_line(&mut self) -> io::Result<Option<String>> {
        loop {
            self.buf.clear();

            if self.inner.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }

            let line = self.buf.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }
}

impl<R> Iterator for Reader<R>
where
    R: BufRead,
{
    type Item = io::Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().into_option()
    }
}

fn extend_sequence(sequence: &mut Vec<u8>, line: &str) {
    sequence.extend(
        line.bytes()
            .filter(|byte| !byte.is_ascii_whitespace())
            .map(|byte| byte.to_ascii_uppercase()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(input: &str) -> Vec<Record> {
        Reader::new(input.as_bytes())
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_fasta() {
        let records = read_all(">sp|P1 first protein\nMKV\nlaa\n\n>second\nADGC\n");

        assert_eq!(
            records,
            [
                Record::new("sp|P1", b"MKVLAA".to_vec()),
                Record::new("second", b"ADGC".to_vec()),
            ]
        );
    }

    #[test]
    fn test_fasta_empty_record() {
        let records = read_all(">a\n>b\nAR\n");

        assert_eq!(records[0].raw_sequence(), b"");
        assert_eq!(records[0].sequence(), Err(InvalidSequenceError::Empty));
        assert_eq!(records[1].sequence().unwrap().to_string(), "AR");
    }

    #[test]
    fn test_fasta_missing_id() {
        let records = read_all(">\nAR\n");

        assert_eq!(records[0].id(), "seq1");
    }

    #[test]
    fn test_lines() {
        let records = read_all("\nadgc gvpkav\nMKV\n");

        assert_eq!(
            records,
            [
                Record::new("seq1", b"ADGCGVPKAV".to_vec()),
                Record::new("seq2", b"MKV".to_vec()),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(read_all("").is_empty());
        assert!(read_all("\n\n").is_empty());
    }

    #[test]
    fn test_records_counted() {
        let mut reader = Reader::new(">a\nA\n>b\nR\n".as_bytes());

        while let ReadStatus::Read(_) = reader.read_record() {}

        assert_eq!(reader.records(), 2);
    }
}
