use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Error};

use clap::Parser;
use prodesc_core::{io::fasta, Input, Residue};

/// Extract subsequences centred on a residue.
///
/// For every occurrence of the residue that is at least WINDOW residues away from both ends of a
/// sequence, the subsequence spanning WINDOW residues on either side is written as a FASTA record.
/// Records are named by the sequence identifier and the index of the window within the sequence.
#[derive(Debug, Parser)]
pub struct Subseq {
    /// Input sequences.
    ///
    /// Either FASTA, or one raw sequence per line. If no file is provided, stdin will be used.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Residue at the centre of each subsequence.
    #[arg(short = 'r', long, value_parser = parse_residue, value_name = "CHAR")]
    residue: Residue,

    /// Number of residues on either side of the centre.
    #[arg(short = 'w', long, default_value_t = 3, value_name = "INT")]
    window: usize,

    /// Promote warnings to errors.
    ///
    /// By default, sequences that contain non-standard residues are skipped with a warning.
    #[arg(long)]
    strict: bool,
}

fn parse_residue(s: &str) -> Result<Residue, String> {
    let mut chars = s.chars();

    match (chars.next().and_then(Residue::from_char), chars.next()) {
        (Some(residue), None) => Ok(residue),
        _ => Err(format!("expected one standard residue code, found '{s}'")),
    }
}

impl Subseq {
    pub fn run(self) -> Result<(), Error> {
        let input = Input::new(self.input.clone())?;
        let reader = fasta::Reader::new(input.open()?);

        let mut writer = io::BufWriter::new(io::stdout().lock());
        let skipped = self.write_windows(reader, &mut writer)?;
        writer.flush()?;

        if skipped > 0 {
            log::warn!("Skipped {skipped} invalid sequences.");
        }

        Ok(())
    }

    fn write_windows<R, W>(&self, reader: fasta::Reader<R>, writer: &mut W) -> Result<usize, Error>
    where
        R: io::BufRead,
        W: io::Write,
    {
        let mut skipped = 0;

        for record in reader {
            let record = record?;

            let sequence = match record.sequence() {
                Ok(sequence) => sequence,
                Err(e) if self.strict => Err(e)
                    .with_context(|| format!("Failed to read sequence '{}'", record.id()))?,
                Err(e) => {
                    log::debug!("Skipping sequence '{}': {e}.", record.id());
                    skipped += 1;
                    continue;
                }
            };

            for (i, window) in sequence
                .windows_around(self.residue, self.window)
                .iter()
                .enumerate()
            {
                writeln!(writer, ">{}_{}\n{window}", record.id(), i + 1)?;
            }
        }

        Ok(skipped)
    }
}
