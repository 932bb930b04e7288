use std::{io, num::NonZeroUsize};

use anyhow::{Context, Error};

use prodesc_core::{
    all::Calculator,
    io::{
        fasta::{self, Record},
        write::Writer,
    },
    DescriptorError, Descriptors,
};
use rayon::prelude::*;

// Number of records read before computing a batch in parallel.
const BATCH_SIZE: usize = 1024;

pub struct Runner<W> {
    calculator: Calculator,
    writer: Writer<W>,
    warnings: Warnings,
    strict: bool,
}

impl<W> Runner<W>
where
    W: io::Write,
{
    pub fn new(calculator: Calculator, writer: Writer<W>, strict: bool) -> Self {
        Self {
            calculator,
            writer,
            warnings: Warnings::default(),
            strict,
        }
    }

    pub fn run<R>(&mut self, reader: R, threads: NonZeroUsize) -> Result<(), Error>
    where
        R: io::BufRead,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.get())
            .build()?;

        let mut reader = fasta::Reader::new(reader);
        let mut batch = Vec::with_capacity(BATCH_SIZE);

        loop {
            batch.clear();
            for record in reader.by_ref().take(BATCH_SIZE) {
                batch.push(record?);
            }

            if batch.is_empty() {
                break;
            }

            let calculator = &self.calculator;
            let rows = pool.install(|| {
                batch
                    .par_iter()
                    .map(|record| compute(calculator, record))
                    .collect::<Vec<_>>()
            });

            for (record, row) in batch.iter().zip(rows) {
                self.write_row(record, row)?;
            }
        }

        self.writer.flush()?;
        self.warnings.summarize();

        log::info!("Processed {} sequences.", reader.records());

        Ok(())
    }

    fn write_row(
        &mut self,
        record: &Record,
        row: Result<Descriptors, DescriptorError>,
    ) -> Result<(), Error> {
        match row {
            Ok(descriptors) => self.writer.write_row(record.id(), &descriptors)?,
            Err(error) => {
                if self.strict {
                    Err(error).with_context(|| {
                        format!("Failed to compute descriptors for sequence '{}'", record.id())
                    })?
                } else {
                    self.warnings.warn_once(record, &error);
                }
            }
        }

        Ok(())
    }
}

fn compute(calculator: &Calculator, record: &Record) -> Result<Descriptors, DescriptorError> {
    let sequence = record.sequence()?;

    calculator.compute(&sequence)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Reason {
    InvalidSequence,
    Parameter,
    PropertyNotFound,
    DegenerateProperty,
}

impl Reason {
    const N: usize = 4;

    const VARIANTS: [Self; Self::N] = [
        Self::InvalidSequence,
        Self::Parameter,
        Self::PropertyNotFound,
        Self::DegenerateProperty,
    ];

    fn description(&self) -> &'static str {
        match self {
            Self::InvalidSequence => "invalid sequence",
            Self::Parameter => "parameters incompatible with sequence",
            Self::PropertyNotFound => "missing property",
            Self::DegenerateProperty => "property without variation",
        }
    }
}

impl From<&DescriptorError> for Reason {
    fn from(error: &DescriptorError) -> Self {
        match error {
            DescriptorError::InvalidSequence(_) => Self::InvalidSequence,
            DescriptorError::Parameter(_) => Self::Parameter,
            DescriptorError::PropertyNotFound(_) => Self::PropertyNotFound,
            DescriptorError::DegenerateProperty(_) => Self::DegenerateProperty,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct Warnings {
    counts: [usize; Reason::N],
}

impl Warnings {
    pub fn count(&self, reason: Reason) -> usize {
        self.counts[reason as usize]
    }

    pub fn count_mut(&mut self, reason: Reason) -> &mut usize {
        &mut self.counts[reason as usize]
    }

    pub fn warn_once(&mut self, record: &Record, error: &DescriptorError) {
        let reason = Reason::from(error);

        if self.count(reason) == 0 {
            let id = record.id();
            let description = reason.description();

            log::warn!(
                "Skipping sequence '{id}' due to {description} ({error}). \
                This warning will be shown only once, with a summary at the end."
            );
        }

        *self.count_mut(reason) += 1;
    }

    pub fn summarize(&self) {
        for reason in Reason::VARIANTS {
            let count = self.count(reason);

            if count > 0 {
                let description = reason.description();

                log::warn!("Skipped {count} sequences due to {description}.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use prodesc_core::{
        all::{Builder, Family},
        io::write,
    };

    fn runner(strict: bool) -> Runner<Vec<u8>> {
        let calculator = Builder::default()
            .set_families([Family::Aac])
            .build()
            .unwrap();
        let writer = write::Builder::default().set_precision(1).build(Vec::new());

        Runner::new(calculator, writer, strict)
    }

    fn threads() -> NonZeroUsize {
        NonZeroUsize::new(2).unwrap()
    }

    #[test]
    fn test_run_skips_invalid_sequences() {
        let mut runner = runner(false);

        runner
            .run(&b">a\nAAAA\n>b\nAXA\n>c\nRR\n"[..], threads())
            .unwrap();

        let output = String::from_utf8(runner.writer.into_inner()).unwrap();
        let lines = output.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id\tA\tR\tN\t"));
        assert!(lines[1].starts_with("a\t100.0\t0.0\t"));
        assert!(lines[2].starts_with("c\t0.0\t100.0\t"));
        assert_eq!(runner.warnings.count(Reason::InvalidSequence), 1);
    }

    #[test]
    fn test_run_strict_fails_on_invalid_sequence() {
        let mut runner = runner(true);

        let error = runner
            .run(&b">a\nAAAA\n>b\nAXA\n"[..], threads())
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Failed to compute descriptors for sequence 'b'"
        );
    }

    #[test]
    fn test_warnings_count_by_reason() {
        let mut warnings = Warnings::default();
        let record = Record::new("a", b"A".to_vec());
        let error = DescriptorError::from(prodesc_core::error::ParameterError::NoFamilies);

        warnings.warn_once(&record, &error);
        warnings.warn_once(&record, &error);

        assert_eq!(warnings.count(Reason::Parameter), 2);
        assert_eq!(warnings.count(Reason::InvalidSequence), 0);
    }
}
