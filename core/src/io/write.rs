//! Writing descriptors as delimited text.

use std::io;

use crate::Descriptors;

/// The header of the identifier column.
pub const ID_HEADER: &str = "id";

/// A builder to write descriptor tables.
#[derive(Clone, Debug)]
pub struct Builder {
    delimiter: String,
    precision: usize,
    header: bool,
}

impl Builder {
    /// Set delimiter.
    ///
    /// If unset, a tab will be used.
    pub fn set_delimiter<S>(mut self, delimiter: S) -> Self
    where
        S: Into<String>,
    {
        self.delimiter = delimiter.into();
        self
    }

    /// Set precision.
    ///
    /// If unset, a precision of six digits will be used.
    pub fn set_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set whether to write a header line of descriptor labels before the first row.
    ///
    /// If unset, a header is written.
    pub fn set_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Creates a table writer.
    pub fn build<W>(self, writer: W) -> Writer<W>
    where
        W: io::Write,
    {
        Writer {
            inner: writer,
            config: self,
            labels: None,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            delimiter: String::from("\t"),
            precision: 6,
            header: true,
        }
    }
}

/// A writer of descriptor tables, one row per sequence.
///
/// Every row must have the same labels, in the same order, as the first row.
#[derive(Debug)]
pub struct Writer<W> {
    inner: W,
    config: Builder,
    labels: Option<Vec<String>>,
}

impl<W> Writer<W>
where
    W: io::Write,
{
    /// Writes a row of descriptors, preceded by the sequence identifier.
    ///
    /// # Errors
    ///
    /// If writing fails, or if the labels differ from those of the first row.
    pub fn write_row(&mut self, id: &str, descriptors: &Descriptors) -> io::Result<()> {
        match &self.labels {
            Some(labels) => {
                if !labels.iter().map(String::as_str).eq(descriptors.labels()) {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("descriptor labels of '{id}' differ from those of previous rows"),
                    ));
                }
            }
            None => {
                if self.config.header {
                    self.write_header(descriptors)?;
                }

                self.labels = Some(descriptors.labels().map(String::from).collect());
            }
        }

        let (delimiter, precision) = (&self.config.delimiter, self.config.precision);

        write!(self.inner, "{id}")?;
        for value in descriptors.values() {
            write!(self.inner, "{delimiter}{value:.precision$}")?;
        }
        writeln!(self.inner)
    }

    /// Flushes the inner writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Returns the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn write_header(&mut self, descriptors: &Descriptors) -> io::Result<()> {
        write!(self.inner, "{ID_HEADER}")?;
        for label in descriptors.labels() {
            write!(self.inner, "{}{label}", self.config.delimiter)?;
        }
        writeln!(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(builder: Builder, rows: &[(&str, Descriptors)]) -> io::Result<String> {
        let mut writer = builder.build(Vec::new());

        for (id, descriptors) in rows {
            writer.write_row(id, descriptors)?;
        }

        Ok(String::from_utf8(writer.into_inner()).unwrap())
    }

    fn row(values: [f64; 2]) -> Descriptors {
        Descriptors::from_iter([("A", values[0]), ("R", values[1])])
    }

    #[test]
    fn test_write_default() {
        let output = write(
            Builder::default(),
            &[("a", row([20.0, 0.5])), ("b", row([1.0 / 3.0, 0.0]))],
        )
        .unwrap();

        assert_eq!(
            output,
            "id\tA\tR\na\t20.000000\t0.500000\nb\t0.333333\t0.000000\n"
        );
    }

    #[test]
    fn test_write_configured() {
        let builder = Builder::default()
            .set_delimiter(",")
            .set_precision(2)
            .set_header(false);

        let output = write(builder, &[("a", row([20.0, 0.5]))]).unwrap();

        assert_eq!(output, "a,20.00,0.50\n");
    }

    #[test]
    fn test_write_mismatched_labels() {
        let other = Descriptors::from_iter([("R", 1.0), ("A", 2.0)]);
        let result = write(Builder::default(), &[("a", row([1.0, 2.0])), ("b", other)]);

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidInput);
    }
}
