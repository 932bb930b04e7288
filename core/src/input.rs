//! Input sources for reading sequences and property files.

use std::{
    env,
    fs::File,
    io::{self, BufRead, IsTerminal as _, Read},
    path::{Path, PathBuf},
};

use flate2::bufread::MultiGzDecoder;

/// A status when trying to read an element from a reader.
#[derive(Debug)]
pub enum ReadStatus<T> {
    /// Element was succesfully read.
    Read(T),
    /// An error was encountered.
    Error(io::Error),
    /// The reader has finished.
    Done,
}

impl<T> ReadStatus<T> {
    pub(crate) fn map<U, F>(self, op: F) -> ReadStatus<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ReadStatus::Read(t) => ReadStatus::Read(op(t)),
            ReadStatus::Error(e) => ReadStatus::Error(e),
            ReadStatus::Done => ReadStatus::Done,
        }
    }

    /// Converts the status into an optional result, with [`ReadStatus::Done`] mapping to `None`.
    pub fn into_option(self) -> Option<io::Result<T>> {
        match self {
            ReadStatus::Read(t) => Some(Ok(t)),
            ReadStatus::Error(e) => Some(Err(e)),
            ReadStatus::Done => None,
        }
    }
}

/// An input source for reading.
#[derive(Debug)]
pub enum Input {
    /// A path from which to read a file.
    Path(PathBuf),
    /// Stdin.
    Stdin,
}

impl Input {
    /// By default, reading an `Input` checks that either a path is provided, or that input is
    /// available via stdin, instead of hanging.
    ///
    /// In some contexts, e.g. testing, this can cause issues, and so it may be disabled by setting
    /// this environment variable, or by using [`Input::new_unchecked`].
    pub const ENV_KEY_DISABLE_CHECK: &'static str = "PRODESC_ALLOW_STDIN";

    /// Creates a new input source.
    pub fn new(input: Option<PathBuf>) -> io::Result<Self> {
        let check = env::var(Self::ENV_KEY_DISABLE_CHECK).is_err();

        if input.is_some() && !io::stdin().is_terminal() && check {
            Err(io::Error::new(
                io::ErrorKind::Other,
                "received input both via file and stdin",
            ))
        } else if input.is_none() && io::stdin().is_terminal() && check {
            Err(io::Error::new(
                io::ErrorKind::Other,
                "received no input via file or stdin",
            ))
        } else {
            Ok(Self::new_unchecked(input))
        }
    }

    /// Creates a new input source without checking that any data is available.
    pub fn new_unchecked(input: Option<PathBuf>) -> Self {
        if let Some(path) = input {
            Self::Path(path)
        } else {
            Self::Stdin
        }
    }

    /// Opens the input for reading.
    ///
    /// Gzip-compressed input is detected and decompressed transparently.
    pub fn open(&self) -> io::Result<Reader> {
        let source = match self {
            Input::Path(path) => File::open(path).map(io::BufReader::new).map(Source::File)?,
            Input::Stdin => Source::Stdin(io::stdin().lock()),
        };

        Reader::new(source)
    }

    /// Returns the provided path if provided, otherwise `None`.
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Input::Path(path) => Some(path.as_ref()),
            Input::Stdin => None,
        }
    }
}

impl From<Input> for Option<PathBuf> {
    fn from(input: Input) -> Self {
        match input {
            Input::Path(path) => Some(path),
            Input::Stdin => None,
        }
    }
}

/// A raw, possibly compressed, byte source.
#[derive(Debug)]
pub enum Source {
    /// A reader from a file.
    File(io::BufReader<File>),
    /// A reader from stdin.
    Stdin(io::StdinLock<'static>),
}

impl Read for Source {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Source::File(reader) => reader.read(buf),
            Source::Stdin(reader) => reader.read(buf),
        }
    }
}

impl BufRead for Source {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Source::File(reader) => reader.fill_buf(),
            Source::Stdin(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Source::File(reader) => reader.consume(amt),
            Source::Stdin(reader) => reader.consume(amt),
        }
    }
}

/// A compression method of input data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompressionMethod {
    /// Gzip, including multi-member gzip such as BGZF.
    Gzip,
}

impl CompressionMethod {
    /// Detects the compression method from the start of a reader, without consuming any data.
    pub fn detect<R>(reader: &mut R) -> io::Result<Option<Self>>
    where
        R: BufRead,
    {
        const GZIP_MAGIC_NUMBER: [u8; 2] = [0x1f, 0x8b];

        let src = reader.fill_buf()?;

        if let Some(buf) = src.get(..GZIP_MAGIC_NUMBER.len()) {
            if buf == GZIP_MAGIC_NUMBER {
                return Ok(Some(CompressionMethod::Gzip));
            }
        }

        Ok(None)
    }
}

/// A reader of decompressed input.
#[derive(Debug)]
pub enum Reader<R = Source> {
    /// Uncompressed input.
    Plain(R),
    /// Gzip-compressed input.
    Gzip(io::BufReader<MultiGzDecoder<R>>),
}

impl<R> Reader<R>
where
    R: BufRead,
{
    /// Creates a new reader, detecting the compression method of the inner reader.
    pub fn new(mut inner: R) -> io::Result<Self> {
        Ok(match CompressionMethod::detect(&mut inner)? {
            Some(CompressionMethod::Gzip) => {
                Self::Gzip(io::BufReader::new(MultiGzDecoder::new(inner)))
            }
            None => Self::Plain(inner),
        })
    }

    /// Returns the compression method of the input, if any.
    pub fn compression_method(&self) -> Option<CompressionMethod> {
        match self {
            Reader::Plain(_) => None,
            Reader::Gzip(_) => Some(CompressionMethod::Gzip),
        }
    }
}

impl<R> Read for Reader<R>
where
    R: BufRead,
{
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Reader::Plain(reader) => reader.read(buf),
            Reader::Gzip(reader) => reader.read(buf),
        }
    }
}

impl<R> BufRead for Reader<R>
where
    R: BufRead,
{
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Reader::Plain(reader) => reader.fill_buf(),
            Reader::Gzip(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Reader::Plain(reader) => reader.consume(amt),
            Reader::Gzip(reader) => reader.consume(amt),
        }
    }
}
