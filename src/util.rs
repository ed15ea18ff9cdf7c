//! Misc utility stuff

use crate::input::InputProblem;
use flate2::read::MultiGzDecoder;
use fs_err as fs;
use std::error;
use std::fmt;
use std::io::{self, BufRead, Read, Write};
use std::ops::{Deref, DerefMut};

/// Shorthand for returning an error Result
#[macro_export]
macro_rules! err {
    ($e:literal) => {Err($crate::util::Error::Error($e.to_string()))};
    ($e:expr) => {Err($crate::util::Error::Error($e))};
    ($($e:expr),+) => {Err($crate::util::Error::Error(format!($($e),+)))}
}
pub use err;
// Shorthand for implementing a pass-through error
macro_rules! err_type {
    ($x:path, $i:path) => {
        impl From<$x> for Error {
            fn from(kind: $x) -> Error {
                $i(kind)
            }
        }
    };
}

/// Various errors
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Custom anagen error
    Error(String),
    /// The dictionary could not be opened or read. Always fatal.
    SourceUnavailable {
        /// name of the dictionary, as given
        name: String,
        /// underlying failure
        source: io::Error,
    },
    /// End of stream, or a read failure, while prompting for input
    InputStreamClosed(Option<io::Error>),
    /// The phrase was rejected. Recoverable when prompting.
    InvalidInput(InputProblem),
    /// pass through ParseIntError
    ParseIntError(std::num::ParseIntError),
    /// pass through io::Error
    IoError(io::Error),
    /// be an error, but don't report anything
    Silent,
}
/// Result type for anagen
pub type Result<T> = core::result::Result<T, Error>;
impl error::Error for Error {}

impl Error {
    /// return true if this error should be treated as not an error
    pub fn suppress(&self) -> bool {
        match self {
            Self::IoError(err) => err.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
    /// return true if this error should be treated as an error, but silently
    pub const fn silent(&self) -> bool {
        matches!(self, Self::Silent)
    }
    /// wrap a failure to read the named dictionary
    pub fn source_unavailable(name: &str, source: io::Error) -> Self {
        Self::SourceUnavailable { name: name.to_string(), source }
    }
}

err_type!(io::Error, Error::IoError);
err_type!(std::num::ParseIntError, Error::ParseIntError);
err_type!(InputProblem, Error::InvalidInput);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(s) => write!(f, "{}", s)?,
            Self::SourceUnavailable { name, source } => {
                // fs_err wraps the OS error and repeats the path, so show the cause
                match error::Error::source(source) {
                    Some(cause) => write!(f, "could not open {} : {}", name, cause)?,
                    None => write!(f, "could not open {} : {}", name, source)?,
                }
            }
            Self::InputStreamClosed(None) => {
                write!(f, "Error reading input or input stream closed.")?
            }
            Self::InputStreamClosed(Some(e)) => {
                write!(f, "Error reading input or input stream closed : {}", e)?
            }
            Self::InvalidInput(p) => write!(f, "{}", p)?,
            Self::ParseIntError(s) => write!(f, "ParseIntError : {}", s)?,
            Self::IoError(s) => write!(f, "IoError : {}", s)?,
            Self::Silent => write!(f, "Silent")?,
        }
        Ok(())
    }
}

/// Input file. Wrapped in a type so I can 'impl Debug'
pub struct Infile(
    /// The file being read
    pub io::BufReader<Box<dyn Read>>,
);

impl Infile {
    /// create a new input file
    pub fn new(f: io::BufReader<Box<dyn Read>>) -> Self {
        Self(f)
    }
}

impl Default for Infile {
    fn default() -> Self {
        Self::new(io::BufReader::new(Box::new(io::empty())))
    }
}

impl fmt::Debug for Infile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Infile")
    }
}

impl Deref for Infile {
    type Target = io::BufReader<Box<dyn Read>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Infile {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// output file type
pub type Outfile = io::BufWriter<Box<dyn Write>>;

/// Make an Outfile from a file name, "-" is stdout and "--" is stderr
pub fn get_writer(name: &str) -> Result<Outfile> {
    let inner: Box<dyn Write> = {
        if name == "-" {
            Box::new(io::stdout())
        } else if name == "--" {
            Box::new(io::stderr())
        } else {
            Box::new(
                fs::OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(name)?,
            )
        }
    };
    Ok(io::BufWriter::new(inner))
}

/// Make an Infile from a file name.
/// Gzipped files are decompressed on the fly.
/// Any failure here means the dictionary is unusable, so it is reported as SourceUnavailable.
pub fn get_reader(name: &str) -> Result<Infile> {
    let inner: Box<dyn Read> = Box::new(
        fs::File::open(name).map_err(|e| Error::source_unavailable(name, e))?,
    );
    let mut outer = io::BufReader::new(inner);
    let start = outer
        .fill_buf()
        .map_err(|e| Error::source_unavailable(name, e))?;
    if start.starts_with(&[0x1fu8, 0x8bu8, 0x08u8]) {
        outer = io::BufReader::new(Box::new(MultiGzDecoder::new(outer)));
    }
    Ok(Infile::new(outer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;

    #[test]
    /// Verifies opening a missing file is SourceUnavailable with its name.
    fn missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        match get_reader(path.to_str().unwrap()) {
            Err(Error::SourceUnavailable { name, .. }) => {
                assert_eq!(name, path.to_str().unwrap())
            }
            other => panic!("expected SourceUnavailable, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    /// Verifies the message names the file once and gives the OS cause.
    fn source_unavailable_shows_os_cause_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let name = path.to_str().unwrap();
        let os = std::fs::File::open(&path).unwrap_err().to_string();
        let msg = get_reader(name).map(|_| ()).unwrap_err().to_string();
        assert_eq!(msg, format!("could not open {} : {}", name, os));
        assert_eq!(msg.matches(name).count(), 1);
    }

    #[test]
    /// Verifies plain and gzipped files read the same.
    fn reads_plain_and_gzip() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let plain = dir.path().join("plain.txt");
        std::fs::write(&plain, "cat\ndog\n")?;
        let mut s = String::new();
        let mut f = get_reader(plain.to_str().unwrap())?;
        f.read_to_string(&mut s)?;
        assert_eq!(s, "cat\ndog\n");

        let zipped = dir.path().join("words.gz");
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(b"cat\ndog\n")?;
        std::fs::write(&zipped, enc.finish()?)?;
        let mut s = String::new();
        let mut f = get_reader(zipped.to_str().unwrap())?;
        f.read_to_string(&mut s)?;
        assert_eq!(s, "cat\ndog\n");
        Ok(())
    }

    #[test]
    /// Verifies a broken pipe is treated as success.
    fn broken_pipe_is_suppressed() {
        let e: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(e.suppress());
        assert!(!Error::Silent.suppress());
        assert!(Error::Silent.silent());
    }
}
