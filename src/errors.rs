use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while reading, merging or
/// writing subtitles
#[derive(Debug)]
pub enum SrtError {
    Io(io::Error),
    Parse(ParseError),
    Merge(MergeError),
}

/// Malformed time code or offset text
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl ParseError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
        }
    }

    /// Attach the 1-based source line the error was found on.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// Merge contract violations (wrong number of offsets for the given tracks)
#[derive(Debug, Clone, PartialEq)]
pub struct MergeError {
    pub message: String,
}

impl MergeError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SrtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SrtError::Io(err) => write!(f, "I/O error: {}", err),
            SrtError::Parse(err) => write!(f, "Parse error: {}", err),
            SrtError::Merge(err) => write!(f, "Merge error: {}", err),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for SrtError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SrtError::Io(err) => Some(err),
            SrtError::Parse(err) => Some(err),
            SrtError::Merge(err) => Some(err),
        }
    }
}
impl Error for ParseError {}
impl Error for MergeError {}

// Conversion implementations
impl From<io::Error> for SrtError {
    fn from(err: io::Error) -> Self {
        SrtError::Io(err)
    }
}

impl From<ParseError> for SrtError {
    fn from(err: ParseError) -> Self {
        SrtError::Parse(err)
    }
}

impl From<MergeError> for SrtError {
    fn from(err: MergeError) -> Self {
        SrtError::Merge(err)
    }
}

// Conversion to io::Error for callers living in io::Result
impl From<SrtError> for io::Error {
    fn from(err: SrtError) -> Self {
        match err {
            SrtError::Io(err) => err,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

// Type alias for Result with SrtError
pub type SrtResult<T> = Result<T, SrtError>;
