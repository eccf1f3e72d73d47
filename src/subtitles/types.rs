use crate::config::LineEnding;
use crate::timecode::TimeCode;
use serde::{Serialize, Serializer};
use std::fmt;
use std::io::{self, Write};

/// Separator between the start and end time codes of a cue.
pub const TIMECODE_SEPARATOR: &str = " --> ";

/// One line of cue text, kept as the raw bytes read from the source.
///
/// No encoding is assumed: Latin-1 or Windows-1252 text is written back
/// exactly as it was read. Display and serialization decode it lossily.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextLine(Vec<u8>);

impl TextLine {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_string_lossy(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl From<Vec<u8>> for TextLine {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for TextLine {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<String> for TextLine {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

impl From<&str> for TextLine {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl PartialEq<str> for TextLine {
    fn eq(&self, other: &str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl PartialEq<&str> for TextLine {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

impl fmt::Display for TextLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_lossy())
    }
}

impl Serialize for TextLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string_lossy())
    }
}

/// One subtitle block
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Cue {
    pub counter: u64,
    pub start: TimeCode,
    pub end: TimeCode,
    /// Text lines without terminators. Blank lines kept from the source are
    /// empty lines.
    pub text: Vec<TextLine>,
}

impl Cue {
    pub fn new(counter: u64, start: TimeCode, end: TimeCode) -> Self {
        Self {
            counter,
            start,
            end,
            text: Vec::new(),
        }
    }

    pub fn with_text<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TextLine>,
    {
        self.text.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Write the canonical block: counter, time span, text lines and the
    /// blank line closing the block.
    pub fn write_to<W: Write>(&self, writer: &mut W, line_ending: LineEnding) -> io::Result<()> {
        let eol = line_ending.as_str();
        write!(writer, "{}{}", self.counter, eol)?;
        write!(
            writer,
            "{}{}{}{}",
            self.start, TIMECODE_SEPARATOR, self.end, eol
        )?;
        for line in &self.text {
            writer.write_all(line.as_bytes())?;
            writer.write_all(eol.as_bytes())?;
        }
        writer.write_all(eol.as_bytes())
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.counter)?;
        writeln!(f, "{}{}{}", self.start, TIMECODE_SEPARATOR, self.end)?;
        for line in &self.text {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)
    }
}

/// Cues of one subtitle source, in source order
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Track {
    pub cues: Vec<Cue>,
}

impl Track {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cue> {
        self.cues.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Cue> {
        self.cues.iter_mut()
    }
}

impl From<Vec<Cue>> for Track {
    fn from(cues: Vec<Cue>) -> Self {
        Self { cues }
    }
}

impl IntoIterator for Track {
    type Item = Cue;
    type IntoIter = std::vec::IntoIter<Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cues.into_iter()
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a Cue;
    type IntoIter = std::slice::Iter<'a, Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cues.iter()
    }
}
