use super::types::{Cue, TextLine, Track};
use crate::errors::{ParseError, SrtResult};
use crate::timecode::{TimeCode, TIMECODE_LEN};
use log::{debug, warn};
use std::io::{self, BufRead};

/// Column where the end time code starts on a timing line (after `" --> "`).
const END_TIMECODE_COLUMN: usize = 17;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Line-oriented SRT reader.
///
/// Each cue goes through three phases: a counter line, a timing line, then
/// text lines up to the first blank line. Further blank lines are kept as
/// part of the text until a non-blank line shows up, which becomes the next
/// counter line.
///
/// Lines are handled as bytes. Only the counter and timing lines have to be
/// ASCII digits; text lines are kept byte for byte in whatever encoding the
/// file uses.
pub struct SrtParser<R: BufRead> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> SrtParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line_no: 0,
        }
    }

    /// Parse the whole stream.
    ///
    /// A counter line that is not a number ends the parse successfully, as
    /// does running out of input. An empty stream, read errors and broken
    /// timing lines are errors.
    pub fn parse(mut self) -> SrtResult<Track> {
        let mut track = Track::new();

        let mut counter_line = self.read_line()?.ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "subtitle stream is empty")
        })?;

        loop {
            let counter = match parse_counter(&counter_line) {
                Some(counter) => counter,
                None => {
                    warn!(
                        "Stopping at line {}: {:?} is not a cue counter",
                        self.line_no,
                        String::from_utf8_lossy(&counter_line)
                    );
                    break;
                }
            };

            let timing_line = match self.read_line()? {
                Some(line) => line,
                None => {
                    debug!("Cue {} has no timing line, dropping it", counter);
                    break;
                }
            };
            let (start, end) = self.parse_timing(&timing_line)?;

            let mut cue = Cue::new(counter, start, end);
            let next = self.read_text(&mut cue)?;
            debug!(
                "Parsed cue {}: {} --> {} ({} text lines)",
                cue.counter,
                cue.start,
                cue.end,
                cue.text.len()
            );
            track.push(cue);

            match next {
                Some(line) => counter_line = line,
                None => break,
            }
        }

        Ok(track)
    }

    /// Read one line with its trailing `\r`/`\n` removed. `None` at end of
    /// stream.
    fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        let mut line = self.buf.as_slice();
        while let [rest @ .., b'\r' | b'\n'] = line {
            line = rest;
        }
        if self.line_no == 1 {
            line = line.strip_prefix(UTF8_BOM).unwrap_or(line);
        }
        Ok(Some(line.to_vec()))
    }

    fn parse_timing(&self, line: &[u8]) -> Result<(TimeCode, TimeCode), ParseError> {
        let line_no = self.line_no;
        let line = std::str::from_utf8(line).map_err(|e| {
            ParseError::new(format!("timing line is not valid text: {}", e)).at_line(line_no)
        })?;
        let start = TimeCode::from_text(line).map_err(|e| e.at_line(line_no))?;

        let end_text = line.get(END_TIMECODE_COLUMN..).ok_or_else(|| {
            ParseError::new(format!(
                "timing line too short: expected {} characters, got {:?}",
                END_TIMECODE_COLUMN + TIMECODE_LEN,
                line
            ))
            .at_line(line_no)
        })?;
        let end = TimeCode::from_text(end_text).map_err(|e| e.at_line(line_no))?;

        Ok((start, end))
    }

    /// Collect text lines into `cue`. Returns the line that follows the
    /// block, or `None` when the stream ended inside it.
    fn read_text(&mut self, cue: &mut Cue) -> io::Result<Option<Vec<u8>>> {
        loop {
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(None),
            };

            if !line.is_empty() {
                cue.text.push(TextLine::from(line));
                continue;
            }

            loop {
                match self.read_line()? {
                    None => return Ok(None),
                    Some(next) if !next.is_empty() => return Ok(Some(next)),
                    Some(_) => cue.text.push(TextLine::default()),
                }
            }
        }
    }
}

/// Counter lines are decimal digits, optionally padded with whitespace.
fn parse_counter(line: &[u8]) -> Option<u64> {
    std::str::from_utf8(line).ok()?.trim().parse().ok()
}

/// Parse a whole SRT stream into a track.
pub fn parse_track<R: BufRead>(reader: R) -> SrtResult<Track> {
    SrtParser::new(reader).parse()
}
