use super::types::Track;
use crate::config::LineEnding;
use std::io::{self, Write};

/// Writes tracks back out as SRT, in the order given.
///
/// Cues are written exactly as they are; numbering and timing must already
/// be final.
pub struct SrtWriter<W: Write> {
    writer: W,
    line_ending: LineEnding,
    written: usize,
}

impl<W: Write> SrtWriter<W> {
    pub fn new(writer: W, line_ending: LineEnding) -> Self {
        Self {
            writer,
            line_ending,
            written: 0,
        }
    }

    pub fn write_track(&mut self, track: &Track) -> io::Result<()> {
        for cue in track {
            cue.write_to(&mut self.writer, self.line_ending)?;
            self.written += 1;
        }
        Ok(())
    }

    pub fn write_tracks(&mut self, tracks: &[Track]) -> io::Result<()> {
        for track in tracks {
            self.write_track(track)?;
        }
        Ok(())
    }

    /// Number of cues written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
