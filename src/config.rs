use serde::Serialize;

/// Line terminator used when writing subtitles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    /// CRLF on Windows, LF everywhere else.
    pub fn native() -> Self {
        if cfg!(windows) {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LineEnding::Lf => "LF",
            LineEnding::CrLf => "CRLF",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        LineEnding::native()
    }
}

/// How counters of the tracks after the first are shifted during a merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Renumbering {
    /// Each track is shifted by the cue count of every track before it.
    #[default]
    Cumulative,
    /// Every track is shifted by the cue count of the first track only.
    /// Third and later tracks end up reusing counters of the second one.
    FirstTrack,
}

/// Settings for a whole read/merge/write run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SrtConfig {
    pub line_ending: LineEnding,
    pub renumbering: Renumbering,
}

impl SrtConfig {
    pub fn new(line_ending: LineEnding, renumbering: Renumbering) -> Self {
        Self {
            line_ending,
            renumbering,
        }
    }
}
