pub mod timecode;
pub use timecode::{parse_offset, TimeCode};

pub mod subtitles;
pub use subtitles::{
    merge_files, merge_tracks, merge_tracks_with, parse_track, read_track, write_tracks, Cue,
    SrtParser, SrtWriter, TextLine, Track,
};

pub mod config;
pub use config::{LineEnding, Renumbering, SrtConfig};

pub mod errors;
pub use errors::{MergeError, ParseError, SrtError, SrtResult};
