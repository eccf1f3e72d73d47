mod files;
mod merger;
mod parser;
mod types;
mod writer;

pub use files::{merge_files, read_track, write_tracks};
pub use merger::{merge_tracks, merge_tracks_with};
pub use parser::{parse_track, SrtParser};
pub use types::{Cue, TextLine, Track, TIMECODE_SEPARATOR};
pub use writer::SrtWriter;

#[cfg(test)]
pub mod unit_test;
