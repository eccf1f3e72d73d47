use super::merger::merge_tracks_with;
use super::parser::parse_track;
use super::types::Track;
use super::writer::SrtWriter;
use crate::config::{LineEnding, SrtConfig};
use crate::errors::SrtResult;
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read and parse one SRT file.
pub fn read_track<P: AsRef<Path>>(path: P) -> SrtResult<Track> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let track = parse_track(BufReader::new(file))?;
    info!("Read {} cues from {}", track.len(), path.display());
    Ok(track)
}

/// Create (or truncate) `path` and write all tracks to it in order.
pub fn write_tracks<P: AsRef<Path>>(
    tracks: &[Track],
    path: P,
    line_ending: LineEnding,
) -> SrtResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = SrtWriter::new(BufWriter::new(file), line_ending);
    writer.write_tracks(tracks)?;
    let written = writer.written();
    writer.finish()?;
    info!(
        "Wrote {} cues to {} ({} line endings)",
        written,
        path.display(),
        line_ending.name()
    );
    Ok(())
}

/// Read every input, merge them with the given offsets and write the result.
/// Returns the number of cues written.
pub fn merge_files<P, Q, S>(
    inputs: &[P],
    offsets: &[S],
    output: Q,
    config: &SrtConfig,
) -> SrtResult<usize>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: AsRef<str>,
{
    let mut tracks = inputs
        .iter()
        .map(read_track)
        .collect::<SrtResult<Vec<Track>>>()?;

    merge_tracks_with(&mut tracks, offsets, config.renumbering)?;
    write_tracks(&tracks, output, config.line_ending)?;

    Ok(tracks.iter().map(Track::len).sum())
}
