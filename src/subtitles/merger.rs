use super::types::Track;
use crate::config::Renumbering;
use crate::errors::{MergeError, SrtResult};
use crate::timecode::parse_offset;
use log::debug;
use std::time::Duration;

/// Merge tracks into one timeline using cumulative renumbering.
///
/// See [`merge_tracks_with`].
pub fn merge_tracks<S: AsRef<str>>(tracks: &mut [Track], offsets: &[S]) -> SrtResult<()> {
    merge_tracks_with(tracks, offsets, Renumbering::default())
}

/// Renumber and shift every track after the first, in place.
///
/// `offsets[i - 1]` is added to every start and end time of `tracks[i]`.
/// There must be exactly one offset per track after the first. Offsets are
/// parsed and new counters checked for overflow before anything is changed,
/// so on error the tracks are left as they were.
pub fn merge_tracks_with<S: AsRef<str>>(
    tracks: &mut [Track],
    offsets: &[S],
    renumbering: Renumbering,
) -> SrtResult<()> {
    let expected = tracks.len().saturating_sub(1);
    if offsets.len() != expected {
        return Err(MergeError::new(format!(
            "{} tracks need {} offsets, got {}",
            tracks.len(),
            expected,
            offsets.len()
        ))
        .into());
    }

    let offsets = offsets
        .iter()
        .map(|offset| parse_offset(offset.as_ref()))
        .collect::<Result<Vec<Duration>, _>>()?;

    let Some((first, rest)) = tracks.split_first_mut() else {
        return Ok(());
    };

    let first_len = first.len() as u64;
    let mut preceding = first_len;
    let mut bases = Vec::with_capacity(rest.len());

    for (i, track) in rest.iter().enumerate() {
        let base = match renumbering {
            Renumbering::Cumulative => preceding,
            Renumbering::FirstTrack => first_len,
        };

        if let Some(cue) = track
            .iter()
            .find(|cue| cue.counter.checked_add(base).is_none())
        {
            return Err(MergeError::new(format!(
                "counter {} in track {} overflows when shifted by {}",
                cue.counter,
                i + 1,
                base
            ))
            .into());
        }

        bases.push(base);
        preceding = preceding.saturating_add(track.len() as u64);
    }

    for (i, ((track, offset), base)) in rest.iter_mut().zip(offsets).zip(bases).enumerate() {
        for cue in track.iter_mut() {
            cue.counter += base;
            cue.start.shift(offset);
            cue.end.shift(offset);
        }

        debug!(
            "Merged track {}: {} cues, counters +{}, times +{}ms",
            i + 1,
            track.len(),
            base,
            offset.as_millis()
        );
    }

    Ok(())
}
