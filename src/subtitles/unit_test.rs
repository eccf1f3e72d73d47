use crate::config::{LineEnding, Renumbering};
use crate::errors::SrtError;
use crate::subtitles::{merge_tracks, merge_tracks_with, parse_track, Cue, SrtWriter, Track};
use std::io::{self, Cursor};

#[cfg(test)]
mod test_helpers {
    use crate::config::LineEnding;
    use crate::errors::SrtError;
    use crate::subtitles::{parse_track, Cue, SrtWriter, Track};
    use crate::timecode::TimeCode;
    use std::io::Cursor;

    pub const TWO_CUES: &str = "1\n\
00:00:01,000 --> 00:00:02,500\n\
Hello\n\
World\n\
\n\
2\n\
00:00:03,000 --> 00:00:04,000\n\
Second\n\
\n";

    pub fn parse(text: &str) -> Result<Track, SrtError> {
        parse_track(Cursor::new(text.as_bytes().to_vec()))
    }

    pub fn tc(text: &str) -> TimeCode {
        TimeCode::from_text(text).unwrap()
    }

    /// Track of `len` one-second cues numbered from 1.
    pub fn mock_track(len: u64) -> Track {
        (1..=len)
            .map(|i| {
                let second = i as u32;
                Cue::new(
                    i,
                    TimeCode::from_parts(0, 0, second, 0),
                    TimeCode::from_parts(0, 0, second, 900),
                )
                .with_text([format!("cue {}", i)])
            })
            .collect::<Vec<_>>()
            .into()
    }

    pub fn counters(track: &Track) -> Vec<u64> {
        track.iter().map(|cue| cue.counter).collect()
    }

    pub fn render(tracks: &[Track], line_ending: LineEnding) -> String {
        let mut writer = SrtWriter::new(Vec::new(), line_ending);
        writer.write_tracks(tracks).unwrap();
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }
}

use test_helpers::*;

#[test]
fn test_parse_two_cues() {
    let track = parse(TWO_CUES).unwrap();
    assert_eq!(track.len(), 2);

    let first = &track.cues[0];
    assert_eq!(first.counter, 1);
    assert_eq!(first.start, tc("00:00:01,000"));
    assert_eq!(first.end, tc("00:00:02,500"));
    assert_eq!(first.text, vec!["Hello", "World"]);

    let second = &track.cues[1];
    assert_eq!(second.counter, 2);
    assert_eq!(second.text, vec!["Second"]);
}

#[test]
fn test_crlf_input_matches_lf_input() {
    let crlf = TWO_CUES.replace('\n', "\r\n");
    assert_eq!(parse(&crlf).unwrap(), parse(TWO_CUES).unwrap());
}

#[test]
fn test_extra_blank_lines_stay_in_text() {
    let input = "1\n00:00:01,000 --> 00:00:02,000\nline1\n\n\n\n2\n00:00:03,000 --> 00:00:04,000\nnext\n";
    let track = parse(input).unwrap();
    assert_eq!(track.cues[0].text, vec!["line1", "", ""]);
    assert_eq!(track.cues[1].text, vec!["next"]);

    let output = render(&[track.clone()], LineEnding::Lf);
    assert!(output.starts_with("1\n00:00:01,000 --> 00:00:02,000\nline1\n\n\n\n2\n"));
    assert_eq!(parse(&output).unwrap(), track);
}

#[test]
fn test_trailing_blank_lines_at_end_of_stream() {
    let track = parse("1\n00:00:01,000 --> 00:00:02,000\nbye\n\n\n").unwrap();
    assert_eq!(track.len(), 1);
    assert_eq!(track.cues[0].text, vec!["bye", ""]);
}

#[test]
fn test_non_numeric_counter_ends_parse() {
    let input = format!("{}abc\n", TWO_CUES);
    let track = parse(&input).unwrap();
    assert_eq!(track, parse(TWO_CUES).unwrap());

    let garbage_first = parse("not a counter\n00:00:01,000 --> 00:00:02,000\n").unwrap();
    assert!(garbage_first.is_empty());
}

#[test]
fn test_header_without_timing_is_dropped() {
    let input = format!("{}3\n", TWO_CUES);
    let track = parse(&input).unwrap();
    assert_eq!(counters(&track), vec![1, 2]);
}

#[test]
fn test_last_line_without_terminator() {
    let track = parse("1\n00:00:01,000 --> 00:00:02,000\nno newline").unwrap();
    assert_eq!(track.cues[0].text, vec!["no newline"]);
}

#[test]
fn test_cue_without_text() {
    let track = parse("1\n00:00:01,000 --> 00:00:02,000\n\n2\n00:00:03,000 --> 00:00:04,000\nx\n").unwrap();
    assert!(track.cues[0].text.is_empty());
    assert_eq!(track.cues[1].text, vec!["x"]);
}

#[test]
fn test_byte_order_mark_is_skipped() {
    let input = format!("\u{feff}{}", TWO_CUES);
    assert_eq!(parse(&input).unwrap().len(), 2);
}

#[test]
fn test_source_numbering_and_reversed_times_are_kept() {
    let track = parse("42\n00:00:05,000 --> 00:00:01,000\nbackwards\n").unwrap();
    let cue = &track.cues[0];
    assert_eq!(cue.counter, 42);
    assert!(cue.start > cue.end);
}

#[test]
fn test_empty_stream_is_an_io_error() {
    match parse("") {
        Err(SrtError::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("expected I/O error, got {:?}", other),
    }
}

#[test]
fn test_empty_stream_converts_to_io_error() {
    let err: io::Error = parse("").unwrap_err().into();
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

    let err: io::Error = parse("1\nbroken\n").unwrap_err().into();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}

#[test]
fn test_latin1_text_round_trips_byte_for_byte() {
    let input: &[u8] = b"1\n00:00:01,000 --> 00:00:02,000\ncaf\xe9 cr\xe8me\n\n";
    let track = parse_track(Cursor::new(input.to_vec())).unwrap();

    assert_eq!(track.len(), 1);
    assert_eq!(track.cues[0].text[0].as_bytes(), b"caf\xe9 cr\xe8me");
    assert_eq!(track.cues[0].text[0].to_string(), "caf\u{fffd} cr\u{fffd}me");

    let mut writer = SrtWriter::new(Vec::new(), LineEnding::Lf);
    writer.write_track(&track).unwrap();
    assert_eq!(writer.finish().unwrap(), input);
}

#[test]
fn test_non_utf8_counter_ends_parse() {
    let mut input = TWO_CUES.as_bytes().to_vec();
    input.extend_from_slice(b"\xff\xfe\n");
    let track = parse_track(Cursor::new(input)).unwrap();
    assert_eq!(track, parse(TWO_CUES).unwrap());
}

#[test]
fn test_non_utf8_timing_line_is_a_parse_error() {
    let input = b"1\n00:00:01,000 --> 00:00:0\xff,000\nHi\n".to_vec();
    match parse_track(Cursor::new(input)) {
        Err(SrtError::Parse(err)) => assert_eq!(err.line, Some(2)),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_text_after_single_blank_line_is_read_as_counter() {
    // "line2" follows the blank line that closes the block, so it is taken as
    // the next counter; it is not a number, which ends the parse
    let track = parse("1\n00:00:01,000 --> 00:00:02,000\nline1\n\nline2\n").unwrap();
    assert_eq!(track.len(), 1);
    assert_eq!(track.cues[0].text, vec!["line1"]);
}

#[test]
fn test_broken_timing_line_is_a_parse_error() {
    match parse("1\n00:00:01,000 --> xx:00:02,000\nHi\n") {
        Err(SrtError::Parse(err)) => {
            assert_eq!(err.line, Some(2));
            assert!(err.message.contains("hour"), "{}", err);
        }
        other => panic!("expected parse error, got {:?}", other),
    }

    match parse("1\n00:00:01,000\nHi\n") {
        Err(SrtError::Parse(err)) => assert_eq!(err.line, Some(2)),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_cue_block_format() {
    let cue = Cue::new(3, tc("00:00:01,000"), tc("00:00:02,500")).with_text(["a", "b"]);
    assert_eq!(cue.to_string(), "3\n00:00:01,000 --> 00:00:02,500\na\nb\n\n");

    let mut crlf = Vec::new();
    cue.write_to(&mut crlf, LineEnding::CrLf).unwrap();
    assert_eq!(
        String::from_utf8(crlf).unwrap(),
        "3\r\n00:00:01,000 --> 00:00:02,500\r\na\r\nb\r\n\r\n"
    );
}

#[test]
fn test_writer_keeps_track_and_cue_order() {
    let mut second = mock_track(1);
    second.cues[0].counter = 9;
    let output = render(&[parse(TWO_CUES).unwrap(), second], LineEnding::Lf);

    let expected = format!("{}9\n00:00:01,000 --> 00:00:01,900\ncue 1\n\n", TWO_CUES);
    assert_eq!(output, expected);
}

#[test]
fn test_round_trip_single_track() {
    let track = parse(TWO_CUES).unwrap();
    let output = render(&[track.clone()], LineEnding::Lf);
    assert_eq!(output, TWO_CUES);
    assert_eq!(parse(&output).unwrap(), track);

    let crlf = render(&[track.clone()], LineEnding::CrLf);
    assert_eq!(parse(&crlf).unwrap(), track);
}

#[test]
fn test_merge_first_track_numbering() {
    let mut tracks = vec![mock_track(3), mock_track(2), mock_track(4)];
    merge_tracks_with(
        &mut tracks,
        &["00:00:05,000", "00:00:10,000"],
        Renumbering::FirstTrack,
    )
    .unwrap();

    assert_eq!(counters(&tracks[0]), vec![1, 2, 3]);
    assert_eq!(counters(&tracks[1]), vec![4, 5]);
    assert_eq!(counters(&tracks[2]), vec![4, 5, 6, 7]);
}

#[test]
fn test_merge_cumulative_numbering_and_shift() {
    let mut tracks = vec![mock_track(3), mock_track(2), mock_track(4)];
    merge_tracks(&mut tracks, &["00:00:05,000", "00:00:10,000"]).unwrap();

    assert_eq!(counters(&tracks[0]), vec![1, 2, 3]);
    assert_eq!(counters(&tracks[1]), vec![4, 5]);
    assert_eq!(counters(&tracks[2]), vec![6, 7, 8, 9]);

    assert_eq!(tracks[0], mock_track(3));
    assert_eq!(tracks[1].cues[0].start, tc("00:00:06,000"));
    assert_eq!(tracks[1].cues[0].end, tc("00:00:06,900"));
    assert_eq!(tracks[2].cues[3].start, tc("00:00:14,000"));
    assert_eq!(tracks[2].cues[3].end, tc("00:00:14,900"));
    // text is untouched
    assert_eq!(tracks[2].cues[3].text, vec!["cue 4"]);
}

#[test]
fn test_merge_offset_count_mismatch() {
    let mut tracks = vec![mock_track(1), mock_track(1), mock_track(1)];
    let result = merge_tracks(&mut tracks, &["00:00:01,000"]);
    assert!(matches!(result, Err(SrtError::Merge(_))));
    assert_eq!(tracks[1], mock_track(1));

    let result = merge_tracks(&mut tracks[..1], &["00:00:01,000"]);
    assert!(matches!(result, Err(SrtError::Merge(_))));
}

#[test]
fn test_merge_bad_offset_leaves_tracks_untouched() {
    let mut tracks = vec![mock_track(2), mock_track(2), mock_track(2)];
    let result = merge_tracks(&mut tracks, &["00:00:01,000", "00:0x:00,000"]);
    assert!(matches!(result, Err(SrtError::Parse(_))));
    assert_eq!(tracks[1], mock_track(2));
    assert_eq!(tracks[2], mock_track(2));
}

#[test]
fn test_merge_counter_overflow_leaves_tracks_untouched() {
    let mut huge = mock_track(1);
    huge.cues[0].counter = u64::MAX;
    let mut tracks = vec![mock_track(1), mock_track(2), huge.clone()];

    match merge_tracks(&mut tracks, &["00:00:01,000", "00:00:02,000"]) {
        Err(SrtError::Merge(err)) => {
            assert!(err.message.contains("18446744073709551615"), "{}", err)
        }
        other => panic!("expected merge error, got {:?}", other),
    }
    assert_eq!(tracks[1], mock_track(2));
    assert_eq!(tracks[2], huge);
}

#[test]
fn test_writer_finish_reports_flush_error() {
    struct FailingFlush;

    impl io::Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
    }

    let mut writer = SrtWriter::new(FailingFlush, LineEnding::Lf);
    writer.write_track(&mock_track(2)).unwrap();
    assert_eq!(writer.written(), 2);
    assert!(writer.finish().is_err());
}

#[test]
fn test_merge_single_and_no_tracks() {
    let mut single = vec![mock_track(2)];
    merge_tracks::<&str>(&mut single, &[]).unwrap();
    assert_eq!(single[0], mock_track(2));

    let mut none: Vec<Track> = Vec::new();
    merge_tracks::<&str>(&mut none, &[]).unwrap();
}

#[test]
fn test_cue_serializes_with_text_time_codes() {
    let cue = Cue::new(1, tc("00:00:01,000"), tc("00:00:02,500")).with_text(["Hello"]);
    let value = serde_json::to_value(&cue).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "counter": 1,
            "start": "00:00:01,000",
            "end": "00:00:02,500",
            "text": ["Hello"],
        })
    );
}
