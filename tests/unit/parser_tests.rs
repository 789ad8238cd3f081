/*!
 * Tests for WebVTT parsing
 */

use chrono::TimeDelta;
use subvtt::errors::SubtitleError;
use subvtt::webvtt::{parse, to_duration};
use crate::common;

/// Test that text without the signature is rejected
#[test]
fn test_parse_withoutWebvttHeader_shouldFailWithMissingHeader() {
    for text in ["", "   ", "1\n00:00:01,000 --> 00:00:02,000\nHi\n", "webvtt\n\n", "NOTE\nWEBVTT\n"] {
        let result = parse(text, None);
        assert_eq!(result.unwrap_err(), SubtitleError::MissingHeader, "input: {:?}", text);
    }
}

/// Test that leading whitespace before the header is tolerated
#[test]
fn test_parse_withLeadingWhitespace_shouldAcceptHeader() {
    let doc = parse("\n\n  WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nHi\n\n", None).unwrap();
    assert_eq!(doc.cues.len(), 1);
}

/// Test parsing a realistic document
#[test]
fn test_parse_withSampleDocument_shouldExtractAllCuesInOrder() {
    common::init_test_logging();
    let doc = parse(common::SAMPLE_VTT, None).unwrap();

    assert_eq!(doc.mpegts_timestamp, 900_000);
    assert_eq!(doc.cues.len(), 3);

    assert_eq!(doc.cues[0].start_ms(), 1_000);
    assert_eq!(doc.cues[0].end_ms(), 4_000);
    assert_eq!(doc.cues[0].payload, "This is a test subtitle.");
    assert_eq!(doc.cues[0].settings, None);

    // Payload lines are concatenated without a separator
    assert_eq!(doc.cues[1].payload, "It containsmultiple lines.");
    assert_eq!(doc.cues[1].settings.as_deref(), Some("align:start position:10%"));

    // Class-tag stripping drops the text around the span
    assert_eq!(doc.cues[2].payload, "testing");
    assert_eq!(doc.cues[2].start, TimeDelta::seconds(10));
}

/// Test that the cue count matches the number of well-formed blocks
#[test]
fn test_parse_withManyBlocks_shouldYieldOneCuePerBlock() {
    let blocks: Vec<(String, String)> = (0..25)
        .map(|i| {
            (
                format!("00:00:{:02}.000 --> 00:00:{:02}.500", i, i),
                format!("line {}", i),
            )
        })
        .collect();
    let refs: Vec<(&str, &str)> = blocks.iter().map(|(t, p)| (t.as_str(), p.as_str())).collect();

    let doc = parse(&common::build_vtt(&refs), None).unwrap();
    assert_eq!(doc.cues.len(), 25);
    for (i, cue) in doc.cues.iter().enumerate() {
        assert_eq!(cue.payload, format!("line {}", i));
        assert_eq!(cue.start_ms(), i as i64 * 1_000);
    }
}

/// Test that empty payload blocks are excluded
#[test]
fn test_parse_withBlankPayloadBlock_shouldSkipIt() {
    let text = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\n\n00:00:03.000 --> 00:00:04.000\nkept\n\n";
    let doc = parse(text, None).unwrap();
    assert_eq!(doc.cues.len(), 1);
    assert_eq!(doc.cues[0].payload, "kept");
}

/// Test that a payload reduced to nothing by the stripper is still a cue
#[test]
fn test_parse_withEmptyClassSpan_shouldKeepCueWithEmptyPayload() {
    let text = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nwords <c.x></c>\n\n";
    let doc = parse(text, None).unwrap();
    assert_eq!(doc.cues.len(), 1);
    assert_eq!(doc.cues[0].payload, "");
    assert_eq!(doc.visible_cues().count(), 0);
}

/// Test that lines without the separator do not open cues
#[test]
fn test_parse_withMalformedTimingLines_shouldIgnoreThem() {
    let text = "WEBVTT\n\n00:00:01.000-->00:00:02.000\nno spaces\n\n -->\nlonely\n\n00:00:05.000 --> 00:00:06.000\nok\n\n";
    let doc = parse(text, None).unwrap();
    assert_eq!(doc.cues.len(), 1);
    assert_eq!(doc.cues[0].payload, "ok");
}

/// Test the single-token timing line
#[test]
fn test_parse_withMissingEndTimestamp_shouldDiscardCue() {
    let text = "WEBVTT\n\n00:00:01.000 --> \npayload\n\n";
    let doc = parse(text, None).unwrap();
    assert!(doc.cues.is_empty());
}

/// Test that a second timing line inside an open block replaces it entirely
#[test]
fn test_parse_withTimingLineInsideOpenBlock_shouldDropEarlierPayload() {
    let text = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nA\n00:00:03.000 --> 00:00:04.000\nB\n\n";
    let doc = parse(text, None).unwrap();
    assert_eq!(doc.cues.len(), 1);
    assert_eq!(doc.cues[0].start_ms(), 3_000);
    assert_eq!(doc.cues[0].end_ms(), 4_000);
    assert_eq!(doc.cues[0].payload, "B");
}

/// Test CRLF input
#[test]
fn test_parse_withCrlfLineEndings_shouldTrimCarriageReturns() {
    let text = "WEBVTT\r\n\r\n00:00:01.000 --> 00:00:02.000 line:0\r\nHello\r\n\r\n";
    let doc = parse(text, None).unwrap();
    assert_eq!(doc.cues.len(), 1);
    assert_eq!(doc.cues[0].payload, "Hello");
    assert_eq!(doc.cues[0].settings.as_deref(), Some("line:0"));
}

/// Test that the document without a timestamp map has a zero MPEGTS value
#[test]
fn test_parse_withoutTimestampMap_shouldDefaultToZero() {
    let doc = parse("WEBVTT\n", None).unwrap();
    assert_eq!(doc.mpegts_timestamp, 0);
    assert!(doc.cues.is_empty());
}

/// Test rebasing through the parser when every cue qualifies
#[test]
fn test_parse_withBaseTimestamp_shouldShiftCues() {
    let doc = parse(common::SAMPLE_VTT, Some(1_000)).unwrap();
    let starts: Vec<i64> = doc.cues.iter().map(|c| c.start_ms()).collect();
    let ends: Vec<i64> = doc.cues.iter().map(|c| c.end_ms()).collect();
    assert_eq!(starts, vec![0, 4_000, 9_000]);
    assert_eq!(ends, vec![3_000, 8_000, 13_000]);
}

/// Test the early exit: a leading cue before the base halts all rebasing
#[test]
fn test_parse_withFirstCueBeforeBase_shouldLeaveAllCuesUntouched() {
    let text = common::build_vtt(&[
        ("00:00:03.000 --> 00:00:04.000", "a"),
        ("00:00:06.000 --> 00:00:07.000", "b"),
        ("00:00:08.000 --> 00:00:09.000", "c"),
    ]);
    let doc = parse(&text, Some(5_000)).unwrap();
    let starts: Vec<i64> = doc.cues.iter().map(|c| c.start_ms()).collect();
    assert_eq!(starts, vec![3_000, 6_000, 8_000]);
}

/// Test the converter values called out for timing tokens
#[test]
fn test_toDuration_withDocumentedExamples_shouldMatchExactly() {
    assert_eq!(to_duration("01:02:03.456").num_milliseconds(), 3_723_456);
    assert_eq!(to_duration("12.5s").num_milliseconds(), 12_500);
    assert_eq!(to_duration("bad:val"), TimeDelta::zero());
}
