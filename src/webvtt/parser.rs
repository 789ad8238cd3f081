/*!
 * WebVTT structure parser.
 *
 * Scans the input line by line with a two-state machine:
 * - `ScanningForCue`: waiting for a timing line (one containing ` --> `)
 * - `AccumulatingPayload`: collecting the trimmed, non-blank payload lines
 *
 * A blank line closes the open cue. A cue still open when input ends is
 * dropped. Malformed timing lines and empty payloads are skipped without
 * error; the only failure is a missing `WEBVTT` header.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use super::model::{Cue, SubtitleDocument};
use super::style::strip_class_tags;
use super::timestamp::to_duration;
use crate::errors::SubtitleError;

const HEADER: &str = "WEBVTT";
const TIMING_SEPARATOR: &str = " --> ";

static TIMESTAMP_MAP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"X-TIMESTAMP-MAP.*").expect("timestamp map regex is valid"));

static MPEGTS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"MPEGTS:(\d+)").expect("mpegts regex is valid"));

/// Line scanner state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// Outside any cue block
    ScanningForCue,
    /// Inside a cue block opened by `timing_line`
    AccumulatingPayload {
        timing_line: String,
        payload_lines: Vec<String>,
    },
}

impl ScanState {
    /// Advance the machine by one line.
    ///
    /// Returns the next state and, when a blank line closes a cue block,
    /// the cue built from it (if the block was usable).
    pub fn step(self, line: &str) -> (ScanState, Option<Cue>) {
        if line.contains(TIMING_SEPARATOR) {
            if let ScanState::AccumulatingPayload { timing_line, .. } = &self {
                debug!("Timing line '{}' superseded before its block closed", timing_line);
            }
            return (
                ScanState::AccumulatingPayload {
                    timing_line: line.trim().to_string(),
                    payload_lines: Vec::new(),
                },
                None,
            );
        }

        match self {
            ScanState::ScanningForCue => (ScanState::ScanningForCue, None),
            ScanState::AccumulatingPayload {
                timing_line,
                mut payload_lines,
            } => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    let cue = build_cue(&timing_line, &payload_lines);
                    (ScanState::ScanningForCue, cue)
                } else {
                    payload_lines.push(trimmed.to_string());
                    (
                        ScanState::AccumulatingPayload {
                            timing_line,
                            payload_lines,
                        },
                        None,
                    )
                }
            }
        }
    }
}

/// Build a cue from a closed block, or `None` if the block is unusable
fn build_cue(timing_line: &str, payload_lines: &[String]) -> Option<Cue> {
    let payload = payload_lines.concat();
    if payload.trim().is_empty() {
        debug!("Skipping cue with empty payload: {}", timing_line);
        return None;
    }

    let without_arrow = timing_line.replace("-->", "");
    let tokens: Vec<&str> = without_arrow.split_whitespace().collect();
    if tokens.len() < 2 {
        debug!("Skipping cue with incomplete timing line: {}", timing_line);
        return None;
    }

    let cue = Cue::new(
        to_duration(tokens[0]),
        to_duration(tokens[1]),
        strip_class_tags(&payload),
    )
    .with_settings(tokens[2..].join(" "));

    Some(cue)
}

/// First `MPEGTS` value found on the `X-TIMESTAMP-MAP` line
fn extract_mpegts(text: &str) -> i64 {
    TIMESTAMP_MAP_REGEX
        .find(text)
        .and_then(|map_line| MPEGTS_REGEX.captures(map_line.as_str()))
        .and_then(|caps| caps.get(1))
        .and_then(|value| value.as_str().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Parse WebVTT text into a document.
///
/// When `base_timestamp_ms` is present and non-zero, cue times are rebased
/// against it (see [`super::rebase::rebase`]).
pub fn parse(text: &str, base_timestamp_ms: Option<i64>) -> Result<SubtitleDocument, SubtitleError> {
    if !text.trim().starts_with(HEADER) {
        return Err(SubtitleError::MissingHeader);
    }

    let mpegts_timestamp = extract_mpegts(text);

    let mut cues = Vec::new();
    let mut state = ScanState::ScanningForCue;
    for line in text.split('\n') {
        let (next, cue) = state.step(line);
        if let Some(cue) = cue {
            cues.push(cue);
        }
        state = next;
    }

    if let ScanState::AccumulatingPayload { timing_line, .. } = &state {
        debug!("Dropping unterminated cue at end of input: {}", timing_line);
    }

    let document = SubtitleDocument::new(cues, mpegts_timestamp);
    match base_timestamp_ms {
        Some(base) if base != 0 => Ok(document.rebased(base)),
        _ => Ok(document),
    }
}
