use chrono::TimeDelta;
use std::fmt;

use super::serializer;

/// One timed caption
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cue {
    /// Start of the cue
    pub start: TimeDelta,

    /// End of the cue; may precede `start`, nothing enforces ordering
    pub end: TimeDelta,

    /// Caption text, source lines collapsed into one string
    pub payload: String,

    /// Raw positioning tokens that followed the end timestamp
    pub settings: Option<String>,
}

impl Cue {
    pub fn new(start: TimeDelta, end: TimeDelta, payload: impl Into<String>) -> Self {
        Cue {
            start,
            end,
            payload: payload.into(),
            settings: None,
        }
    }

    /// Attach positioning settings; an empty string means none
    pub fn with_settings(mut self, settings: impl Into<String>) -> Self {
        let settings = settings.into();
        self.settings = if settings.is_empty() { None } else { Some(settings) };
        self
    }

    /// Whether the cue has text worth emitting
    pub fn has_payload(&self) -> bool {
        !self.payload.trim().is_empty()
    }

    pub fn start_ms(&self) -> i64 {
        self.start.num_milliseconds()
    }

    pub fn end_ms(&self) -> i64 {
        self.end.num_milliseconds()
    }
}

/// Parsed WebVTT document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleDocument {
    /// Cues in source order
    pub cues: Vec<Cue>,

    /// `MPEGTS` value of the `X-TIMESTAMP-MAP` header, 0 when absent
    pub mpegts_timestamp: i64,
}

impl SubtitleDocument {
    pub fn new(cues: Vec<Cue>, mpegts_timestamp: i64) -> Self {
        SubtitleDocument { cues, mpegts_timestamp }
    }

    /// Cues that survive serialization, in order
    pub fn visible_cues(&self) -> impl Iterator<Item = &Cue> {
        self.cues.iter().filter(|cue| cue.has_payload())
    }

    /// Consume the document and return it with rebased cue times
    pub fn rebased(self, base_timestamp_ms: i64) -> Self {
        SubtitleDocument {
            cues: super::rebase::rebase(&self.cues, base_timestamp_ms),
            mpegts_timestamp: self.mpegts_timestamp,
        }
    }

    pub fn to_vtt_text(&self) -> String {
        serializer::to_vtt_text(self)
    }

    pub fn to_srt_text(&self) -> String {
        serializer::to_srt_text(self)
    }
}

/// Renders the WebVTT cue body without the `WEBVTT` header
impl fmt::Display for SubtitleDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&serializer::vtt_body(self))
    }
}
