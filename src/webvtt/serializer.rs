use std::fmt::Write;

use super::model::SubtitleDocument;
use super::timestamp::{format_srt_timestamp, format_vtt_timestamp};

/// SRT text emitted when no cue has a payload
pub const EMPTY_SRT_PLACEHOLDER: &str = "1\n00:00:00,000 --> 00:00:01,000";

/// Cue blocks in WebVTT syntax, without the `WEBVTT` header
pub fn vtt_body(doc: &SubtitleDocument) -> String {
    let mut out = String::new();
    for cue in doc.visible_cues() {
        // Writing into a String cannot fail
        let _ = write!(
            out,
            "{} --> {} ",
            format_vtt_timestamp(cue.start),
            format_vtt_timestamp(cue.end)
        );
        // The separator space is written even without settings
        if let Some(settings) = &cue.settings {
            out.push_str(settings);
        }
        out.push('\n');
        out.push_str(&cue.payload);
        out.push_str("\n\n");
    }
    out
}

/// Serialize a document as WebVTT
pub fn to_vtt_text(doc: &SubtitleDocument) -> String {
    format!("WEBVTT\n\n{}", vtt_body(doc))
}

/// Serialize a document as SRT.
///
/// Positioning settings have no SRT equivalent and are dropped. A document
/// without visible cues yields [`EMPTY_SRT_PLACEHOLDER`].
pub fn to_srt_text(doc: &SubtitleDocument) -> String {
    let mut out = String::new();
    for (index, cue) in doc.visible_cues().enumerate() {
        let _ = write!(
            out,
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            format_srt_timestamp(cue.start),
            format_srt_timestamp(cue.end),
            cue.payload
        );
    }

    if out.is_empty() {
        return EMPTY_SRT_PLACEHOLDER.to_string();
    }
    out
}
