/*!
 * WebVTT parsing and conversion.
 *
 * - `parser`: text to [`SubtitleDocument`], with optional rebasing
 * - `timestamp`: timing token conversion and clock formatting
 * - `style`: inline `<c>` class-tag removal
 * - `rebase`: shifting cue times against a stream base timestamp
 * - `serializer`: WebVTT and SRT output
 *
 * Everything here works on in-memory strings and holds no shared state.
 */

pub mod model;
pub mod parser;
pub mod rebase;
pub mod serializer;
pub mod style;
pub mod timestamp;

pub use model::{Cue, SubtitleDocument};
pub use parser::{parse, ScanState};
pub use rebase::rebase;
pub use serializer::{to_srt_text, to_vtt_text, EMPTY_SRT_PLACEHOLDER};
pub use style::strip_class_tags;
pub use timestamp::{format_srt_timestamp, format_vtt_timestamp, to_duration};
