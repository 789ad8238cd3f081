/*!
 * # subvtt - WebVTT subtitle parsing and conversion
 *
 * A Rust library (and CLI) that turns WebVTT segments, such as those served
 * alongside HLS live streams, into structured cues and re-serializes them
 * as WebVTT or SRT.
 *
 * ## Features
 *
 * - Parse WebVTT text into timed cues
 * - Read the `X-TIMESTAMP-MAP` MPEG-TS reference value
 * - Rebase cue times against a stream base timestamp
 * - Strip inline `<c>` class-tag markup
 * - Serialize to WebVTT or SRT
 * - Convert single files or whole directory trees from the command line
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `webvtt`: parser, timestamp conversion, style stripping, rebasing and serialization
 * - `app_config`: Configuration management
 * - `app_controller`: File and folder conversion workflow
 * - `file_utils`: File system operations
 * - `logger`: Console and log-file logger
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod logger;
pub mod webvtt;

// Re-export main types for easier usage
pub use app_config::{Config, SubtitleFormat};
pub use app_controller::{ConversionOutcome, Controller, FolderSummary};
pub use errors::{AppError, ConfigError, SubtitleError};
pub use webvtt::{parse, to_srt_text, to_vtt_text, Cue, SubtitleDocument};
