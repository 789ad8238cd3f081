/*!
 * Timing token conversion.
 *
 * Converts the start/end tokens of a cue timing line into signed durations.
 * Accepted shapes:
 * - `12.5s` (float seconds)
 * - `MM:SS.mmm`, `HH:MM:SS.mmm`, `HH:MM:SS,mmm` and longer `:` chains
 *
 * Conversion never fails: a component that does not parse contributes zero.
 */

use chrono::TimeDelta;

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MILLI: i64 = 1_000_000;

/// Convert a timing token into a duration
pub fn to_duration(token: &str) -> TimeDelta {
    let token = token.trim();

    if let Some(seconds) = token.strip_suffix('s') {
        return match seconds.parse::<f64>() {
            // Float to int casts saturate, NaN becomes zero
            Ok(secs) => TimeDelta::nanoseconds((secs * NANOS_PER_SECOND as f64) as i64),
            Err(_) => TimeDelta::zero(),
        };
    }

    let normalized = token.replace(',', ".");
    let mut parts = normalized.split('.');
    let clock = parts.next().unwrap_or_default();
    let millis = parts
        .next()
        .map(|ms| ms.parse::<i64>().unwrap_or(0))
        .unwrap_or(0);

    let mut nanos: i64 = 0;
    let mut weight: i64 = 1;
    for component in clock.split(':').rev() {
        let value = component.parse::<i64>().unwrap_or(0);
        nanos = nanos.saturating_add(
            value
                .saturating_mul(weight)
                .saturating_mul(NANOS_PER_SECOND),
        );
        weight = weight.saturating_mul(60);
    }

    TimeDelta::nanoseconds(nanos.saturating_add(millis.saturating_mul(NANOS_PER_MILLI)))
}

/// Split a duration into clock fields for display.
///
/// Fields are derived from whole milliseconds with truncating division, so
/// hours are unbounded and negative durations yield negative fields.
pub(crate) fn clock_fields(duration: TimeDelta) -> (i64, i64, i64, i64) {
    let ms = duration.num_milliseconds();
    let hours = ms / 3_600_000;
    let minutes = (ms / 60_000) % 60;
    let seconds = (ms / 1_000) % 60;
    let millis = ms % 1_000;
    (hours, minutes, seconds, millis)
}

/// Format a duration as a WebVTT timestamp (`HH:MM:SS.mmm`)
pub fn format_vtt_timestamp(duration: TimeDelta) -> String {
    let (h, m, s, ms) = clock_fields(duration);
    format!("{:02}:{:02}:{:02}.{:03}", h, m, s, ms)
}

/// Format a duration as an SRT timestamp (`HH:MM:SS,mmm`)
pub fn format_srt_timestamp(duration: TimeDelta) -> String {
    let (h, m, s, ms) = clock_fields(duration);
    format!("{:02}:{:02}:{:02},{:03}", h, m, s, ms)
}
