use chrono::TimeDelta;
use log::debug;

use super::model::Cue;

/// Shift cue times back by `base_timestamp_ms`, producing a new sequence.
///
/// Cues are shifted in order while their start is not before the base. The
/// first cue that starts before the base stops the walk: it and every later
/// cue are copied unchanged, even if a later cue would qualify on its own.
/// Shifted times keep millisecond precision and the end is not clamped.
pub fn rebase(cues: &[Cue], base_timestamp_ms: i64) -> Vec<Cue> {
    let mut rebased = Vec::with_capacity(cues.len());
    let mut halted = false;

    for (index, cue) in cues.iter().enumerate() {
        if !halted && cue.start_ms().saturating_sub(base_timestamp_ms) >= 0 {
            rebased.push(Cue {
                start: from_millis(cue.start_ms().saturating_sub(base_timestamp_ms)),
                end: from_millis(cue.end_ms().saturating_sub(base_timestamp_ms)),
                ..cue.clone()
            });
            continue;
        }

        if !halted {
            debug!(
                "Rebase halted at cue {} (start {}ms before base {}ms)",
                index + 1,
                cue.start_ms(),
                base_timestamp_ms
            );
            halted = true;
        }
        rebased.push(cue.clone());
    }

    rebased
}

fn from_millis(ms: i64) -> TimeDelta {
    TimeDelta::try_milliseconds(ms).unwrap_or_else(|| TimeDelta::milliseconds(-i64::MAX))
}
