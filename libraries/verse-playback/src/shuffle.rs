//! Shuffled next-index selection
//!
//! Draws a uniformly random index that avoids the current track and every
//! index already visited since the last exhaustion reset. The candidate set
//! only shrinks between resets, so the rejection loop terminates quickly in
//! practice; a bounded retry count with a deterministic scan fallback keeps
//! it finite even against an adversarial random source.

use rand::Rng;

/// Retry budget for the rejection loop before falling back to a scan
const MAX_DRAWS: usize = 128;

/// Pick the next index for shuffled playback
///
/// Accepts a drawn index only if it differs from `current` and is not in
/// `played`. When no acceptable index exists at all (a single-track
/// playlist, or everything else already played), returns `current`.
pub fn next_shuffled_index(
    len: usize,
    current: usize,
    played: &[usize],
    rng: &mut impl Rng,
) -> usize {
    if len == 0 {
        return 0;
    }

    for _ in 0..MAX_DRAWS {
        let candidate = rng.gen_range(0..len);
        if candidate != current && !played.contains(&candidate) {
            return candidate;
        }
    }

    (0..len)
        .find(|&index| index != current && !played.contains(&index))
        .unwrap_or(current)
}
