//! Playback-position lookup over segment end times.

use super::Segment;

/// Return the index of the first segment whose `end` exceeds `t`.
///
/// Lower-bound binary search over the invariant that segment end times are
/// non-decreasing. For `t` inside a segment this is the covering segment;
/// for `t` in a gap it is the next segment to play. Returns `segments.len()`
/// when `t` is at or past the final segment's end, so callers must guard
/// before indexing. Ties resolve to the leftmost qualifying index.
pub fn segment_at(segments: &[Segment], t: f64) -> usize {
    let (mut lo, mut hi) = (0, segments.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if t >= segments[mid].end {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
