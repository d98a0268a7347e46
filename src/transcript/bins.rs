//! Display binning: group segments into fixed-width time windows.

use super::Segment;

/// A contiguous time window and the segments starting inside it.
///
/// Bins are derived fresh from a segment list on every render; they hold no
/// identity beyond their position in the returned list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin<'a> {
    /// Window start time in seconds (a multiple of the window width).
    pub start: f64,
    /// Segments whose `start` falls inside this window.
    pub segments: &'a [Segment],
}

/// Pick the display window width (seconds) for a transcript of total
/// duration `total` seconds: long recordings get coarser windows.
pub fn window_for(total: f64) -> f64 {
    if total >= 60.0 * 15.0 {
        60.0
    } else if total > 60.0 * 2.0 {
        30.0
    } else {
        15.0
    }
}

/// Partition an ordered segment list into display bins.
///
/// Each segment lands in exactly one bin by `floor(start / window)`; its end
/// may spill into a later window. Windows with no segments are omitted, so
/// the result is a gap-free ordered list of non-empty bins. Because segments
/// arrive sorted by start, each bin is a contiguous sub-slice of the input.
///
/// An empty input yields an empty list; callers that must render should
/// reject empty transcripts up front.
pub fn bin_segments(segments: &[Segment]) -> Vec<Bin<'_>> {
    let Some(last) = segments.last() else {
        return Vec::new();
    };
    let window = window_for(last.end);

    let mut bins: Vec<Bin<'_>> = Vec::new();
    let mut run_start = 0;
    let mut run_idx = (segments[0].start / window).floor();

    for (i, segment) in segments.iter().enumerate().skip(1) {
        let idx = (segment.start / window).floor();
        if idx != run_idx {
            bins.push(Bin {
                start: run_idx * window,
                segments: &segments[run_start..i],
            });
            run_start = i;
            run_idx = idx;
        }
    }
    bins.push(Bin {
        start: run_idx * window,
        segments: &segments[run_start..],
    });

    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(id: i64, start: f64, end: f64) -> Segment {
        Segment::new(id, start, end, format!("segment {}", id))
    }

    #[test]
    fn test_window_policy() {
        assert_eq!(window_for(60.0), 15.0);
        assert_eq!(window_for(120.0), 15.0);
        assert_eq!(window_for(120.5), 30.0);
        assert_eq!(window_for(600.0), 30.0);
        assert_eq!(window_for(899.9), 30.0);
        assert_eq!(window_for(900.0), 60.0);
        assert_eq!(window_for(3600.0), 60.0);
    }

    #[test]
    fn test_empty_input_yields_no_bins() {
        assert!(bin_segments(&[]).is_empty());
    }

    #[test]
    fn test_single_bin() {
        // T = 600 -> window 30; both starts land in window 0.
        let segments = vec![seg(0, 0.0, 5.0), seg(1, 10.0, 600.0)];
        let bins = bin_segments(&segments);

        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].start, 0.0);
        assert_eq!(bins[0].segments.len(), 2);
    }

    #[test]
    fn test_every_segment_in_exactly_one_bin() {
        let segments: Vec<_> = (0..40)
            .map(|i| seg(i, i as f64 * 10.0, i as f64 * 10.0 + 9.0))
            .collect();
        let bins = bin_segments(&segments);

        let total: usize = bins.iter().map(|b| b.segments.len()).sum();
        assert_eq!(total, segments.len());

        // Ascending window starts, every bin non-empty.
        for pair in bins.windows(2) {
            assert!(pair[0].start < pair[1].start);
        }
        assert!(bins.iter().all(|b| !b.segments.is_empty()));
    }

    #[test]
    fn test_gap_windows_omitted() {
        // T = 100 -> window 15. Nothing starts in [15, 30) or [30, 45).
        let segments = vec![seg(0, 0.0, 5.0), seg(1, 50.0, 100.0)];
        let bins = bin_segments(&segments);

        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].start, 0.0);
        assert_eq!(bins[1].start, 45.0);
    }

    #[test]
    fn test_binned_by_start_only() {
        // Segment 0 ends past the first window boundary; it stays in bin 0.
        let segments = vec![seg(0, 10.0, 40.0), seg(1, 40.0, 90.0)];
        let bins = bin_segments(&segments);

        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].segments[0].id, 0);
        assert_eq!(bins[1].start, 30.0);
    }

    #[test]
    fn test_idempotent() {
        let segments = vec![seg(0, 0.0, 20.0), seg(1, 31.0, 62.0), seg(2, 62.0, 130.0)];
        let a = bin_segments(&segments);
        let b = bin_segments(&segments);
        assert_eq!(a, b);
    }
}
