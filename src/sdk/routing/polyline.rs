use super::route::Coordinate;

/// Joins per-segment geometries into one continuous path.
///
/// Segments are appended in order. When a segment's first coordinate exactly
/// equals the last coordinate already accumulated, the duplicated boundary
/// point is dropped before appending. Absent segments are skipped, leaving a
/// gap in the path rather than raising an error.
pub fn merge_segments(segments: &[Option<Vec<Coordinate>>]) -> Vec<Coordinate> {
    let mut merged: Vec<Coordinate> = Vec::new();

    for segment in segments.iter().flatten() {
        let mut points = segment.iter().copied();
        if let (Some(last), Some(first)) = (merged.last(), segment.first()) {
            if last == first {
                points.next();
            }
        }
        merged.extend(points);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon)
    }

    #[test]
    fn deduplicates_shared_segment_boundaries() {
        // A -> B resolves as [A, X, B]; B -> C resolves as [B, Y, C].
        let a = c(0.0, 0.0);
        let x = c(0.5, 0.4);
        let b = c(1.0, 1.0);
        let y = c(1.5, 1.6);
        let end = c(2.0, 2.0);

        let segments = vec![Some(vec![a, x, b]), Some(vec![b, y, end])];
        assert_eq!(merge_segments(&segments), vec![a, x, b, y, end]);
    }

    #[test]
    fn keeps_both_points_when_boundaries_differ() {
        let segments = vec![
            Some(vec![c(0.0, 0.0), c(1.0, 1.0)]),
            // Starts a hair away from the previous endpoint: no elision.
            Some(vec![c(1.0, 1.0 + 1e-9), c(2.0, 2.0)]),
        ];
        assert_eq!(merge_segments(&segments).len(), 4);
    }

    #[test]
    fn absent_segment_leaves_a_gap_without_error() {
        let a = c(0.0, 0.0);
        let x = c(0.5, 0.4);
        let b = c(1.0, 1.0);

        let segments = vec![Some(vec![a, x, b]), None];
        assert_eq!(merge_segments(&segments), vec![a, x, b]);
    }

    #[test]
    fn surviving_segments_merge_across_a_gap() {
        let segments = vec![
            Some(vec![c(0.0, 0.0), c(1.0, 1.0)]),
            None,
            Some(vec![c(2.0, 2.0), c(3.0, 3.0)]),
        ];
        assert_eq!(
            merge_segments(&segments),
            vec![c(0.0, 0.0), c(1.0, 1.0), c(2.0, 2.0), c(3.0, 3.0)]
        );
    }

    #[test]
    fn output_length_matches_sum_minus_triggered_elisions() {
        let b = c(1.0, 1.0);
        let d = c(3.0, 3.0);
        let segments = vec![
            Some(vec![c(0.0, 0.0), b]),          // 2 points
            Some(vec![b, c(2.0, 2.0), d]),       // 3 points, boundary elided
            Some(vec![c(9.0, 9.0), c(4.0, 4.0)]), // 2 points, no shared boundary
        ];
        // 2 + 3 + 2 minus one triggered elision.
        assert_eq!(merge_segments(&segments).len(), 6);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(merge_segments(&[]).is_empty());
        assert!(merge_segments(&[None, None]).is_empty());
    }
}
