use crate::models::ColourStop;
use tracing::{debug, warn};

/// Largest segment count tried; also the fallback when nothing aligns.
pub const MAX_SEGMENTS: usize = 100;

/// How far (in percentage points) a stop may sit from a segment boundary.
pub const ALIGNMENT_TOLERANCE: f64 = 1.0;

/// True when every interior stop lies on (or within tolerance of) a boundary
/// of `segments` equal-width segments, and not inside the first segment.
pub fn stops_align(stops: &[ColourStop], segments: usize) -> bool {
    let seg_size = 100.0 / segments as f64;
    interior(stops).iter().all(|stop| {
        if stop.pos < seg_size {
            return false;
        }
        let rem = stop.pos % seg_size;
        rem < ALIGNMENT_TOLERANCE || seg_size - rem < ALIGNMENT_TOLERANCE
    })
}

fn interior(stops: &[ColourStop]) -> &[ColourStop] {
    match stops.len() {
        0..=2 => &[],
        n => &stops[1..n - 1],
    }
}

/// Smallest number of equal segments in `1..=100` that aligns with every
/// interior stop.
///
/// Falls back to 100 when none do. Stops may then be off their boundary by
/// up to one percentage point.
pub fn find_segments(stops: &[ColourStop]) -> usize {
    match (1..=MAX_SEGMENTS).find(|&n| stops_align(stops, n)) {
        Some(segments) => {
            debug!(segments, "found aligned segment count");
            segments
        }
        None => {
            warn!(
                stops = stops.len(),
                "no segment count aligns with every stop, using {}", MAX_SEGMENTS
            );
            MAX_SEGMENTS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgba;

    fn at(positions: &[f64]) -> Vec<ColourStop> {
        positions
            .iter()
            .map(|&pos| ColourStop {
                colour: Rgba::new(0.0, 0.0, 0.0, 1.0),
                pos,
            })
            .collect()
    }

    #[test]
    fn test_two_stops_need_one_segment() {
        assert_eq!(find_segments(&at(&[0.0, 100.0])), 1);
    }

    #[test]
    fn test_quarters() {
        assert_eq!(find_segments(&at(&[0.0, 25.0, 75.0, 100.0])), 4);
    }

    #[test]
    fn test_halves() {
        assert_eq!(find_segments(&at(&[0.0, 50.0, 100.0])), 2);
    }

    #[test]
    fn test_thirds_within_tolerance() {
        // 100 / 3 = 33.33, so 34 and 67 sit within one point of a boundary
        assert_eq!(find_segments(&at(&[0.0, 34.0, 67.0, 100.0])), 3);
        // 33 falls inside the first third
        assert!(!stops_align(&at(&[0.0, 33.0, 67.0, 100.0]), 3));
    }

    #[test]
    fn test_repeated_interior_position() {
        assert_eq!(find_segments(&at(&[0.0, 10.0, 10.0, 100.0])), 10);
    }

    #[test]
    fn test_stop_inside_first_segment_never_aligns() {
        let stops = at(&[0.0, 0.0, 100.0]);
        assert!(!stops_align(&stops, MAX_SEGMENTS));
        assert_eq!(find_segments(&stops), MAX_SEGMENTS);
    }

    #[test]
    fn test_fractional_positions_fall_back() {
        let stops = at(&[0.0, 0.5, 100.0]);
        assert_eq!(find_segments(&stops), MAX_SEGMENTS);
    }

    #[test]
    fn test_integer_positions_align_at_most_at_hundred() {
        for pos in 1..100 {
            let segments = find_segments(&at(&[0.0, pos as f64, 100.0]));
            assert!(segments <= MAX_SEGMENTS);
            assert!(stops_align(&at(&[0.0, pos as f64, 100.0]), segments));
        }
    }
}
