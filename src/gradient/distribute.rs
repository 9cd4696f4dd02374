use crate::colour::parse::round_half_up;
use crate::models::{ColourStop, ColourTable, Rgba};

/// Builds `segments + 1` evenly spaced colours from resolved stops.
///
/// Each interior stop is written to its nearest boundary (a later stop wins
/// when two round to the same index), the ends always hold the first and last
/// stop colours, and the gaps in between are blended linearly channel by
/// channel. Channels are left as floats.
pub fn distribute_colours(stops: &[ColourStop], segments: usize) -> ColourTable {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Vec::new();
    };
    let segments = segments.max(1);
    let seg_size = 100.0 / segments as f64;

    let mut slots: Vec<Option<Rgba>> = vec![None; segments + 1];
    if stops.len() > 2 {
        for stop in &stops[1..stops.len() - 1] {
            let index = round_half_up(stop.pos / seg_size).clamp(0.0, segments as f64) as usize;
            slots[index] = Some(stop.colour);
        }
    }
    slots[0] = Some(first.colour);
    slots[segments] = Some(last.colour);

    fill_gaps(&slots)
}

/// Blends every run of empty slots between its filled neighbours.
///
/// The step per channel is `(end - start) / (run + 1)`, added cumulatively
/// from the left neighbour.
fn fill_gaps(slots: &[Option<Rgba>]) -> ColourTable {
    let mut table: ColourTable = Vec::with_capacity(slots.len());
    let mut run = 0usize;
    for slot in slots {
        let Some(end) = *slot else {
            run += 1;
            continue;
        };
        if run > 0 {
            let start = table.last().copied().unwrap_or(end);
            let steps = (run + 1) as f64;
            let delta = Rgba::new(
                (end.red - start.red) / steps,
                (end.green - start.green) / steps,
                (end.blue - start.blue) / steps,
                (end.alpha - start.alpha) / steps,
            );
            table.extend((0..run).scan(start, |acc, _| {
                *acc = Rgba::new(
                    acc.red + delta.red,
                    acc.green + delta.green,
                    acc.blue + delta.blue,
                    acc.alpha + delta.alpha,
                );
                Some(*acc)
            }));
            run = 0;
        }
        table.push(end);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{find_segments, resolve_stops};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const RED: Rgba = Rgba::new(255.0, 0.0, 0.0, 1.0);
    const BLUE: Rgba = Rgba::new(0.0, 0.0, 255.0, 1.0);

    fn stop(colour: Rgba, pos: f64) -> ColourStop {
        ColourStop { colour, pos }
    }

    #[test]
    fn test_two_stops_one_segment() {
        let table = distribute_colours(&[stop(RED, 0.0), stop(BLUE, 100.0)], 1);
        assert_eq!(table, vec![RED, BLUE]);
    }

    #[test]
    fn test_gap_is_blended() {
        let table = distribute_colours(&[stop(RED, 0.0), stop(BLUE, 100.0)], 4);
        assert_eq!(table.len(), 5);
        assert_eq!(table[0], RED);
        assert_eq!(table[2], Rgba::new(127.5, 0.0, 127.5, 1.0));
        assert_eq!(table[4], BLUE);
        for w in table.windows(2) {
            assert!(w[0].red >= w[1].red);
            assert!(w[0].blue <= w[1].blue);
        }
    }

    #[test]
    fn test_alpha_is_blended_as_float() {
        let clear = Rgba::new(0.0, 0.0, 0.0, 0.0);
        let table = distribute_colours(&[stop(clear, 0.0), stop(RED, 100.0)], 2);
        assert_eq!(table[1], Rgba::new(127.5, 0.0, 0.0, 0.5));
    }

    #[test]
    fn test_later_stop_wins_shared_index() {
        let green = Rgba::new(0.0, 128.0, 0.0, 1.0);
        let stops = [
            stop(RED, 0.0),
            stop(BLUE, 49.0),
            stop(green, 51.0),
            stop(RED, 100.0),
        ];
        let table = distribute_colours(&stops, 2);
        assert_eq!(table, vec![RED, green, RED]);
    }

    #[test]
    fn test_endpoints_survive_interior_rounding() {
        let stops = [
            stop(RED, 0.0),
            stop(BLUE, 0.2),
            stop(BLUE, 99.8),
            stop(RED, 100.0),
        ];
        let table = distribute_colours(&stops, 4);
        assert_eq!(table[0], RED);
        assert_eq!(table[4], RED);
    }

    #[test]
    fn test_single_colour_is_uniform() {
        let stops = resolve_stops("red");
        for segments in [1, 3, 17, 100] {
            let table = distribute_colours(&stops, segments);
            assert_eq!(table.len(), segments + 1);
            assert!(table.iter().all(|c| *c == RED));
        }
    }

    #[test]
    fn test_empty_stops() {
        assert!(distribute_colours(&[], 4).is_empty());
    }

    #[test]
    fn test_random_tables_keep_size_and_endpoints() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let n = rng.random_range(0..6);
            let declaration = (0..n)
                .map(|_| {
                    format!(
                        "rgba({}, {}, {}, {}) {}%",
                        rng.random_range(0..=255),
                        rng.random_range(0..=255),
                        rng.random_range(0..=255),
                        rng.random_range(0.0..=1.0),
                        rng.random_range(0..=100)
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            let stops = resolve_stops(&declaration);
            if stops.is_empty() {
                continue;
            }
            let segments = find_segments(&stops);
            let table = distribute_colours(&stops, segments);

            assert_eq!(table.len(), segments + 1);
            assert_eq!(table[0], stops[0].colour);
            assert_eq!(table[segments], stops[stops.len() - 1].colour);
            assert_eq!(table, distribute_colours(&stops, segments));
        }
    }
}
