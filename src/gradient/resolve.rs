//! Turns a declaration into an ordered list of positioned colour stops.
//!
//! Missing positions are filled the way CSS gradients do it: the first stop
//! defaults to 0%, the last to 100%, explicit positions never go backwards,
//! and runs of unpositioned stops are spread evenly between their neighbours.

use super::tokenizer::{parse_position, tokenize};
use crate::colour::parse::round_half_up;
use crate::colour::parse_colour;
use crate::models::{ColourStop, PendingStop};
use tracing::{debug, warn};

/// Parses and resolves a declaration such as `"red, blue 30%, green"`.
///
/// Returns an empty list when no stop could be read, which callers treat as
/// "no gradient to apply". Otherwise the result starts at 0, ends at 100,
/// is non-decreasing, and has at least two stops.
pub fn resolve_stops(declaration: &str) -> Vec<ColourStop> {
    let stops = parse_stops(declaration);
    debug!(count = stops.len(), "parsed colour stops");
    resolve_positions(&stops)
}

/// Reads stops without resolving positions.
///
/// Entries whose colour does not parse are dropped; the rest of the
/// declaration is still used. A position term that is not a number leaves
/// the stop unpositioned.
pub fn parse_stops(declaration: &str) -> Vec<PendingStop> {
    tokenize(declaration)
        .into_iter()
        .filter_map(|token| {
            let Some(colour) = parse_colour(token.colour) else {
                warn!(colour = token.colour, "dropping colour stop with unknown colour");
                return None;
            };
            let pos = token.position.and_then(|term| {
                let pos = parse_position(term);
                if pos.is_none() {
                    warn!(colour = token.colour, position = term, "ignoring unparseable position");
                }
                pos
            });
            Some(PendingStop { colour, pos })
        })
        .collect()
}

fn clamp_percent(pos: f64) -> f64 {
    pos.clamp(0.0, 100.0)
}

/// Steps 1 to 3: pin both ends and make explicit positions monotonic.
///
/// Unpositioned interior stops stay `None`; they do not move the running maximum.
fn anchor_positions(stops: &[PendingStop]) -> Vec<Option<f64>> {
    let Some((first, rest)) = stops.split_first() else {
        return Vec::new();
    };
    let first = first.pos.map_or(0.0, clamp_percent);
    let Some((last, interior)) = rest.split_last() else {
        return vec![Some(first)];
    };

    let mut anchored: Vec<Option<f64>> = Vec::with_capacity(stops.len());
    anchored.push(Some(first));
    let running = interior.iter().fold(first, |running, stop| match stop.pos {
        Some(pos) => {
            let pos = pos.max(running).min(100.0);
            anchored.push(Some(pos));
            pos
        }
        None => {
            anchored.push(None);
            running
        }
    });
    anchored.push(Some(last.pos.map_or(100.0, clamp_percent).max(running)));
    anchored
}

/// Step 4: spread each run of `None` between its positioned neighbours.
///
/// Each filled position is the previous one plus a rounded step, so rounding
/// accumulates along the run. Positions never pass the run's right neighbour.
fn fill_runs(anchored: &[Option<f64>]) -> Vec<f64> {
    let mut resolved: Vec<f64> = Vec::with_capacity(anchored.len());
    let mut run = 0usize;
    for pos in anchored {
        let Some(end) = *pos else {
            run += 1;
            continue;
        };
        if run > 0 {
            let start = resolved.last().copied().unwrap_or(0.0);
            let delta = round_half_up((end - start) / (run + 1) as f64);
            resolved.extend((0..run).scan(start, |acc, _| {
                *acc = (*acc + delta).min(end);
                Some(*acc)
            }));
            run = 0;
        }
        resolved.push(end);
    }
    resolved
}

/// Resolves positions for already parsed stops (steps 1 to 5).
pub fn resolve_positions(stops: &[PendingStop]) -> Vec<ColourStop> {
    let positions = fill_runs(&anchor_positions(stops));
    let mut resolved: Vec<ColourStop> = stops
        .iter()
        .zip(positions)
        .map(|(stop, pos)| ColourStop {
            colour: stop.colour,
            pos,
        })
        .collect();

    if let Some(&first) = resolved.first() {
        if first.pos != 0.0 {
            resolved.insert(0, ColourStop { pos: 0.0, ..first });
        }
    }
    if let Some(&last) = resolved.last() {
        if last.pos != 100.0 {
            resolved.push(ColourStop { pos: 100.0, ..last });
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgba;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const RED: Rgba = Rgba::new(255.0, 0.0, 0.0, 1.0);
    const BLUE: Rgba = Rgba::new(0.0, 0.0, 255.0, 1.0);
    const GREEN: Rgba = Rgba::new(0.0, 128.0, 0.0, 1.0);
    const YELLOW: Rgba = Rgba::new(255.0, 255.0, 0.0, 1.0);

    fn stop(colour: Rgba, pos: f64) -> ColourStop {
        ColourStop { colour, pos }
    }

    fn positions(stops: &[ColourStop]) -> Vec<f64> {
        stops.iter().map(|s| s.pos).collect()
    }

    fn pending(pos: &[Option<f64>]) -> Vec<PendingStop> {
        pos.iter()
            .map(|&pos| PendingStop { colour: RED, pos })
            .collect()
    }

    #[test]
    fn test_unpositioned_stops_are_spread_evenly() {
        let stops = resolve_stops("red, blue, green");
        assert_eq!(stops, vec![stop(RED, 0.0), stop(BLUE, 50.0), stop(GREEN, 100.0)]);
    }

    #[test]
    fn test_repeated_position_and_leading_stop() {
        let stops = resolve_stops("red 10%, blue 10%, green");
        assert_eq!(
            stops,
            vec![
                stop(RED, 0.0),
                stop(RED, 10.0),
                stop(BLUE, 10.0),
                stop(GREEN, 100.0)
            ]
        );
    }

    #[test]
    fn test_explicit_positions_are_kept() {
        let stops = resolve_stops("red, blue 25%, green 75%, yellow");
        assert_eq!(
            stops,
            vec![
                stop(RED, 0.0),
                stop(BLUE, 25.0),
                stop(GREEN, 75.0),
                stop(YELLOW, 100.0)
            ]
        );
    }

    #[test]
    fn test_single_stop_is_duplicated() {
        assert_eq!(resolve_stops("red"), vec![stop(RED, 0.0), stop(RED, 100.0)]);
        assert_eq!(
            resolve_stops("red 40%"),
            vec![stop(RED, 0.0), stop(RED, 40.0), stop(RED, 100.0)]
        );
    }

    #[test]
    fn test_empty_declarations() {
        assert!(resolve_stops("").is_empty());
        assert!(resolve_stops("  \t ").is_empty());
        assert!(resolve_stops("notacolour, alsobad 50%").is_empty());
    }

    #[test]
    fn test_unknown_colours_are_dropped() {
        let stops = resolve_stops("red, mauvish 30%, blue");
        assert_eq!(stops, vec![stop(RED, 0.0), stop(BLUE, 100.0)]);
    }

    #[test]
    fn test_trailing_stop_added_for_short_last_position() {
        let stops = resolve_stops("red, blue 60%");
        assert_eq!(
            stops,
            vec![stop(RED, 0.0), stop(BLUE, 60.0), stop(BLUE, 100.0)]
        );
    }

    #[test]
    fn test_backwards_positions_are_raised() {
        let stops = resolve_stops("red 50%, blue 20%, green 30%, yellow 10%");
        assert_eq!(positions(&stops), vec![0.0, 50.0, 50.0, 50.0, 50.0, 100.0]);
    }

    #[test]
    fn test_pending_stop_keeps_running_maximum() {
        // the unpositioned stop between 50 and 30 must not lower the maximum
        let stops = resolve_positions(&pending(&[Some(50.0), None, Some(30.0), None]));
        assert_eq!(positions(&stops), vec![0.0, 50.0, 50.0, 50.0, 100.0]);
        assert_eq!(stops[0], stop(RED, 0.0));
    }

    #[test]
    fn test_zero_percent_is_explicit() {
        let stops = resolve_stops("red, blue 0%, green");
        assert_eq!(positions(&stops), vec![0.0, 0.0, 100.0]);
    }

    #[test]
    fn test_rounding_accumulates_along_run() {
        // step = round(100 / 3) = 33
        let stops = resolve_positions(&pending(&[None, None, None, None]));
        assert_eq!(positions(&stops), vec![0.0, 33.0, 66.0, 100.0]);

        // step = round(100 / 7) = 14
        let stops = resolve_positions(&pending(&[None; 8]));
        assert_eq!(
            positions(&stops),
            vec![0.0, 14.0, 28.0, 42.0, 56.0, 70.0, 84.0, 100.0]
        );
    }

    #[test]
    fn test_run_between_explicit_positions() {
        let stops = resolve_positions(&pending(&[None, Some(20.0), None, None, Some(80.0), None]));
        assert_eq!(positions(&stops), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn test_run_never_passes_right_neighbour() {
        // step = round(3 / 6) = 1 would otherwise reach 5
        let stops = resolve_positions(&pending(&[
            None,
            None,
            None,
            None,
            None,
            None,
            Some(3.0),
            Some(100.0),
        ]));
        assert_eq!(
            positions(&stops),
            vec![0.0, 1.0, 2.0, 3.0, 3.0, 3.0, 3.0, 100.0]
        );
    }

    #[test]
    fn test_out_of_range_ends_are_clamped() {
        let stops = resolve_positions(&pending(&[Some(-20.0), Some(250.0)]));
        assert_eq!(positions(&stops), vec![0.0, 100.0]);
    }

    #[test]
    fn test_random_declarations_keep_invariants() {
        let names = ["red", "blue", "#0f0", "rgba(1, 2, 3, 0.5)", "hsl(30, 50%, 50%)", "bogus"];
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1_000 {
            let n = rng.random_range(1..8);
            let declaration = (0..n)
                .map(|_| {
                    let name = names[rng.random_range(0..names.len())];
                    if rng.random_bool(0.5) {
                        format!("{} {}%", name, rng.random_range(-20.0..120.0))
                    } else {
                        name.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(", ");

            let stops = resolve_stops(&declaration);
            assert_eq!(stops, resolve_stops(&declaration), "not deterministic: {}", declaration);
            if stops.is_empty() {
                continue;
            }

            assert!(stops.len() >= 2, "too few stops for {}", declaration);
            assert_eq!(stops[0].pos, 0.0, "first stop of {}", declaration);
            assert_eq!(stops[stops.len() - 1].pos, 100.0, "last stop of {}", declaration);
            for w in stops.windows(2) {
                assert!(
                    w[0].pos <= w[1].pos,
                    "positions decrease in {}: {:?}",
                    declaration,
                    positions(&stops)
                );
            }
        }
    }
}
