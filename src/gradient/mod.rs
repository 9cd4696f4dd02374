//! The gradient-map pipeline: resolve stops, find a segment count, build the table.

pub mod distribute;
pub mod resolve;
pub mod segments;
pub mod tokenizer;

pub use distribute::distribute_colours;
pub use resolve::{parse_stops, resolve_positions, resolve_stops};
pub use segments::{ALIGNMENT_TOLERANCE, MAX_SEGMENTS, find_segments, stops_align};

use crate::error::Result;
use crate::models::{ColourStop, ColourTable, ComponentTransfer};
use crate::traits::TransferTarget;
use serde::Serialize;

/// A resolved gradient and the lookup tables derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientMap {
    pub stops: Vec<ColourStop>,
    pub segments: usize,
    pub table: ColourTable,
    pub transfer: ComponentTransfer,
}

impl GradientMap {
    /// Runs the whole pipeline over a declaration.
    ///
    /// `None` means no stop could be read and there is nothing to apply.
    pub fn parse(declaration: &str) -> Option<Self> {
        Self::from_stops(resolve_stops(declaration))
    }

    /// Builds the tables for stops that are already resolved.
    pub fn from_stops(stops: Vec<ColourStop>) -> Option<Self> {
        if stops.is_empty() {
            return None;
        }
        let segments = find_segments(&stops);
        let table = distribute_colours(&stops, segments);
        let transfer = ComponentTransfer::from_table(&table);
        Some(GradientMap {
            stops,
            segments,
            table,
            transfer,
        })
    }

    /// False when the segment search fell back and some stops are only
    /// approximately placed.
    pub fn is_aligned(&self) -> bool {
        stops_align(&self.stops, self.segments)
    }

    /// Position (percent) of table entry `index`.
    pub fn position_of(&self, index: usize) -> f64 {
        index as f64 * 100.0 / self.segments as f64
    }

    /// Hands the component transfer to a delivery target.
    pub fn apply_to<T: TransferTarget>(&self, target: &mut T) -> Result<T::Output> {
        target.bind(&self.transfer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgba;

    #[test]
    fn test_parse_runs_all_stages() {
        let map = GradientMap::parse("#ff0000 0%, #0000ff 100%").unwrap();
        assert_eq!(map.segments, 1);
        assert_eq!(
            map.table,
            vec![
                Rgba::new(255.0, 0.0, 0.0, 1.0),
                Rgba::new(0.0, 0.0, 255.0, 1.0)
            ]
        );
        assert_eq!(map.transfer.red.values, vec![1.0, 0.0]);
        assert!(map.is_aligned());
    }

    #[test]
    fn test_quarter_stops_need_no_blending() {
        let map = GradientMap::parse("red, blue 25%, green 75%, yellow").unwrap();
        assert_eq!(map.segments, 4);
        let colours: Vec<Rgba> = map.stops.iter().map(|s| s.colour).collect();
        assert_eq!(map.table[0], colours[0]);
        assert_eq!(map.table[1], colours[1]);
        assert_eq!(map.table[3], colours[2]);
        assert_eq!(map.table[4], colours[3]);
        // 50% lies between blue and green
        assert_eq!(map.table[2], Rgba::new(0.0, 64.0, 127.5, 1.0));
        assert_eq!(map.position_of(3), 75.0);
    }

    #[test]
    fn test_nothing_to_apply() {
        assert_eq!(GradientMap::parse(""), None);
        assert_eq!(GradientMap::parse("nope"), None);
    }

    #[test]
    fn test_fallback_is_reported() {
        let map = GradientMap::parse("red, blue 0.5%, green").unwrap();
        assert_eq!(map.segments, MAX_SEGMENTS);
        assert!(!map.is_aligned());
    }
}
