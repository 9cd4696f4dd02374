use super::colour::Rgba;
use serde::Serialize;

/// A stop read from a declaration, before positions are filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingStop {
    pub colour: Rgba,
    pub pos: Option<f64>,
}

/// A colour pinned to a percentage along the ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColourStop {
    pub colour: Rgba,
    pub pos: f64,
}

/// Dense colours at `i * 100 / segments` for `i` in `0..=segments`.
pub type ColourTable = Vec<Rgba>;
