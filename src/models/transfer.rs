use super::{ColourTable, Rgba};
use serde::Serialize;

/// One channel of a component transfer, evaluated like an SVG `type="table"`
/// transfer function.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TransferFunction {
    pub values: Vec<f64>,
}

impl TransferFunction {
    pub fn new(values: Vec<f64>) -> Self {
        TransferFunction { values }
    }

    /// Maps `c` (clamped to [0, 1]) through the piecewise-linear table.
    ///
    /// With `n + 1` entries the input range is split into `n` equal intervals;
    /// `c` in interval `k` blends `v[k]` and `v[k + 1]`. An empty table is the
    /// identity, a single entry is a constant.
    pub fn eval(&self, c: f64) -> f64 {
        let c = c.clamp(0.0, 1.0);
        match self.values.len() {
            0 => c,
            1 => self.values[0],
            len => {
                let n = (len - 1) as f64;
                if c >= 1.0 {
                    return self.values[len - 1];
                }
                let k = (c * n).floor() as usize;
                let (lo, hi) = (self.values[k], self.values[k + 1]);
                lo + (c - k as f64 / n) * n * (hi - lo)
            }
        }
    }

    /// Space separated values, as written into a `tableValues` attribute.
    pub fn table_values(&self) -> String {
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Four independent per-channel lookup tables built from a colour table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentTransfer {
    pub red: TransferFunction,
    pub green: TransferFunction,
    pub blue: TransferFunction,
    pub alpha: TransferFunction,
}

impl ComponentTransfer {
    /// RGB are normalised from byte range into [0, 1]; alpha is already unit range.
    pub fn from_table(table: &ColourTable) -> Self {
        let channel = |f: fn(&Rgba) -> f64| TransferFunction::new(table.iter().map(f).collect());
        ComponentTransfer {
            red: channel(|c| c.red / 255.0),
            green: channel(|c| c.green / 255.0),
            blue: channel(|c| c.blue / 255.0),
            alpha: channel(|c| c.alpha),
        }
    }

    pub fn len(&self) -> usize {
        self.red.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.red.values.is_empty()
    }
}
