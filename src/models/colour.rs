use serde::Serialize;

/// A colour with byte-range RGB channels and a unit-range alpha.
///
/// Channels are kept as floats: parsed colours hold whole numbers, while
/// interpolated table entries may fall between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Rgba {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Rounds and clamps into 8-bit RGBA, alpha scaled to 0..=255.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let byte = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        [
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            byte(self.alpha * 255.0),
        ]
    }
}
