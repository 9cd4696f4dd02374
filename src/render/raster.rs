use crate::error::Result;
use crate::models::ComponentTransfer;
use crate::traits::TransferTarget;
use image::RgbaImage;

const LUMA: [f64; 3] = [0.2126, 0.7152, 0.0722];

fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Luminance of an sRGB pixel, weighted in linear light and returned in sRGB.
///
/// The filter's colour matrix runs in linearRGB (the SVG default) and its
/// component transfer in sRGB, so the grey value is converted back before
/// the table lookup.
pub fn luminance(px: [u8; 4]) -> f64 {
    let linear = |b: u8| srgb_to_linear(b as f64 / 255.0);
    let gray = LUMA[0] * linear(px[0]) + LUMA[1] * linear(px[1]) + LUMA[2] * linear(px[2]);
    linear_to_srgb(gray.clamp(0.0, 1.0))
}

/// Remaps one RGBA8 pixel: RGB through the tables at the pixel's luminance,
/// alpha through the alpha table at the pixel's own alpha.
pub fn map_pixel(transfer: &ComponentTransfer, px: [u8; 4]) -> [u8; 4] {
    let unit = |b: u8| b as f64 / 255.0;
    let gray = luminance(px);
    let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [
        byte(transfer.red.eval(gray)),
        byte(transfer.green.eval(gray)),
        byte(transfer.blue.eval(gray)),
        byte(transfer.alpha.eval(unit(px[3]))),
    ]
}

impl TransferTarget for RgbaImage {
    type Output = ();

    fn bind(&mut self, transfer: &ComponentTransfer) -> Result<()> {
        for px in self.pixels_mut() {
            px.0 = map_pixel(transfer, px.0);
        }
        Ok(())
    }
}
