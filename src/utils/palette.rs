use crate::error::{GradientMapError, Result};
use colorgrad::{Gradient, preset};

pub const BUILTIN_PALETTES: [&str; 9] = [
    "viridis",
    "magma",
    "plasma",
    "inferno",
    "turbo",
    "cubehelix_default",
    "rainbow",
    "spectral",
    "sinebow",
];

pub fn get_builtin_gradient(name: &str) -> Option<Box<dyn Gradient>> {
    Some(match name {
        "viridis" => Box::new(preset::viridis()),
        "magma" => Box::new(preset::magma()),
        "plasma" => Box::new(preset::plasma()),
        "inferno" => Box::new(preset::inferno()),
        "turbo" => Box::new(preset::turbo()),
        "cubehelix_default" => Box::new(preset::cubehelix_default()),
        "rainbow" => Box::new(preset::rainbow()),
        "spectral" => Box::new(preset::spectral()),
        "sinebow" => Box::new(preset::sinebow()),
        _ => return None,
    })
}

/// Samples `n` evenly spaced RGBA8 colours from a built-in palette.
pub fn sample_palette(name: &str, n: usize) -> Result<Vec<[u8; 4]>> {
    let grad = get_builtin_gradient(name)
        .ok_or_else(|| GradientMapError::UnknownPreset(name.to_string()))?;
    let n = n.max(2);
    Ok((0..n)
        .map(|i| grad.at(i as f32 / (n - 1) as f32).to_rgba8())
        .collect())
}

/// Writes a built-in palette as a gradient declaration with explicit positions,
/// e.g. `rgba(68, 1, 84, 1) 0%, ..., rgba(253, 231, 37, 1) 100%`.
pub fn preset_declaration(name: &str, samples: usize) -> Result<String> {
    let colours = sample_palette(name, samples)?;
    let last = (colours.len() - 1) as f64;
    Ok(colours
        .iter()
        .enumerate()
        .map(|(i, [r, g, b, a])| {
            format!(
                "rgba({}, {}, {}, {}) {}%",
                r,
                g,
                b,
                *a as f64 / 255.0,
                i as f64 * 100.0 / last
            )
        })
        .collect::<Vec<_>>()
        .join(", "))
}
