use crate::{
    colour::parse::round_half_up,
    gradient::GradientMap,
    models::Rgba,
    utils::palette::{BUILTIN_PALETTES, sample_palette},
};
use comfy_table::{Attribute, Cell, CellAlignment, Table};

fn swatch([r, g, b, _]: [u8; 4]) -> String {
    format!("\x1b[38;2;{};{};{}m█\x1b[0m", r, g, b)
}

/// A row of 24-bit ANSI blocks, one per colour.
pub fn colour_bar<I: IntoIterator<Item = [u8; 4]>>(colours: I) -> String {
    colours.into_iter().map(swatch).collect()
}

fn header(names: &[&str]) -> Vec<Cell> {
    names
        .iter()
        .map(|name| {
            Cell::new(name)
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center)
        })
        .collect()
}

fn css(c: &Rgba) -> String {
    format!("rgba({:.0}, {:.0}, {:.0}, {:.2})", c.red, c.green, c.blue, c.alpha)
}

pub fn stops_table(map: &GradientMap) -> Table {
    let mut table = Table::new();
    table
        .set_header(header(&["", "Position", "Colour", "Swatch"]))
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);
    for (i, stop) in map.stops.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i).set_alignment(CellAlignment::Center),
            Cell::new(format!("{:.2}%", stop.pos)).set_alignment(CellAlignment::Right),
            Cell::new(css(&stop.colour)),
            Cell::new(swatch(stop.colour.to_rgba8())),
        ]);
    }
    table
}

pub fn lookup_table(map: &GradientMap) -> Table {
    let mut table = Table::new();
    table
        .set_header(header(&["Index", "Position", "R", "G", "B", "A", "Swatch"]))
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);
    for (i, c) in map.table.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i).set_alignment(CellAlignment::Center),
            Cell::new(format!("{:.2}%", map.position_of(i))).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", c.red)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", c.green)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", c.blue)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", c.alpha)).set_alignment(CellAlignment::Right),
            Cell::new(swatch(c.to_rgba8())),
        ]);
    }
    table
}

/// Interior stops whose table entry is not at their exact position, as
/// `(stop index, declared position, drawn position)`.
pub fn misplaced_stops(map: &GradientMap) -> Vec<(usize, f64, f64)> {
    if map.stops.len() < 3 {
        return Vec::new();
    }
    let seg_size = 100.0 / map.segments as f64;
    map.stops[1..map.stops.len() - 1]
        .iter()
        .enumerate()
        .filter_map(|(i, stop)| {
            let drawn = round_half_up(stop.pos / seg_size) * seg_size;
            ((stop.pos - drawn).abs() > 1e-9).then_some((i + 1, stop.pos, drawn))
        })
        .collect()
}

pub fn print_gradient_summary(map: &GradientMap) {
    println!("\nStops:\n{}", stops_table(map));
    println!(
        "\nLookup table ({} segments, {} entries):\n{}",
        map.segments,
        map.table.len(),
        lookup_table(map)
    );
    println!(
        "\nColourbar: {}",
        colour_bar(map.table.iter().map(Rgba::to_rgba8))
    );

    if !map.is_aligned() {
        println!("\nWarnings:");
        println!(
            "  ⚠️ No segment count up to {} lines up with every stop, positions are approximate",
            map.segments
        );
        for (i, pos, snapped) in misplaced_stops(map) {
            println!("  ⚠️ stop {} at {:.2}% is drawn at {:.2}%", i, pos, snapped);
        }
    }

    println!();
}

pub fn print_palette_list(samples: usize) {
    let mut table = Table::new();
    table
        .set_header(header(&["Palette", "Colourbar"]))
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);
    for name in BUILTIN_PALETTES {
        let bar = sample_palette(name, samples)
            .map(colour_bar)
            .unwrap_or_default();
        table.add_row(vec![Cell::new(name), Cell::new(bar)]);
    }
    println!("\nBuilt-in palettes:\n{}\n", table);
}
