use crate::error::Result;
use crate::gradient::GradientMap;
use csv::WriterBuilder;
use serde::Serialize;
use std::io::Write;

/// One row of the lookup table, flattened for CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub index: usize,
    pub position: f64,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

pub fn table_rows(map: &GradientMap) -> Vec<TableRow> {
    map.table
        .iter()
        .enumerate()
        .map(|(index, c)| TableRow {
            index,
            position: map.position_of(index),
            red: c.red,
            green: c.green,
            blue: c.blue,
            alpha: c.alpha,
        })
        .collect()
}

/// Writes the table as CSV with a header row.
pub fn write_csv<W: Write>(map: &GradientMap, writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    for row in table_rows(map) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// The stops, segment count, table and transfer functions as pretty JSON.
pub fn to_json(map: &GradientMap) -> Result<String> {
    Ok(serde_json::to_string_pretty(map)?)
}
