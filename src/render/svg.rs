use crate::error::{GradientMapError, Result};
use crate::models::ComponentTransfer;
use crate::traits::TransferTarget;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use std::fmt::Display;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Rec. 709 luma weights, one row per output channel, alpha passed through.
pub const LUMINANCE_MATRIX: &str =
    "0.2126 0.7152 0.0722 0 0 0.2126 0.7152 0.0722 0 0 0.2126 0.7152 0.0722 0 0 0 0 0 1 0";

/// Renders a gradient map as an SVG `<filter>`: a greyscale colour matrix
/// followed by a table-based component transfer.
///
/// Attribute values are XML-escaped, so any id yields well-formed markup.
#[derive(Debug, Clone)]
pub struct SvgFilter {
    pub id: String,
}

fn svg_error<E: Display>(err: E) -> GradientMapError {
    GradientMapError::Svg(err.to_string())
}

impl SvgFilter {
    pub fn new(id: impl Into<String>) -> Self {
        SvgFilter { id: id.into() }
    }

    /// The CSS `filter` value that references this filter.
    pub fn css_filter(&self) -> String {
        format!("url(#{})", self.id)
    }

    fn write_markup(&self, transfer: &ComponentTransfer) -> Result<String> {
        let mut writer = Writer::new(Vec::new());

        let svg = BytesStart::new("svg").with_attributes([
            ("xmlns", SVG_NS),
            ("version", "1.1"),
            ("width", "0"),
            ("height", "0"),
        ]);
        writer.write_event(Event::Start(svg)).map_err(svg_error)?;
        let filter = BytesStart::new("filter").with_attributes([("id", self.id.as_str())]);
        writer.write_event(Event::Start(filter)).map_err(svg_error)?;

        let matrix = BytesStart::new("feColorMatrix").with_attributes([
            ("type", "matrix"),
            ("values", LUMINANCE_MATRIX),
            ("result", "gray"),
        ]);
        writer.write_event(Event::Empty(matrix)).map_err(svg_error)?;

        let component = BytesStart::new("feComponentTransfer")
            .with_attributes([("color-interpolation-filters", "sRGB")]);
        writer.write_event(Event::Start(component)).map_err(svg_error)?;
        let funcs = [
            ("feFuncR", &transfer.red),
            ("feFuncG", &transfer.green),
            ("feFuncB", &transfer.blue),
            ("feFuncA", &transfer.alpha),
        ];
        for (tag, func) in funcs {
            let values = func.table_values();
            let elem = BytesStart::new(tag)
                .with_attributes([("type", "table"), ("tableValues", values.as_str())]);
            writer.write_event(Event::Empty(elem)).map_err(svg_error)?;
        }

        for tag in ["feComponentTransfer", "filter", "svg"] {
            writer
                .write_event(Event::End(BytesEnd::new(tag)))
                .map_err(svg_error)?;
        }
        String::from_utf8(writer.into_inner()).map_err(svg_error)
    }
}

impl TransferTarget for SvgFilter {
    type Output = String;

    fn bind(&mut self, transfer: &ComponentTransfer) -> Result<String> {
        self.write_markup(transfer)
    }
}
