pub mod keywords;
pub mod parse;

pub use parse::parse_colour;
