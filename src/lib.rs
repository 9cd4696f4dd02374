pub mod colour;
pub mod config;
pub mod error;
pub mod gradient;
pub mod models;
pub mod render;
pub mod traits;
pub mod utils;

pub use colour::parse_colour;
pub use config::{Config, OutputFormat, Source};
pub use error::{GradientMapError, Result};
pub use gradient::{GradientMap, distribute_colours, find_segments, resolve_stops};
pub use models::{ColourStop, ColourTable, ComponentTransfer, Rgba};
pub use render::SvgFilter;
pub use traits::TransferTarget;
