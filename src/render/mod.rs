pub mod raster;
pub mod svg;

pub use raster::map_pixel;
pub use svg::SvgFilter;
