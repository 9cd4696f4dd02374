use thiserror::Error;

/// Errors raised while exporting or applying a gradient map.
///
/// Resolving a declaration never fails; bad stops are skipped instead.
#[derive(Error, Debug)]
pub enum GradientMapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SVG error: {0}")]
    Svg(String),

    #[error("Unknown palette: '{0}'")]
    UnknownPreset(String),

    #[error("Unsupported output format: '{0}'")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, GradientMapError>;
