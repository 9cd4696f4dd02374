pub mod batch;
pub mod export;
pub mod palette;
pub mod status;
