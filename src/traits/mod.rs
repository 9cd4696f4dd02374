pub mod target;

pub use target::TransferTarget;
