pub mod colour;
pub mod stop;
pub mod transfer;

pub use colour::Rgba;
pub use stop::{ColourStop, ColourTable, PendingStop};
pub use transfer::{ComponentTransfer, TransferFunction};
