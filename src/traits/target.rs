use crate::error::Result;
use crate::models::ComponentTransfer;

/// Something a gradient map can be delivered to: markup for a renderer,
/// pixels in memory, a shader uniform.
pub trait TransferTarget {
    type Output;

    fn bind(&mut self, transfer: &ComponentTransfer) -> Result<Self::Output>;
}
