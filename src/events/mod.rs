mod pointer;
mod resize;

pub use pointer::*;
pub use resize::*;
