//! Mask motion for the hero overlay: pointer follow, fade-out and the idle
//! hint sweep. Platform-free so it can be tested on the host; the wasm
//! front-end feeds it DOM events and writes its output back as CSS.

pub mod constants;
pub mod controller;
pub mod geometry;
pub mod sweep;
pub mod timer;

pub use controller::*;
pub use geometry::{lerp, lerp_pos, Rect};
pub use sweep::{HintSweep, SweepTarget};
pub use timer::TimerSlot;
