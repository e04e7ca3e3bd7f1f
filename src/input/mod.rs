//! Input interpretation: drag-to-orbit camera state and pointer handling.
//!
//! These types are host-agnostic; the native and web entry points feed raw
//! pointer events in and apply the reported effects (redraws, poke
//! indicator) themselves.

mod camera;
mod pointer;

pub use camera::OrbitCamera;
pub use pointer::Pointer;
