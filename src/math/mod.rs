//! Math utilities module
//!
//! Provides the chaining matrix stack used for model transforms plus
//! convenient re-exports from glam.

mod stack;

pub use stack::MatrixStack;

// Re-export commonly used glam types
pub use glam::{Mat4, Quat, Vec3, Vec4};
