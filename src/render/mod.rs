//! WebGPU rendering module
//!
//! This module contains the GPU context, the fixed shader pipeline, mesh
//! generation for the two primitives, and the figure renderer.

pub mod context;
pub mod error;
pub mod mesh;
pub mod pipeline;
pub mod renderer;

pub use context::GpuContext;
pub use error::SetupError;
pub use mesh::Mesh;
pub use pipeline::RenderPipelines;
pub use renderer::FigureRenderer;
