//! # blocky-critter
//!
//! An interactive blocky animal: a hierarchical figure of cuboid and
//! pentagonal-prism parts, posed by per-limb sinusoidal joint animation and
//! rendered with a single flat-color WebGPU shader.
//!
//! ## Features
//! - Declarative rig table walked by a generic scene composer
//! - Exact per-channel animation profiles plus manual slider overrides
//! - Drag-to-orbit camera with a poke-mode modifier click
//! - Testable frame driver (clock abstraction, explicit stop)
//! - Cross-platform: Native + WASM support
//!
//! ## Example
//! ```rust,ignore
//! use blocky_critter::figure::Rig;
//! use blocky_critter::pose::PoseState;
//! use blocky_critter::scene::compose;
//!
//! let rig = Rig::critter();
//! let mut pose = PoseState::new();
//! pose.advance(1.5);
//!
//! // One model matrix + color + primitive per body part.
//! let commands = compose(&rig, &pose);
//! assert_eq!(commands.len(), rig.len());
//! ```

pub mod figure;
pub mod input;
pub mod math;
pub mod pose;
pub mod render;
pub mod scene;
pub mod sched;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use figure::{Anchor, Channel, JointBinding, Part, PartId, Primitive, Rig};
pub use input::{OrbitCamera, Pointer};
pub use math::MatrixStack;
pub use pose::{PoseState, UPPER_ARM_REST_DEG};
pub use render::{FigureRenderer, GpuContext, SetupError};
pub use scene::{compose, DrawCommand};
pub use sched::{Clock, DriverState, FrameDriver, ManualClock};

#[cfg(not(target_arch = "wasm32"))]
pub use sched::SystemClock;
