//! Pose state and the per-frame joint-angle update.
//!
//! A [`PoseState`] is the single shared record the input layer and the frame
//! driver write into: current joint angles in degrees, the derived jump
//! height, and the animation flags. [`PoseState::advance`] derives the
//! instantaneous angles from elapsed wall-clock seconds.

mod state;

pub use state::{PoseState, UPPER_ARM_REST_DEG};
