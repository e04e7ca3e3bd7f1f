//! Scene composition: walking the rig table and turning a pose into one
//! model transform and draw command per part. Pure math, no GPU types.

mod compose;

pub use compose::{compose, DrawCommand};
