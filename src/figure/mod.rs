//! The articulated figure: part identifiers, joint bindings, and the
//! declarative rig table the scene composer walks.

mod part;
mod rig;

pub use part::{Anchor, Channel, JointBinding, Part, PartId, Primitive, Rgba};
pub use rig::Rig;
