use crate::figure::{Anchor, PartId, Primitive, Rig, Rgba};
use crate::math::MatrixStack;
use crate::pose::PoseState;
use glam::Mat4;

/// One primitive to draw: its world-space model matrix, flat color, and
/// mesh kind. The renderer consumes these in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub model: Mat4,
    pub color: Rgba,
    pub primitive: Primitive,
}

/// Build the transform tree for `pose` and emit a draw command per part.
///
/// Each part starts from an independent copy of its anchor frame, so sibling
/// branches never observe each other's composition. Two frames are recorded
/// per part: the pre-scale joint frame (the attachment point for child
/// chains) and the post-scale body frame (used by the chest's children and
/// the feet).
pub fn compose(rig: &Rig, pose: &PoseState) -> Vec<DrawCommand> {
    let mut joint_frames = [MatrixStack::IDENTITY; PartId::COUNT];
    let mut body_frames = [MatrixStack::IDENTITY; PartId::COUNT];
    let mut commands = Vec::with_capacity(rig.len());

    for part in rig.parts() {
        let mut m = match part.anchor {
            Anchor::Root => {
                let mut root = MatrixStack::new();
                root.translate(0.0, pose.jump, 0.0);
                root
            }
            Anchor::Joint(parent) => joint_frames[parent.index()],
            Anchor::Body(parent) => body_frames[parent.index()],
        };

        m.translate(part.offset.x, part.offset.y, part.offset.z);
        if let Some((degrees, axis)) = part.tilt {
            m.rotate(degrees, axis);
        }
        if let Some(joint) = part.joint {
            m.rotate(joint.angle(pose), joint.axis);
        }
        joint_frames[part.id.index()] = m;

        m.scale(part.scale.x, part.scale.y, part.scale.z);
        body_frames[part.id.index()] = m;

        commands.push(DrawCommand {
            model: m.matrix(),
            color: part.color,
            primitive: part.primitive,
        });
    }

    commands
}
