use crate::pose::PoseState;
use glam::Vec3;

/// Flat RGBA color assigned to a part.
pub type Rgba = [f32; 4];

/// Identity of a body part. Doubles as the index into the composer's
/// saved-frame table, so the variants are dense from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum PartId {
    Chest,
    Head,
    LeftUpperArm,
    LeftLowerArm,
    LeftHand,
    RightUpperArm,
    RightLowerArm,
    RightHand,
    LeftUpperLeg,
    LeftFoot,
    RightUpperLeg,
    RightFoot,
}

impl PartId {
    pub const COUNT: usize = 12;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Which geometric primitive a part draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Cube,
    Pentagon,
}

/// Which [`PoseState`] field drives a joint rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    UpperArm,
    LowerArm,
    Head,
    LeftLeg,
    RightLeg,
    LeftFoot,
    RightFoot,
}

impl Channel {
    pub fn angle(self, pose: &PoseState) -> f32 {
        match self {
            Channel::UpperArm => pose.upper_arm,
            Channel::LowerArm => pose.lower_arm,
            Channel::Head => pose.head,
            Channel::LeftLeg => pose.left_leg,
            Channel::RightLeg => pose.right_leg,
            Channel::LeftFoot => pose.left_foot,
            Channel::RightFoot => pose.right_foot,
        }
    }
}

/// A pose-driven rotation applied at a part's attachment point.
///
/// `sign` lets two parts share a channel with mirrored motion; the left
/// elbow negates the shared lower-arm angle.
#[derive(Debug, Clone, Copy)]
pub struct JointBinding {
    pub channel: Channel,
    pub axis: Vec3,
    pub sign: f32,
}

impl JointBinding {
    pub fn new(channel: Channel, axis: Vec3) -> Self {
        Self {
            channel,
            axis,
            sign: 1.0,
        }
    }

    pub fn mirrored(channel: Channel, axis: Vec3) -> Self {
        Self {
            channel,
            axis,
            sign: -1.0,
        }
    }

    pub fn angle(&self, pose: &PoseState) -> f32 {
        self.sign * self.channel.angle(pose)
    }
}

/// Which parent frame a part's local transform starts from.
///
/// `Joint` is the parent's pre-scale snapshot, so a child chain is not
/// distorted by the parent's proportions. `Body` is the parent's post-scale
/// matrix: the chest deliberately exposes its scaled frame to every child,
/// and the feet continue from the scaled leg matrix, inheriting its scale.
/// The foot coupling looks unintentional next to the rest of the rig but is
/// preserved as-is because it defines the visible geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Root,
    Joint(PartId),
    Body(PartId),
}

impl Anchor {
    pub fn parent(self) -> Option<PartId> {
        match self {
            Anchor::Root => None,
            Anchor::Joint(id) | Anchor::Body(id) => Some(id),
        }
    }
}

/// One row of the rig table: everything the composer needs to place and
/// draw a single rigid part.
#[derive(Debug, Clone, Copy)]
pub struct Part {
    pub id: PartId,
    pub anchor: Anchor,
    /// Local translation from the anchor frame.
    pub offset: Vec3,
    /// Fixed rotation in degrees about an axis (the chest's forward tilt).
    pub tilt: Option<(f32, Vec3)>,
    pub joint: Option<JointBinding>,
    pub scale: Vec3,
    pub color: Rgba,
    pub primitive: Primitive,
}
