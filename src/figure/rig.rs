use super::part::{Anchor, Channel, JointBinding, Part, PartId, Primitive, Rgba};
use glam::Vec3;

const CHEST_BROWN: Rgba = [0.77, 0.38, 0.06, 1.0];
const HEAD_ORANGE: Rgba = [1.0, 0.3, 0.0, 1.0];
const LIMB_ORANGE: Rgba = [0.63, 0.29, 0.01, 1.0];
const DARK_BROWN: Rgba = [0.36, 0.25, 0.20, 1.0];

/// An ordered table of body parts, parents strictly before children.
///
/// The hierarchy is fixed: chest at the root; head, both upper arms, and
/// both upper legs hang off the chest; lower arm and hand chain off each
/// upper arm; a foot hangs off each upper leg.
#[derive(Debug, Clone)]
pub struct Rig {
    parts: Vec<Part>,
}

impl Rig {
    pub fn new(parts: Vec<Part>) -> Self {
        debug_assert!(
            parts.iter().enumerate().all(|(i, p)| {
                p.anchor
                    .parent()
                    .map(|parent| parts[..i].iter().any(|q| q.id == parent))
                    .unwrap_or(true)
            }),
            "rig parts must be ordered parents-first"
        );
        Self { parts }
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The canonical blocky critter. Offsets, tilts, scales, and colors are
    /// the figure's defining constants.
    pub fn critter() -> Self {
        use PartId::*;

        let x = Vec3::X;

        Self::new(vec![
            Part {
                id: Chest,
                anchor: Anchor::Root,
                offset: Vec3::new(-0.15, -0.1, 0.4),
                tilt: Some((-30.0, x)),
                joint: None,
                scale: Vec3::new(0.4, 0.4, 0.2),
                color: CHEST_BROWN,
                primitive: Primitive::Cube,
            },
            Part {
                id: Head,
                anchor: Anchor::Body(Chest),
                offset: Vec3::new(0.25, 1.0, 0.0),
                tilt: None,
                joint: Some(JointBinding::new(Channel::Head, Vec3::new(1.0, 0.0, 1.0))),
                scale: Vec3::new(0.5, 0.5, 0.5),
                color: HEAD_ORANGE,
                primitive: Primitive::Pentagon,
            },
            Part {
                id: LeftUpperArm,
                anchor: Anchor::Body(Chest),
                offset: Vec3::new(-0.25, 0.5, 0.0),
                tilt: None,
                joint: Some(JointBinding::new(Channel::UpperArm, x)),
                scale: Vec3::new(0.15, 0.9, 0.5),
                color: LIMB_ORANGE,
                primitive: Primitive::Cube,
            },
            Part {
                id: LeftLowerArm,
                anchor: Anchor::Joint(LeftUpperArm),
                offset: Vec3::new(0.0, -0.7, 0.0),
                tilt: None,
                joint: Some(JointBinding::mirrored(Channel::LowerArm, x)),
                scale: Vec3::new(0.12, 0.6, 0.4),
                color: LIMB_ORANGE,
                primitive: Primitive::Cube,
            },
            Part {
                id: LeftHand,
                anchor: Anchor::Joint(LeftLowerArm),
                offset: Vec3::new(0.0, -0.15, 0.0),
                tilt: None,
                joint: None,
                scale: Vec3::new(0.1, 0.1, 0.3),
                color: DARK_BROWN,
                primitive: Primitive::Cube,
            },
            Part {
                id: RightUpperArm,
                anchor: Anchor::Body(Chest),
                offset: Vec3::new(1.1, 0.5, 0.0),
                tilt: None,
                joint: Some(JointBinding::new(Channel::UpperArm, x)),
                scale: Vec3::new(0.15, 0.9, 0.5),
                color: LIMB_ORANGE,
                primitive: Primitive::Cube,
            },
            Part {
                id: RightLowerArm,
                anchor: Anchor::Joint(RightUpperArm),
                offset: Vec3::new(0.03, -0.7, 0.0),
                tilt: None,
                joint: Some(JointBinding::new(Channel::LowerArm, x)),
                scale: Vec3::new(0.12, 0.6, 0.4),
                color: LIMB_ORANGE,
                primitive: Primitive::Cube,
            },
            Part {
                id: RightHand,
                anchor: Anchor::Joint(RightLowerArm),
                offset: Vec3::new(0.02, -0.15, 0.0),
                tilt: None,
                joint: None,
                scale: Vec3::new(0.1, 0.1, 0.3),
                color: DARK_BROWN,
                primitive: Primitive::Cube,
            },
            Part {
                id: LeftUpperLeg,
                anchor: Anchor::Body(Chest),
                offset: Vec3::new(0.25, -0.4, 0.0),
                tilt: None,
                joint: Some(JointBinding::new(Channel::LeftLeg, x)),
                scale: Vec3::new(0.15, 0.3, 0.15),
                color: LIMB_ORANGE,
                primitive: Primitive::Cube,
            },
            // The feet anchor on the scaled leg frame, so the leg's scale
            // leaks into the foot's position and size. Inherited from the
            // figure's defining geometry; do not "fix".
            Part {
                id: LeftFoot,
                anchor: Anchor::Body(LeftUpperLeg),
                offset: Vec3::new(0.0, -0.4, -1.0),
                tilt: None,
                joint: Some(JointBinding::new(Channel::LeftFoot, x)),
                scale: Vec3::new(1.0, 0.3, 1.5),
                color: DARK_BROWN,
                primitive: Primitive::Cube,
            },
            Part {
                id: RightUpperLeg,
                anchor: Anchor::Body(Chest),
                offset: Vec3::new(0.6, -0.4, 0.0),
                tilt: None,
                joint: Some(JointBinding::new(Channel::RightLeg, x)),
                scale: Vec3::new(0.15, 0.3, 0.15),
                color: LIMB_ORANGE,
                primitive: Primitive::Cube,
            },
            Part {
                id: RightFoot,
                anchor: Anchor::Body(RightUpperLeg),
                offset: Vec3::new(0.0, -0.4, -1.0),
                tilt: None,
                joint: Some(JointBinding::new(Channel::RightFoot, x)),
                scale: Vec3::new(1.0, 0.3, 1.5),
                color: DARK_BROWN,
                primitive: Primitive::Cube,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critter_has_all_parts_in_parent_first_order() {
        let rig = Rig::critter();
        assert_eq!(rig.len(), PartId::COUNT);

        for (i, part) in rig.parts().iter().enumerate() {
            if let Some(parent) = part.anchor.parent() {
                assert!(
                    rig.parts()[..i].iter().any(|p| p.id == parent),
                    "{:?} appears before its parent {:?}",
                    part.id,
                    parent
                );
            }
        }
    }

    #[test]
    fn chest_is_the_only_root() {
        let rig = Rig::critter();
        let roots: Vec<_> = rig
            .parts()
            .iter()
            .filter(|p| p.anchor == Anchor::Root)
            .map(|p| p.id)
            .collect();
        assert_eq!(roots, vec![PartId::Chest]);
    }

    #[test]
    fn elbows_mirror_the_shared_lower_arm_channel() {
        let rig = Rig::critter();
        let sign_of = |id: PartId| {
            rig.parts()
                .iter()
                .find(|p| p.id == id)
                .and_then(|p| p.joint)
                .map(|j| j.sign)
                .unwrap()
        };
        assert_eq!(sign_of(PartId::LeftLowerArm), -1.0);
        assert_eq!(sign_of(PartId::RightLowerArm), 1.0);
    }

    #[test]
    fn head_is_the_only_pentagon() {
        let rig = Rig::critter();
        let pentagons: Vec<_> = rig
            .parts()
            .iter()
            .filter(|p| p.primitive == Primitive::Pentagon)
            .map(|p| p.id)
            .collect();
        assert_eq!(pentagons, vec![PartId::Head]);
    }
}
