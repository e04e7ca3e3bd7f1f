/// Resting shoulder angle the upper-arm oscillation is centered on.
pub const UPPER_ARM_REST_DEG: f32 = 45.0;

/// Current joint angles, jump height, and animation flags for the figure.
///
/// Angles are in degrees; `jump` is a world-space vertical offset. The input
/// layer writes angle fields directly (slider overrides), the frame driver
/// calls [`advance`](Self::advance) each tick. Nothing else mutates this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseState {
    pub upper_arm: f32,
    pub lower_arm: f32,
    pub head: f32,
    pub left_leg: f32,
    pub right_leg: f32,
    pub left_foot: f32,
    pub right_foot: f32,
    pub jump: f32,

    pub animate_upper_arm: bool,
    pub animate_lower_arm: bool,
    pub animate_all: bool,
    pub poke: bool,
}

impl Default for PoseState {
    fn default() -> Self {
        Self {
            upper_arm: UPPER_ARM_REST_DEG,
            lower_arm: 0.0,
            head: 0.0,
            left_leg: 0.0,
            right_leg: 0.0,
            left_foot: 0.0,
            right_foot: 0.0,
            jump: 0.0,
            animate_upper_arm: false,
            animate_lower_arm: false,
            animate_all: true,
            poke: false,
        }
    }
}

impl PoseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle poke mode, returning the new flag so hosts can show or hide
    /// their status indicator.
    pub fn toggle_poke(&mut self) -> bool {
        self.poke = !self.poke;
        self.poke
    }

    /// Derive joint angles for elapsed time `t` in seconds.
    ///
    /// In poke mode every channel follows the high-amplitude profile. Outside
    /// it, the arm channels only animate while their individual flags are on
    /// (otherwise they hold the last slider-set value), the head/leg/foot
    /// channels follow `animate_all` or are forced to zero, and the figure
    /// never jumps.
    pub fn advance(&mut self, t: f32) {
        if self.poke {
            self.upper_arm = UPPER_ARM_REST_DEG + 80.0 * (t * 10.0).sin();
            self.lower_arm = 30.0 * (t * 12.0).sin();
            self.head = 20.0 * (t * 8.0).sin();
            self.left_leg = 30.0 * (t * 6.0).sin();
            self.right_leg = -30.0 * (t * 6.0).sin();
            self.left_foot = 15.0 * (t * 7.0).sin();
            self.right_foot = -15.0 * (t * 7.0).sin();
            self.jump = 0.2 * (t * 10.0).sin().abs();
        } else {
            if self.animate_upper_arm {
                self.upper_arm = UPPER_ARM_REST_DEG + 45.0 * t.sin();
            }
            if self.animate_lower_arm {
                self.lower_arm = -10.0 * (3.0 * t).sin();
            }

            if self.animate_all {
                self.head = 10.0 * (t * 2.0).sin();
                self.left_leg = 20.0 * t.sin();
                self.right_leg = -20.0 * t.sin();
                self.left_foot = 10.0 * (t * 1.5).sin();
                self.right_foot = -10.0 * (t * 1.5).sin();
            } else {
                self.head = 0.0;
                self.left_leg = 0.0;
                self.right_leg = 0.0;
                self.left_foot = 0.0;
                self.right_foot = 0.0;
            }
            self.jump = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn poke_profile_matches_functional_forms() {
        let mut pose = PoseState::new();
        pose.poke = true;

        for &t in &[0.0_f32, 0.3, 1.7, 12.5, 100.0] {
            pose.advance(t);
            assert!((pose.upper_arm - (45.0 + 80.0 * (10.0 * t).sin())).abs() < EPS);
            assert!((pose.lower_arm - 30.0 * (12.0 * t).sin()).abs() < EPS);
            assert!((pose.head - 20.0 * (8.0 * t).sin()).abs() < EPS);
            assert!((pose.left_leg - 30.0 * (6.0 * t).sin()).abs() < EPS);
            assert!((pose.right_leg + 30.0 * (6.0 * t).sin()).abs() < EPS);
            assert!((pose.left_foot - 15.0 * (7.0 * t).sin()).abs() < EPS);
            assert!((pose.right_foot + 15.0 * (7.0 * t).sin()).abs() < EPS);
            assert!((pose.jump - 0.2 * (10.0 * t).sin().abs()).abs() < EPS);
        }
    }

    #[test]
    fn jump_is_nonnegative_and_zero_outside_poke() {
        let mut pose = PoseState::new();
        pose.poke = true;
        for i in 0..200 {
            pose.advance(i as f32 * 0.07);
            assert!(pose.jump >= 0.0);
        }
        pose.poke = false;
        pose.advance(0.33);
        assert_eq!(pose.jump, 0.0);
    }

    #[test]
    fn arm_channels_hold_slider_values_when_toggles_off() {
        let mut pose = PoseState::new();
        pose.upper_arm = 72.0;
        pose.lower_arm = -15.0;
        pose.advance(2.0);
        assert_eq!(pose.upper_arm, 72.0);
        assert_eq!(pose.lower_arm, -15.0);
    }

    #[test]
    fn arm_channels_animate_when_toggles_on() {
        let mut pose = PoseState::new();
        pose.animate_upper_arm = true;
        pose.animate_lower_arm = true;
        let t = 1.25;
        pose.advance(t);
        assert!((pose.upper_arm - (45.0 + 45.0 * t.sin())).abs() < EPS);
        assert!((pose.lower_arm + 10.0 * (3.0 * t).sin()).abs() < EPS);
    }

    #[test]
    fn disabling_global_animation_forces_zeros() {
        let mut pose = PoseState::new();
        pose.advance(1.0);
        assert!(pose.head != 0.0);

        pose.animate_all = false;
        pose.advance(1.1);
        assert_eq!(pose.head, 0.0);
        assert_eq!(pose.left_leg, 0.0);
        assert_eq!(pose.right_leg, 0.0);
        assert_eq!(pose.left_foot, 0.0);
        assert_eq!(pose.right_foot, 0.0);
    }

    #[test]
    fn toggle_poke_flips_and_reports() {
        let mut pose = PoseState::new();
        assert!(pose.toggle_poke());
        assert!(pose.poke);
        assert!(!pose.toggle_poke());
        assert!(!pose.poke);
    }
}
