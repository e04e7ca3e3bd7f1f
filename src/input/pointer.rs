use super::camera::OrbitCamera;
use crate::pose::PoseState;

/// Mouse-button and drag tracking for the canvas surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    held: bool,
    last: (f32, f32),
}

impl Pointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Button press at `(x, y)`. With the modifier held this toggles poke
    /// mode; the new flag is returned so the host can show or hide its
    /// indicator. The press position is always recorded.
    pub fn press(&mut self, x: f32, y: f32, modifier: bool, pose: &mut PoseState) -> Option<bool> {
        let toggled = modifier.then(|| pose.toggle_poke());
        self.held = true;
        self.last = (x, y);
        toggled
    }

    /// Pointer motion. While the button is held this orbits the camera by
    /// the delta from the last position and returns true, telling the host
    /// to re-compose immediately rather than wait for the next frame.
    pub fn motion(&mut self, x: f32, y: f32, camera: &mut OrbitCamera) -> bool {
        if !self.held {
            return false;
        }
        let (lx, ly) = self.last;
        camera.drag(x - lx, y - ly);
        self.last = (x, y);
        true
    }

    pub fn release(&mut self) {
        self.held = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_press_records_position_without_toggling_poke() {
        let mut pointer = Pointer::new();
        let mut pose = PoseState::new();

        assert_eq!(pointer.press(10.0, 20.0, false, &mut pose), None);
        assert!(pointer.is_held());
        assert!(!pose.poke);
    }

    #[test]
    fn modified_press_toggles_poke_each_time() {
        let mut pointer = Pointer::new();
        let mut pose = PoseState::new();

        assert_eq!(pointer.press(0.0, 0.0, true, &mut pose), Some(true));
        assert!(pose.poke);
        pointer.release();
        assert_eq!(pointer.press(0.0, 0.0, true, &mut pose), Some(false));
        assert!(!pose.poke);
    }

    #[test]
    fn motion_only_orbits_while_held() {
        let mut pointer = Pointer::new();
        let mut pose = PoseState::new();
        let mut camera = OrbitCamera::new();

        assert!(!pointer.motion(50.0, 0.0, &mut camera));
        assert_eq!(camera.yaw, 0.0);

        pointer.press(0.0, 0.0, false, &mut pose);
        assert!(pointer.motion(100.0, 0.0, &mut camera));
        assert_eq!(camera.yaw, 50.0);

        pointer.release();
        assert!(!pointer.motion(200.0, 0.0, &mut camera));
        assert_eq!(camera.yaw, 50.0);
    }

    #[test]
    fn release_is_safe_to_apply_unconditionally() {
        let mut pointer = Pointer::new();
        let mut pose = PoseState::new();
        let mut camera = OrbitCamera::new();

        // Hosts may route a release past their UI layer without checking
        // whether a drag is in progress.
        pointer.release();
        assert!(!pointer.is_held());

        pointer.press(0.0, 0.0, false, &mut pose);
        pointer.release();
        pointer.release();
        assert!(!pointer.motion(50.0, 0.0, &mut camera));
        assert_eq!(camera.yaw, 0.0);
    }

    #[test]
    fn motion_deltas_accumulate_from_last_position() {
        let mut pointer = Pointer::new();
        let mut pose = PoseState::new();
        let mut camera = OrbitCamera::new();

        pointer.press(0.0, 0.0, false, &mut pose);
        pointer.motion(10.0, 4.0, &mut camera);
        pointer.motion(20.0, 8.0, &mut camera);

        assert_eq!(camera.yaw, 10.0);
        assert_eq!(camera.pitch, 4.0);
    }
}
