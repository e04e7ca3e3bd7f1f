use glam::{Mat4, Vec3};

/// Degrees of yaw/pitch added per pixel of pointer drag.
const DRAG_DEGREES_PER_PIXEL: f32 = 0.5;

/// The viewer's orbit orientation: pitch and yaw in degrees, plus a
/// slider-set base yaw. Pitch is clamped to [-90, 90]; the dragged yaw is
/// wrapped to [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub pitch: f32,
    pub yaw: f32,
    pub base_yaw: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            pitch: 0.0,
            yaw: 0.0,
            base_yaw: 0.0,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a pointer drag of `(dx, dy)` pixels: half the horizontal delta
    /// goes to yaw, half the vertical delta to pitch.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        // rem_euclid rounds a tiny negative sum up to exactly 360.0 in f32;
        // the yaw range is half-open, so fold that case back to zero.
        let yaw = (self.yaw + dx * DRAG_DEGREES_PER_PIXEL).rem_euclid(360.0);
        self.yaw = if yaw >= 360.0 { 0.0 } else { yaw };
        self.pitch = (self.pitch + dy * DRAG_DEGREES_PER_PIXEL).clamp(-90.0, 90.0);
    }

    /// Slider override for the base yaw. Resets the dragged yaw, so the
    /// slider value is the full horizontal orientation afterwards.
    pub fn set_base_yaw(&mut self, degrees: f32) {
        self.base_yaw = degrees;
        self.yaw = 0.0;
    }

    /// The global rotate matrix: pitch about X, then total yaw about Y.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_axis_angle(Vec3::X, self.pitch.to_radians())
            * Mat4::from_axis_angle(Vec3::Y, (self.base_yaw + self.yaw).to_radians())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_drag_adds_half_the_delta_to_yaw() {
        let mut cam = OrbitCamera::new();
        cam.drag(100.0, 0.0);
        assert_eq!(cam.yaw, 50.0);
        assert_eq!(cam.pitch, 0.0);
    }

    #[test]
    fn pitch_clamps_to_vertical_limits() {
        let mut cam = OrbitCamera::new();
        cam.drag(0.0, 500.0);
        assert_eq!(cam.pitch, 90.0);
        cam.drag(0.0, -10_000.0);
        assert_eq!(cam.pitch, -90.0);
    }

    #[test]
    fn yaw_wraps_into_zero_to_360() {
        let mut cam = OrbitCamera::new();
        cam.drag(1000.0, 0.0);
        assert!((0.0..360.0).contains(&cam.yaw));
        assert!((cam.yaw - 140.0).abs() < 1e-3);

        cam.drag(-2000.0, 0.0);
        assert!((0.0..360.0).contains(&cam.yaw));
    }

    #[test]
    fn tiny_negative_drag_stays_below_360() {
        let mut cam = OrbitCamera::new();
        cam.drag(-2.0e-7, 0.0);
        assert!((0.0..360.0).contains(&cam.yaw), "yaw = {}", cam.yaw);
    }

    #[test]
    fn base_yaw_override_resets_dragged_yaw() {
        let mut cam = OrbitCamera::new();
        cam.drag(100.0, 0.0);
        cam.set_base_yaw(180.0);
        assert_eq!(cam.base_yaw, 180.0);
        assert_eq!(cam.yaw, 0.0);
    }

    #[test]
    fn matrix_composes_pitch_then_yaw() {
        let mut cam = OrbitCamera::new();
        cam.pitch = 30.0;
        cam.base_yaw = 45.0;
        cam.drag(20.0, 0.0); // +10 yaw

        let expected = Mat4::from_axis_angle(Vec3::X, 30.0_f32.to_radians())
            * Mat4::from_axis_angle(Vec3::Y, 55.0_f32.to_radians());

        for (a, b) in cam
            .matrix()
            .to_cols_array()
            .iter()
            .zip(expected.to_cols_array().iter())
        {
            assert!((a - b).abs() < 1e-5);
        }
    }
}
