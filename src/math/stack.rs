use glam::{Mat4, Vec3};

/// A 4x4 matrix accumulator for composing model transforms.
///
/// Each operation right-multiplies the current matrix, so a chain of
/// `translate`/`rotate`/`scale` calls applies in the order written when the
/// matrix is used to map local geometry into world space. The type is `Copy`,
/// so a parent's transform can be snapshotted and each child branch composed
/// onto its own independent copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixStack {
    m: Mat4,
}

impl Default for MatrixStack {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl MatrixStack {
    pub const IDENTITY: Self = Self { m: Mat4::IDENTITY };

    pub fn new() -> Self {
        Self::IDENTITY
    }

    pub fn from_matrix(m: Mat4) -> Self {
        Self { m }
    }

    pub fn translate(&mut self, dx: f32, dy: f32, dz: f32) -> &mut Self {
        self.m *= Mat4::from_translation(Vec3::new(dx, dy, dz));
        self
    }

    /// Rotate by `angle_degrees` about `axis`. The axis is normalized here;
    /// a near-zero axis leaves the matrix unchanged.
    pub fn rotate(&mut self, angle_degrees: f32, axis: Vec3) -> &mut Self {
        let len_sq = axis.length_squared();
        if len_sq > 1e-8 {
            let axis = axis / len_sq.sqrt();
            self.m *= Mat4::from_axis_angle(axis, angle_degrees.to_radians());
        }
        self
    }

    pub fn scale(&mut self, sx: f32, sy: f32, sz: f32) -> &mut Self {
        self.m *= Mat4::from_scale(Vec3::new(sx, sy, sz));
        self
    }

    pub fn matrix(&self) -> Mat4 {
        self.m
    }
}

impl From<MatrixStack> for Mat4 {
    fn from(stack: MatrixStack) -> Self {
        stack.m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPS: f32 = 1e-5;

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        for (x, y) in a.to_cols_array().iter().zip(b.to_cols_array().iter()) {
            assert!((x - y).abs() < EPS, "matrices differ:\n{a}\nvs\n{b}");
        }
    }

    #[test]
    fn identity_by_default() {
        assert_mat_eq(MatrixStack::new().matrix(), Mat4::IDENTITY);
        assert_mat_eq(MatrixStack::default().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn translate_rotate_scale_matches_closed_form() {
        let mut stack = MatrixStack::new();
        stack
            .translate(1.0, 2.0, 3.0)
            .rotate(90.0, Vec3::X)
            .scale(2.0, 0.5, 1.5);

        let expected = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
            * Mat4::from_axis_angle(Vec3::X, std::f32::consts::FRAC_PI_2)
            * Mat4::from_scale(Vec3::new(2.0, 0.5, 1.5));

        assert_mat_eq(stack.matrix(), expected);
    }

    #[test]
    fn rotate_normalizes_axis() {
        let mut a = MatrixStack::new();
        a.rotate(45.0, Vec3::new(2.0, 0.0, 2.0));
        let mut b = MatrixStack::new();
        b.rotate(45.0, Vec3::new(1.0, 0.0, 1.0).normalize());
        assert_mat_eq(a.matrix(), b.matrix());
    }

    #[test]
    fn zero_axis_rotation_is_noop() {
        let mut stack = MatrixStack::new();
        stack.translate(1.0, 0.0, 0.0).rotate(30.0, Vec3::ZERO);
        assert_mat_eq(
            stack.matrix(),
            Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0)),
        );
    }

    #[test]
    fn snapshot_is_independent_of_further_mutation() {
        let mut parent = MatrixStack::new();
        parent.translate(0.0, 1.0, 0.0);

        let snapshot = parent;
        parent.scale(3.0, 3.0, 3.0);

        assert_mat_eq(
            snapshot.matrix(),
            Mat4::from_translation(Vec3::new(0.0, 1.0, 0.0)),
        );
        // The mutated copy did pick up the scale.
        let scaled_point = parent.matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!((scaled_point.x - 3.0).abs() < EPS);
    }
}
