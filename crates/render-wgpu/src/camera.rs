use glam::{Mat4, Vec3};

/// World up vector; the camera never rolls.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Pitch is kept strictly inside the poles to avoid gimbal flip.
const PITCH_LIMIT_DEG: f32 = 89.0;
/// Field-of-view bounds for scroll zoom, degrees.
const FOV_MIN_DEG: f32 = 1.0;
const FOV_MAX_DEG: f32 = 45.0;
/// Half extent of the orthographic view volume on both axes.
const ORTHO_HALF_EXTENT: f32 = 5.0;

/// Projection formula selected by the toggle key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    pub fn toggled(self) -> Self {
        match self {
            ProjectionMode::Perspective => ProjectionMode::Orthographic,
            ProjectionMode::Orthographic => ProjectionMode::Perspective,
        }
    }
}

/// Fly camera with position, yaw/pitch in degrees, and projection state.
///
/// The front vector is always re-derived from yaw and pitch; it is never
/// stored, so it cannot drift out of unit length.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    pub position: Vec3,
    /// Horizontal look angle, degrees. Unbounded; wraps through trig.
    pub yaw: f32,
    /// Vertical look angle, degrees. Clamped to +-89.
    pub pitch: f32,
    /// Vertical field of view, degrees. Clamped to [1, 45].
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub speed: f32,
    pub sensitivity: f32,
    pub projection: ProjectionMode,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            yaw: -90.0,
            pitch: 0.0,
            fov: 45.0,
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 100.0,
            speed: 2.5,
            sensitivity: 0.1,
            projection: ProjectionMode::default(),
        }
    }
}

impl FlyCamera {
    /// Unit look direction from yaw and pitch.
    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    /// Unit strafe direction.
    pub fn right(&self) -> Vec3 {
        self.front().cross(WORLD_UP).normalize()
    }

    pub fn move_forward(&mut self, dt: f32) {
        self.position += self.front() * self.speed * dt;
    }

    pub fn move_backward(&mut self, dt: f32) {
        self.position -= self.front() * self.speed * dt;
    }

    pub fn move_left(&mut self, dt: f32) {
        self.position -= self.right() * self.speed * dt;
    }

    pub fn move_right(&mut self, dt: f32) {
        self.position += self.right() * self.speed * dt;
    }

    pub fn move_up(&mut self, dt: f32) {
        self.position += WORLD_UP * self.speed * dt;
    }

    pub fn move_down(&mut self, dt: f32) {
        self.position -= WORLD_UP * self.speed * dt;
    }

    /// Accumulate a screen-space look delta (positive dy is downward).
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Scroll zoom: positive scroll narrows the field of view.
    pub fn zoom(&mut self, scroll_y: f32) {
        self.fov = (self.fov - scroll_y).clamp(FOV_MIN_DEG, FOV_MAX_DEG);
    }

    pub fn toggle_projection(&mut self) {
        self.projection = self.projection.toggled();
        tracing::debug!(mode = ?self.projection, "projection switched");
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front(), WORLD_UP)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            ProjectionMode::Perspective => {
                Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
            }
            ProjectionMode::Orthographic => Mat4::orthographic_rh(
                -ORTHO_HALF_EXTENT,
                ORTHO_HALF_EXTENT,
                -ORTHO_HALF_EXTENT,
                ORTHO_HALF_EXTENT,
                self.near,
                self.far,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_stays_clamped_under_any_delta_sequence() {
        let mut cam = FlyCamera::default();
        let deltas = [
            (5.0, -2000.0),
            (-3.0, 4000.0),
            (0.0, -1.0),
            (800.0, -90000.0),
            (0.5, 0.5),
            (0.0, 123456.0),
        ];
        for (dx, dy) in deltas {
            cam.look(dx, dy);
            assert!(cam.pitch >= -89.0 && cam.pitch <= 89.0, "pitch {}", cam.pitch);
        }
    }

    #[test]
    fn fov_stays_clamped_under_any_scroll_sequence() {
        let mut cam = FlyCamera::default();
        for scroll in [100.0, -300.0, 1.0, -1.0, 44.0, 0.25, -0.25, 9999.0] {
            cam.zoom(scroll);
            assert!(cam.fov >= 1.0 && cam.fov <= 45.0, "fov {}", cam.fov);
        }
    }

    #[test]
    fn front_is_unit_length_after_updates() {
        let mut cam = FlyCamera::default();
        for (dx, dy) in [(13.0, 7.0), (-400.0, 250.0), (0.01, -0.01), (90.0, 90.0)] {
            cam.look(dx, dy);
            assert!((cam.front().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn yaw_is_unbounded() {
        let mut cam = FlyCamera::default();
        for _ in 0..100 {
            cam.look(100.0, 0.0);
        }
        assert!(cam.yaw > 500.0);
        assert!((cam.front().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn movement_is_frame_rate_independent() {
        // Same wall time at different step sizes lands in the same place.
        let mut coarse = FlyCamera::default();
        let mut fine = FlyCamera::default();
        for _ in 0..10 {
            coarse.move_forward(0.1);
            coarse.move_right(0.1);
        }
        for _ in 0..1000 {
            fine.move_forward(0.001);
            fine.move_right(0.001);
        }
        assert!((coarse.position - fine.position).length() < 1e-3);
    }

    #[test]
    fn toggle_flips_the_projection_formula() {
        let mut cam = FlyCamera::default();
        let perspective = cam.projection_matrix();
        cam.toggle_projection();
        assert_eq!(cam.projection, ProjectionMode::Orthographic);
        assert_ne!(cam.projection_matrix(), perspective);
        cam.toggle_projection();
        assert_eq!(cam.projection, ProjectionMode::Perspective);
    }

    #[test]
    fn default_looks_down_negative_z() {
        let cam = FlyCamera::default();
        let front = cam.front();
        assert!((front.z - -1.0).abs() < 1e-5);
        assert!(front.x.abs() < 1e-5);
        assert!(front.y.abs() < 1e-5);
    }

    #[test]
    fn view_matrix_is_finite() {
        let cam = FlyCamera::default();
        let vp = cam.projection_matrix() * cam.view_matrix();
        assert!(!vp.col(0).x.is_nan());
    }
}
