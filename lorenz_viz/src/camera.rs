use glam::{Mat4, Vec3};

/// Orbit camera for the attractor view.
///
/// The eye sits on a spherical offset (distance, yaw, pitch; degrees)
/// around a pannable target, Z-up. Camera state is independent of the
/// simulation core: it changes only through the input-driven methods here
/// and shares nothing but the per-frame read cycle.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pose: Pose,
    home: Pose,
    fov_y: f32,
    near: f32,
    far: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pose {
    distance: f32,
    yaw: f32,
    pitch: f32,
    target: Vec3,
}

const MIN_PITCH: f32 = -89.0;
const MAX_PITCH: f32 = 89.0;
const MIN_DISTANCE: f32 = 5.0;
const MAX_DISTANCE: f32 = 200.0;

impl Default for Camera {
    /// The framing the application opens with: looking at the attractor
    /// body, which is centered around z ≈ 25 for the canonical parameters.
    fn default() -> Self {
        Self::new(60.0, 45.0, 20.0)
    }
}

impl Camera {
    pub fn new(distance: f32, yaw_deg: f32, pitch_deg: f32) -> Self {
        let pose = Pose {
            distance,
            yaw: yaw_deg,
            pitch: pitch_deg,
            target: Vec3::new(0.0, 0.0, 25.0),
        };
        Self {
            pose,
            home: pose,
            fov_y: 45.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Eye position in world space, from spherical to Cartesian.
    pub fn position(&self) -> Vec3 {
        let yaw = self.pose.yaw.to_radians();
        let pitch = self.pose.pitch.to_radians();
        let offset = Vec3::new(
            self.pose.distance * pitch.cos() * yaw.cos(),
            self.pose.distance * pitch.cos() * yaw.sin(),
            self.pose.distance * pitch.sin(),
        );
        self.pose.target + offset
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.pose.target, Vec3::Z)
    }

    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y.to_radians(), aspect_ratio, self.near, self.far)
    }

    /// Orbits around the target. Pitch is clamped short of the poles to
    /// avoid gimbal lock; yaw wraps to [0, 360).
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.pose.yaw = (self.pose.yaw + delta_yaw).rem_euclid(360.0);
        self.pose.pitch = (self.pose.pitch + delta_pitch).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Moves the eye along the view ray, clamped to a usable range.
    pub fn zoom(&mut self, delta: f32) {
        self.pose.distance = (self.pose.distance + delta).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Slides the target in the camera plane. Scaled by distance so a
    /// given drag covers the same on-screen fraction at any zoom level.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let forward = (self.pose.target - self.position()).normalize();
        let right = forward.cross(Vec3::Z).normalize();
        let up = right.cross(forward);

        let speed = self.pose.distance * 0.01;
        self.pose.target += right * (delta_x * speed) + up * (delta_y * speed);
    }

    /// Restores the construction-time framing.
    pub fn reset(&mut self) {
        self.pose = self.home;
    }

    pub fn distance(&self) -> f32 {
        self.pose.distance
    }

    pub fn yaw(&self) -> f32 {
        self.pose.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pose.pitch
    }

    pub fn target(&self) -> Vec3 {
        self.pose.target
    }
}
