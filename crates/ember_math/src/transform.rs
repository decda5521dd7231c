//! 3D transform component.
//!
//! [`Transform3D`] is the host-side state the `Transform` façade projects:
//! translation, rotation, and scale. The quaternion is the single canonical
//! rotation representation; Euler angles and the forward/right/up direction
//! vectors are computed from it on demand and never stored, so the two
//! rotation views cannot drift apart.

use ember_component::Component;
use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Euler order used for the angle view of the rotation, in radians.
/// x = pitch, y = yaw, z = roll.
pub const EULER_ORDER: EulerRot = EulerRot::XYZ;

/// Engine axis convention: entities face −Z by default.
pub const WORLD_FORWARD: Vec3 = Vec3::NEG_Z;
/// Engine axis convention: +X is to the right of an unrotated entity.
pub const WORLD_RIGHT: Vec3 = Vec3::X;
/// Engine axis convention: +Y is up.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Position, rotation, and scale in world space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform3D {
    /// World-space translation.
    pub translation: Vec3,
    /// Rotation as a unit quaternion. Canonical — every other rotation
    /// view is derived from this field.
    pub rotation: Quat,
    /// Per-axis scale factor.
    pub scale: Vec3,
}

impl Transform3D {
    /// The identity transform: origin, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Identity transform moved to the given translation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// The direction this transform faces.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * WORLD_FORWARD
    }

    /// The direction to this transform's right.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * WORLD_RIGHT
    }

    /// The direction above this transform.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * WORLD_UP
    }

    /// Reorient so that [`Transform3D::forward`] points along `direction`.
    ///
    /// Uses the shortest arc from the engine forward axis. A zero-length
    /// `direction` leaves the rotation unchanged.
    pub fn set_forward(&mut self, direction: Vec3) {
        self.align_axis(WORLD_FORWARD, direction);
    }

    /// Reorient so that [`Transform3D::right`] points along `direction`.
    pub fn set_right(&mut self, direction: Vec3) {
        self.align_axis(WORLD_RIGHT, direction);
    }

    /// Reorient so that [`Transform3D::up`] points along `direction`.
    pub fn set_up(&mut self, direction: Vec3) {
        self.align_axis(WORLD_UP, direction);
    }

    fn align_axis(&mut self, axis: Vec3, direction: Vec3) {
        let dir = direction.normalize_or_zero();
        if dir != Vec3::ZERO {
            self.rotation = Quat::from_rotation_arc(axis, dir);
        }
    }

    /// The rotation as Euler angles (radians, [`EULER_ORDER`]).
    #[must_use]
    pub fn euler_angles(&self) -> Vec3 {
        let (x, y, z) = self.rotation.to_euler(EULER_ORDER);
        Vec3::new(x, y, z)
    }

    /// Replace the rotation from Euler angles (radians, [`EULER_ORDER`]).
    pub fn set_euler_angles(&mut self, angles: Vec3) {
        self.rotation = Quat::from_euler(EULER_ORDER, angles.x, angles.y, angles.z);
    }

    /// The 4×4 model matrix for this transform.
    #[must_use]
    pub fn to_matrix(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Component for Transform3D {
    fn type_name() -> &'static str {
        "Transform"
    }
}
