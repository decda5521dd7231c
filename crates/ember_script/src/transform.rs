//! Transform component façade.

use std::sync::Arc;

use ember_component::Entity;
use ember_math::{Quat, Vec3};

use crate::error::ScriptError;
use crate::host::ScriptHost;

/// Typed view over one entity's transform, backed entirely by host state.
///
/// Every accessor is a single forwarded call carrying the owning entity's
/// id. Nothing is cached: two consecutive reads may observe different
/// values if another engine system moved the entity in between, which is
/// exactly the point — scripts always see current state.
///
/// The rotation is exposed through two views, [`Transform::rotation`]
/// (quaternion) and [`Transform::euler_angles`]; the host keeps one
/// canonical rotation, so a write through either view is reflected in
/// reads through the other.
#[derive(Clone)]
pub struct Transform {
    host: Arc<dyn ScriptHost>,
    entity: Entity,
}

impl Transform {
    /// Façade over `entity`'s transform on `host`.
    #[must_use]
    pub fn new(host: Arc<dyn ScriptHost>, entity: Entity) -> Self {
        Self { host, entity }
    }

    /// The owning entity.
    #[must_use]
    pub fn entity(&self) -> Entity {
        self.entity
    }

    /// The direction the entity faces.
    pub fn forward(&self) -> Result<Vec3, ScriptError> {
        self.host.transform_get_forward(self.entity)
    }

    /// Turn the entity to face along `value`.
    pub fn set_forward(&self, value: Vec3) -> Result<(), ScriptError> {
        self.host.transform_set_forward(self.entity, value)
    }

    /// The direction to the entity's right.
    pub fn right(&self) -> Result<Vec3, ScriptError> {
        self.host.transform_get_right(self.entity)
    }

    /// Point the entity's right axis along `value`.
    pub fn set_right(&self, value: Vec3) -> Result<(), ScriptError> {
        self.host.transform_set_right(self.entity, value)
    }

    /// The direction above the entity.
    pub fn up(&self) -> Result<Vec3, ScriptError> {
        self.host.transform_get_up(self.entity)
    }

    /// Point the entity's up axis along `value`.
    pub fn set_up(&self, value: Vec3) -> Result<(), ScriptError> {
        self.host.transform_set_up(self.entity, value)
    }

    /// World-space translation.
    pub fn translation(&self) -> Result<Vec3, ScriptError> {
        self.host.transform_get_translation(self.entity)
    }

    /// Move the entity to `value`.
    pub fn set_translation(&self, value: Vec3) -> Result<(), ScriptError> {
        self.host.transform_set_translation(self.entity, value)
    }

    /// Rotation as a quaternion.
    pub fn rotation(&self) -> Result<Quat, ScriptError> {
        self.host.transform_get_rotation(self.entity)
    }

    /// Replace the rotation from a quaternion.
    pub fn set_rotation(&self, value: Quat) -> Result<(), ScriptError> {
        self.host.transform_set_rotation(self.entity, value)
    }

    /// Rotation as Euler angles (radians) — same underlying state as
    /// [`Transform::rotation`].
    pub fn euler_angles(&self) -> Result<Vec3, ScriptError> {
        self.host.transform_get_euler_angles(self.entity)
    }

    /// Replace the rotation from Euler angles.
    pub fn set_euler_angles(&self, value: Vec3) -> Result<(), ScriptError> {
        self.host.transform_set_euler_angles(self.entity, value)
    }

    /// Per-axis scale.
    pub fn scale(&self) -> Result<Vec3, ScriptError> {
        self.host.transform_get_scale(self.entity)
    }

    /// Replace the per-axis scale.
    pub fn set_scale(&self, value: Vec3) -> Result<(), ScriptError> {
        self.host.transform_set_scale(self.entity, value)
    }
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform").field("entity", &self.entity).finish()
    }
}
