//! The reference [`ScriptHost`] implementation.
//!
//! [`SceneHost`] fulfils the call surface over a [`Scene`] and a
//! [`ComponentRegistry`], with the conventions the boundary promises:
//! identity lookups miss with [`Entity::INVALID`], stale ids surface as
//! `Err(ScriptError::InvalidEntity)`, and the rotation's Euler and
//! direction views are derived from the one canonical quaternion on every
//! call.

use ember_component::{ComponentTypeId, Entity};
use ember_math::{Quat, Transform3D, Vec3};
use ember_script::{ScriptError, ScriptHost, ScriptInstanceId};
use tracing::{debug, warn};

use crate::registry::ComponentRegistry;
use crate::scene::Scene;

/// An in-process host serving script calls from a [`Scene`].
///
/// Shareable as `Arc<dyn ScriptHost>`; all methods take `&self` and the
/// scene handles its own synchronisation.
#[derive(Debug)]
pub struct SceneHost {
    scene: Scene,
    registry: ComponentRegistry,
}

impl SceneHost {
    /// A host with an empty scene and the built-in component kinds
    /// registered.
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(ComponentRegistry::with_builtin_kinds())
    }

    /// A host with an empty scene and a caller-assembled registry.
    #[must_use]
    pub fn with_registry(registry: ComponentRegistry) -> Self {
        Self {
            scene: Scene::new(),
            registry,
        }
    }

    /// The underlying scene, for host-side (non-script) manipulation.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Spawn a named entity with no components.
    pub fn spawn_empty(&self, name: &str) -> Entity {
        self.scene.spawn_named(name)
    }

    /// Spawn a named entity carrying the given transform.
    pub fn spawn(&self, name: &str, transform: Transform3D) -> Entity {
        let entity = self.scene.spawn_named(name);
        // The record was just created, so the insert cannot fail.
        let _ = self
            .scene
            .insert_component(entity, ComponentTypeId::of::<Transform3D>(), Box::new(transform));
        entity
    }

    /// Bind a script object to an entity. Host-side API; scripts only
    /// ever read the binding back through `get_script_instance`.
    pub fn bind_script_instance(
        &self,
        entity: Entity,
        instance: ScriptInstanceId,
    ) -> Result<(), ScriptError> {
        self.scene.bind_script_instance(entity, instance)
    }
}

impl Default for SceneHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptHost for SceneHost {
    fn entity_has_component(&self, entity: Entity, kind: ComponentTypeId) -> bool {
        if !self.registry.contains(kind) {
            warn!(?kind, "has_component query for unregistered kind");
            return false;
        }
        self.scene.has_component(entity, kind)
    }

    fn entity_add_component(
        &self,
        entity: Entity,
        kind: ComponentTypeId,
    ) -> Result<(), ScriptError> {
        let Some(vtable) = self.registry.get(kind) else {
            warn!(?kind, "add_component call for unregistered kind");
            return Err(ScriptError::UnknownComponentKind(kind));
        };
        // Add-or-replace: a kind that is already present is reset to its
        // default.
        self.scene.insert_component(entity, kind, vtable.make_default())
    }

    fn entity_find_by_name(&self, name: &str) -> Entity {
        self.scene.find_by_name(name)
    }

    fn entity_instantiate(&self, source: Entity, translation: Vec3) -> Entity {
        let copy = self.scene.duplicate(source, &self.registry);
        if !copy.is_valid() {
            debug!(%source, "instantiate from stale entity");
            return Entity::INVALID;
        }
        // Sourceless copies without a transform keep no position; that is
        // the host's call to make.
        let _ = self
            .scene
            .with_component_mut::<Transform3D, _>(copy, |t| t.translation = translation);
        debug!(%source, %copy, "instantiated entity");
        copy
    }

    fn entity_destroy(&self, entity: Entity) {
        if self.scene.despawn(entity) {
            debug!(%entity, "destroyed entity");
        }
    }

    fn entity_set_visibility(&self, entity: Entity, visible: bool) -> Result<(), ScriptError> {
        self.scene.set_visibility(entity, visible)
    }

    fn entity_get_visibility(&self, entity: Entity) -> Result<bool, ScriptError> {
        self.scene.visibility(entity)
    }

    fn get_script_instance(&self, entity: Entity) -> Option<ScriptInstanceId> {
        self.scene.script_instance(entity)
    }

    fn transform_get_forward(&self, entity: Entity) -> Result<Vec3, ScriptError> {
        self.scene.with_component(entity, Transform3D::forward)
    }

    fn transform_set_forward(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError> {
        self.scene.with_component_mut(entity, |t: &mut Transform3D| t.set_forward(value))
    }

    fn transform_get_right(&self, entity: Entity) -> Result<Vec3, ScriptError> {
        self.scene.with_component(entity, Transform3D::right)
    }

    fn transform_set_right(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError> {
        self.scene.with_component_mut(entity, |t: &mut Transform3D| t.set_right(value))
    }

    fn transform_get_up(&self, entity: Entity) -> Result<Vec3, ScriptError> {
        self.scene.with_component(entity, Transform3D::up)
    }

    fn transform_set_up(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError> {
        self.scene.with_component_mut(entity, |t: &mut Transform3D| t.set_up(value))
    }

    fn transform_get_translation(&self, entity: Entity) -> Result<Vec3, ScriptError> {
        self.scene.with_component(entity, |t: &Transform3D| t.translation)
    }

    fn transform_set_translation(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError> {
        self.scene.with_component_mut(entity, |t: &mut Transform3D| t.translation = value)
    }

    fn transform_get_rotation(&self, entity: Entity) -> Result<Quat, ScriptError> {
        self.scene.with_component(entity, |t: &Transform3D| t.rotation)
    }

    fn transform_set_rotation(&self, entity: Entity, value: Quat) -> Result<(), ScriptError> {
        self.scene.with_component_mut(entity, |t: &mut Transform3D| t.rotation = value)
    }

    fn transform_get_euler_angles(&self, entity: Entity) -> Result<Vec3, ScriptError> {
        self.scene.with_component(entity, Transform3D::euler_angles)
    }

    fn transform_set_euler_angles(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError> {
        self.scene.with_component_mut(entity, |t: &mut Transform3D| t.set_euler_angles(value))
    }

    fn transform_get_scale(&self, entity: Entity) -> Result<Vec3, ScriptError> {
        self.scene.with_component(entity, |t: &Transform3D| t.scale)
    }

    fn transform_set_scale(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError> {
        self.scene.with_component_mut(entity, |t: &mut Transform3D| t.scale = value)
    }
}
