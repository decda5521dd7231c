//! Script-side entity handle.

use std::sync::Arc;

use ember_component::{Component, ComponentTypeId, Entity};
use ember_math::Vec3;

use crate::error::ScriptError;
use crate::host::{ScriptHost, ScriptInstanceId};
use crate::transform::Transform;

/// A script's grip on one host-side entity.
///
/// The handle owns nothing but the id; validity is the host's concern.
/// Operations on a stale handle surface as `Err` / `None` / `false`
/// results, never as a fault.
#[derive(Clone)]
pub struct EntityHandle {
    host: Arc<dyn ScriptHost>,
    id: Entity,
}

impl EntityHandle {
    /// Wrap an entity id for calls against `host`.
    #[must_use]
    pub fn new(host: Arc<dyn ScriptHost>, id: Entity) -> Self {
        Self { host, id }
    }

    /// Look an entity up by name. `None` when the host reports the
    /// not-found sentinel.
    #[must_use]
    pub fn find_by_name(host: Arc<dyn ScriptHost>, name: &str) -> Option<Self> {
        let id = host.entity_find_by_name(name);
        id.is_valid().then(|| Self { host, id })
    }

    /// The underlying entity id.
    #[must_use]
    pub fn id(&self) -> Entity {
        self.id
    }

    /// Does this entity carry a component of kind `T`?
    #[must_use]
    pub fn has_component<T: Component>(&self) -> bool {
        self.host.entity_has_component(self.id, ComponentTypeId::of::<T>())
    }

    /// Attach a default-constructed `T`. Re-adding resets the component
    /// to its default.
    pub fn add_component<T: Component>(&self) -> Result<(), ScriptError> {
        self.host.entity_add_component(self.id, ComponentTypeId::of::<T>())
    }

    /// The transform façade for this entity. Constructing it is free;
    /// accessors fail if the entity carries no transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.host.clone(), self.id)
    }

    /// Whether this entity participates in render/simulation traversal.
    pub fn visibility(&self) -> Result<bool, ScriptError> {
        self.host.entity_get_visibility(self.id)
    }

    /// Show or hide this entity.
    pub fn set_visibility(&self, visible: bool) -> Result<(), ScriptError> {
        self.host.entity_set_visibility(self.id, visible)
    }

    /// Clone this entity and place the copy at `position`. `None` when
    /// this handle is stale.
    #[must_use]
    pub fn instantiate(&self, position: Vec3) -> Option<Self> {
        let id = self.host.entity_instantiate(self.id, position);
        id.is_valid().then(|| Self {
            host: self.host.clone(),
            id,
        })
    }

    /// Ask the host to remove this entity. Consumes the handle; clones of
    /// it become stale once the host completes the removal.
    pub fn destroy(self) {
        self.host.entity_destroy(self.id);
    }

    /// The script object the host has bound to this entity, if any.
    #[must_use]
    pub fn script_instance(&self) -> Option<ScriptInstanceId> {
        self.host.get_script_instance(self.id)
    }
}

impl std::fmt::Debug for EntityHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityHandle").field("id", &self.id).finish()
    }
}
