//! Scene storage: the host-side source of truth for entities and their
//! components.
//!
//! Records live in a sharded concurrent map so the host can serve
//! `&self` calls from any number of façades. Component instances are
//! stored type-erased and addressed by kind token; typed access goes
//! through [`Scene::with_component`] / [`Scene::with_component_mut`].

use std::collections::HashMap;
use std::sync::Mutex;

use dashmap::DashMap;
use ember_component::{Component, ComponentTypeId, Entity, EntityAllocator};
use ember_script::{ScriptError, ScriptInstanceId};

use crate::registry::{BoxedComponent, ComponentRegistry};

/// Everything the host keeps for one live entity.
pub struct EntityRecord {
    /// Scene-unique lookup name.
    pub name: String,
    /// Whether the entity participates in render/simulation traversal.
    pub visible: bool,
    /// The script object bound to this entity, if any.
    pub script: Option<ScriptInstanceId>,
    components: HashMap<ComponentTypeId, BoxedComponent>,
}

impl std::fmt::Debug for EntityRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityRecord")
            .field("name", &self.name)
            .field("visible", &self.visible)
            .field("script", &self.script)
            .field("components", &self.components.len())
            .finish()
    }
}

impl EntityRecord {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            visible: true,
            script: None,
            components: HashMap::new(),
        }
    }
}

/// The canonical entity store.
#[derive(Debug, Default)]
pub struct Scene {
    records: DashMap<Entity, EntityRecord>,
    allocator: Mutex<EntityAllocator>,
}

impl Scene {
    /// An empty scene. Ids start at 1; 0 stays the invalid sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            allocator: Mutex::new(EntityAllocator::new()),
        }
    }

    fn allocate(&self) -> Entity {
        self.allocator
            .lock()
            .expect("entity allocator lock poisoned")
            .allocate()
    }

    /// Create a new entity with no components.
    pub fn spawn_named(&self, name: &str) -> Entity {
        let entity = self.allocate();
        self.records.insert(entity, EntityRecord::named(name));
        entity
    }

    /// Remove an entity and everything attached to it. `false` if it was
    /// not live.
    pub fn despawn(&self, entity: Entity) -> bool {
        self.records.remove(&entity).is_some()
    }

    /// Is this id a live entity?
    #[must_use]
    pub fn is_live(&self, entity: Entity) -> bool {
        self.records.contains_key(&entity)
    }

    /// Number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.records.len()
    }

    /// First entity with the given name, or [`Entity::INVALID`].
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Entity {
        self.records
            .iter()
            .find(|entry| entry.value().name == name)
            .map_or(Entity::INVALID, |entry| *entry.key())
    }

    /// Attach (or replace) a type-erased component instance.
    pub fn insert_component(
        &self,
        entity: Entity,
        kind: ComponentTypeId,
        component: BoxedComponent,
    ) -> Result<(), ScriptError> {
        let mut record = self
            .records
            .get_mut(&entity)
            .ok_or(ScriptError::InvalidEntity(entity))?;
        record.components.insert(kind, component);
        Ok(())
    }

    /// Does the entity carry a component of this kind? `false` for stale
    /// ids.
    #[must_use]
    pub fn has_component(&self, entity: Entity, kind: ComponentTypeId) -> bool {
        self.records
            .get(&entity)
            .is_some_and(|record| record.components.contains_key(&kind))
    }

    /// Read access to the entity's `T` component.
    pub fn with_component<T: Component, R>(
        &self,
        entity: Entity,
        f: impl FnOnce(&T) -> R,
    ) -> Result<R, ScriptError> {
        let kind = ComponentTypeId::of::<T>();
        let record = self
            .records
            .get(&entity)
            .ok_or(ScriptError::InvalidEntity(entity))?;
        let component = record
            .components
            .get(&kind)
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or(ScriptError::MissingComponent { entity, kind })?;
        Ok(f(component))
    }

    /// Write access to the entity's `T` component.
    pub fn with_component_mut<T: Component, R>(
        &self,
        entity: Entity,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, ScriptError> {
        let kind = ComponentTypeId::of::<T>();
        let mut record = self
            .records
            .get_mut(&entity)
            .ok_or(ScriptError::InvalidEntity(entity))?;
        let component = record
            .components
            .get_mut(&kind)
            .and_then(|boxed| boxed.downcast_mut::<T>())
            .ok_or(ScriptError::MissingComponent { entity, kind })?;
        Ok(f(component))
    }

    /// The entity's visibility flag.
    pub fn visibility(&self, entity: Entity) -> Result<bool, ScriptError> {
        self.records
            .get(&entity)
            .map(|record| record.visible)
            .ok_or(ScriptError::InvalidEntity(entity))
    }

    /// Set the entity's visibility flag.
    pub fn set_visibility(&self, entity: Entity, visible: bool) -> Result<(), ScriptError> {
        let mut record = self
            .records
            .get_mut(&entity)
            .ok_or(ScriptError::InvalidEntity(entity))?;
        record.visible = visible;
        Ok(())
    }

    /// Bind a script object to the entity.
    pub fn bind_script_instance(
        &self,
        entity: Entity,
        instance: ScriptInstanceId,
    ) -> Result<(), ScriptError> {
        let mut record = self
            .records
            .get_mut(&entity)
            .ok_or(ScriptError::InvalidEntity(entity))?;
        record.script = Some(instance);
        Ok(())
    }

    /// The script object bound to the entity, if any.
    #[must_use]
    pub fn script_instance(&self, entity: Entity) -> Option<ScriptInstanceId> {
        self.records.get(&entity).and_then(|record| record.script)
    }

    /// Clone `source` into a fresh entity: same name and visibility, all
    /// registered components copied, script binding not carried over.
    /// [`Entity::INVALID`] when `source` is not live.
    pub fn duplicate(&self, source: Entity, registry: &ComponentRegistry) -> Entity {
        // Copy everything out before inserting — the insert must not run
        // while a shard guard on `source` is held.
        let snapshot = self.records.get(&source).map(|record| {
            let components: HashMap<ComponentTypeId, BoxedComponent> = record
                .components
                .iter()
                .filter_map(|(kind, boxed)| {
                    registry
                        .get(*kind)
                        .and_then(|vtable| vtable.clone_boxed(boxed))
                        .map(|copy| (*kind, copy))
                })
                .collect();
            (record.name.clone(), record.visible, components)
        });

        let Some((name, visible, components)) = snapshot else {
            return Entity::INVALID;
        };

        let entity = self.allocate();
        self.records.insert(
            entity,
            EntityRecord {
                name,
                visible,
                script: None,
                components,
            },
        );
        entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_math::{Transform3D, Vec3};

    fn transform_kind() -> ComponentTypeId {
        ComponentTypeId::of::<Transform3D>()
    }

    #[test]
    fn test_spawn_and_find() {
        let scene = Scene::new();
        let e = scene.spawn_named("torch");
        assert!(e.is_valid());
        assert_eq!(scene.find_by_name("torch"), e);
        assert_eq!(scene.find_by_name("lantern"), Entity::INVALID);
    }

    #[test]
    fn test_despawn_removes_record() {
        let scene = Scene::new();
        let e = scene.spawn_named("torch");
        assert!(scene.despawn(e));
        assert!(!scene.is_live(e));
        assert!(!scene.despawn(e));
        assert_eq!(scene.entity_count(), 0);
    }

    #[test]
    fn test_component_typed_access() {
        let scene = Scene::new();
        let e = scene.spawn_named("torch");
        scene
            .insert_component(e, transform_kind(), Box::new(Transform3D::IDENTITY))
            .unwrap();
        scene
            .with_component_mut::<Transform3D, _>(e, |t| t.translation = Vec3::X)
            .unwrap();
        let read = scene.with_component::<Transform3D, _>(e, |t| t.translation);
        assert_eq!(read.unwrap(), Vec3::X);
    }

    #[test]
    fn test_missing_component_is_reported() {
        let scene = Scene::new();
        let e = scene.spawn_named("husk");
        let err = scene
            .with_component::<Transform3D, _>(e, |t| t.translation)
            .unwrap_err();
        assert_eq!(
            err,
            ScriptError::MissingComponent {
                entity: e,
                kind: transform_kind()
            }
        );
    }

    #[test]
    fn test_duplicate_copies_components_not_script() {
        let scene = Scene::new();
        let registry = ComponentRegistry::with_builtin_kinds();
        let e = scene.spawn_named("guard");
        let mut t = Transform3D::IDENTITY;
        t.translation = Vec3::new(1.0, 2.0, 3.0);
        scene
            .insert_component(e, transform_kind(), Box::new(t))
            .unwrap();
        scene
            .bind_script_instance(e, ScriptInstanceId(3))
            .unwrap();

        let copy = scene.duplicate(e, &registry);
        assert!(copy.is_valid());
        assert_ne!(copy, e);
        let read = scene.with_component::<Transform3D, _>(copy, |t| t.translation);
        assert_eq!(read.unwrap(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(scene.script_instance(copy), None);
    }

    #[test]
    fn test_duplicate_of_stale_entity_is_sentinel() {
        let scene = Scene::new();
        let registry = ComponentRegistry::with_builtin_kinds();
        let e = scene.spawn_named("guard");
        scene.despawn(e);
        assert_eq!(scene.duplicate(e, &registry), Entity::INVALID);
    }
}
