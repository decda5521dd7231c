//! Recording fake host backing the façade unit tests.
//!
//! Implements [`ScriptHost`] over a plain mutexed map and counts every
//! call, so tests can assert both what the façades forward and that they
//! never cache.

use std::collections::HashMap;
use std::sync::Mutex;

use ember_component::{ComponentTypeId, Entity, EntityAllocator};
use ember_math::{Quat, Transform3D, Vec3};

use crate::error::ScriptError;
use crate::host::{ScriptHost, ScriptInstanceId};

#[derive(Clone)]
struct MockRecord {
    name: String,
    visible: bool,
    transform: Option<Transform3D>,
    script: Option<ScriptInstanceId>,
}

struct MockState {
    allocator: EntityAllocator,
    records: HashMap<Entity, MockRecord>,
}

pub struct MockHost {
    state: Mutex<MockState>,
    calls: Mutex<Vec<&'static str>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                allocator: EntityAllocator::new(),
                records: HashMap::new(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn add_entity(&self, name: &str, transform: Transform3D) -> Entity {
        self.insert(name, Some(transform))
    }

    /// An entity with no components at all.
    pub fn add_bare_entity(&self, name: &str) -> Entity {
        self.insert(name, None)
    }

    fn insert(&self, name: &str, transform: Option<Transform3D>) -> Entity {
        let mut state = self.state.lock().unwrap();
        let entity = state.allocator.allocate();
        state.records.insert(
            entity,
            MockRecord {
                name: name.to_owned(),
                visible: true,
                transform,
                script: None,
            },
        );
        entity
    }

    /// Mutate host state directly, bypassing the call surface — stands in
    /// for another engine system touching the component.
    pub fn mutate_transform(&self, entity: Entity, f: impl FnOnce(&mut Transform3D)) {
        let mut state = self.state.lock().unwrap();
        if let Some(t) = state
            .records
            .get_mut(&entity)
            .and_then(|r| r.transform.as_mut())
        {
            f(t);
        }
    }

    pub fn bind_script(&self, entity: Entity, instance: ScriptInstanceId) {
        let mut state = self.state.lock().unwrap();
        if let Some(rec) = state.records.get_mut(&entity) {
            rec.script = Some(instance);
        }
    }

    /// How many times a given entry point has been invoked.
    pub fn calls_named(&self, name: &'static str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == name).count()
    }

    fn log(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    fn read<T>(
        &self,
        call: &'static str,
        entity: Entity,
        f: impl FnOnce(&Transform3D) -> T,
    ) -> Result<T, ScriptError> {
        self.log(call);
        let state = self.state.lock().unwrap();
        let rec = state
            .records
            .get(&entity)
            .ok_or(ScriptError::InvalidEntity(entity))?;
        let t = rec.transform.as_ref().ok_or(ScriptError::MissingComponent {
            entity,
            kind: ComponentTypeId::of::<Transform3D>(),
        })?;
        Ok(f(t))
    }

    fn write(
        &self,
        call: &'static str,
        entity: Entity,
        f: impl FnOnce(&mut Transform3D),
    ) -> Result<(), ScriptError> {
        self.log(call);
        let mut state = self.state.lock().unwrap();
        let rec = state
            .records
            .get_mut(&entity)
            .ok_or(ScriptError::InvalidEntity(entity))?;
        let t = rec.transform.as_mut().ok_or(ScriptError::MissingComponent {
            entity,
            kind: ComponentTypeId::of::<Transform3D>(),
        })?;
        f(t);
        Ok(())
    }
}

impl ScriptHost for MockHost {
    fn entity_has_component(&self, entity: Entity, kind: ComponentTypeId) -> bool {
        self.log("entity_has_component");
        let state = self.state.lock().unwrap();
        let Some(rec) = state.records.get(&entity) else {
            return false;
        };
        kind == ComponentTypeId::of::<Transform3D>() && rec.transform.is_some()
    }

    fn entity_add_component(
        &self,
        entity: Entity,
        kind: ComponentTypeId,
    ) -> Result<(), ScriptError> {
        self.log("entity_add_component");
        if kind != ComponentTypeId::of::<Transform3D>() {
            return Err(ScriptError::UnknownComponentKind(kind));
        }
        let mut state = self.state.lock().unwrap();
        let rec = state
            .records
            .get_mut(&entity)
            .ok_or(ScriptError::InvalidEntity(entity))?;
        rec.transform = Some(Transform3D::default());
        Ok(())
    }

    fn entity_find_by_name(&self, name: &str) -> Entity {
        self.log("entity_find_by_name");
        let state = self.state.lock().unwrap();
        state
            .records
            .iter()
            .find(|(_, rec)| rec.name == name)
            .map_or(Entity::INVALID, |(e, _)| *e)
    }

    fn entity_instantiate(&self, source: Entity, translation: Vec3) -> Entity {
        self.log("entity_instantiate");
        let mut state = self.state.lock().unwrap();
        let Some(mut copy) = state.records.get(&source).cloned() else {
            return Entity::INVALID;
        };
        if let Some(t) = copy.transform.as_mut() {
            t.translation = translation;
        }
        let entity = state.allocator.allocate();
        state.records.insert(entity, copy);
        entity
    }

    fn entity_destroy(&self, entity: Entity) {
        self.log("entity_destroy");
        self.state.lock().unwrap().records.remove(&entity);
    }

    fn entity_set_visibility(&self, entity: Entity, visible: bool) -> Result<(), ScriptError> {
        self.log("entity_set_visibility");
        let mut state = self.state.lock().unwrap();
        let rec = state
            .records
            .get_mut(&entity)
            .ok_or(ScriptError::InvalidEntity(entity))?;
        rec.visible = visible;
        Ok(())
    }

    fn entity_get_visibility(&self, entity: Entity) -> Result<bool, ScriptError> {
        self.log("entity_get_visibility");
        let state = self.state.lock().unwrap();
        state
            .records
            .get(&entity)
            .map(|rec| rec.visible)
            .ok_or(ScriptError::InvalidEntity(entity))
    }

    fn get_script_instance(&self, entity: Entity) -> Option<ScriptInstanceId> {
        self.log("get_script_instance");
        self.state.lock().unwrap().records.get(&entity)?.script
    }

    fn transform_get_forward(&self, entity: Entity) -> Result<Vec3, ScriptError> {
        self.read("transform_get_forward", entity, Transform3D::forward)
    }

    fn transform_set_forward(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError> {
        self.write("transform_set_forward", entity, |t| t.set_forward(value))
    }

    fn transform_get_right(&self, entity: Entity) -> Result<Vec3, ScriptError> {
        self.read("transform_get_right", entity, Transform3D::right)
    }

    fn transform_set_right(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError> {
        self.write("transform_set_right", entity, |t| t.set_right(value))
    }

    fn transform_get_up(&self, entity: Entity) -> Result<Vec3, ScriptError> {
        self.read("transform_get_up", entity, Transform3D::up)
    }

    fn transform_set_up(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError> {
        self.write("transform_set_up", entity, |t| t.set_up(value))
    }

    fn transform_get_translation(&self, entity: Entity) -> Result<Vec3, ScriptError> {
        self.read("transform_get_translation", entity, |t| t.translation)
    }

    fn transform_set_translation(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError> {
        self.write("transform_set_translation", entity, |t| t.translation = value)
    }

    fn transform_get_rotation(&self, entity: Entity) -> Result<Quat, ScriptError> {
        self.read("transform_get_rotation", entity, |t| t.rotation)
    }

    fn transform_set_rotation(&self, entity: Entity, value: Quat) -> Result<(), ScriptError> {
        self.write("transform_set_rotation", entity, |t| t.rotation = value)
    }

    fn transform_get_euler_angles(&self, entity: Entity) -> Result<Vec3, ScriptError> {
        self.read("transform_get_euler_angles", entity, Transform3D::euler_angles)
    }

    fn transform_set_euler_angles(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError> {
        self.write("transform_set_euler_angles", entity, |t| {
            t.set_euler_angles(value);
        })
    }

    fn transform_get_scale(&self, entity: Entity) -> Result<Vec3, ScriptError> {
        self.read("transform_get_scale", entity, |t| t.scale)
    }

    fn transform_set_scale(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError> {
        self.write("transform_set_scale", entity, |t| t.scale = value)
    }
}
