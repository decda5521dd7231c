//! Component kind registry.
//!
//! `has-component` / `add-component` calls arrive carrying only a
//! [`ComponentTypeId`] token. The registry resolves that token to the
//! functions the host needs to act on the kind without knowing its Rust
//! type: default-construct one (for `add`) and clone one (for
//! `instantiate`). Kinds are registered once when the host is built;
//! tokens that were never registered are rejected at the boundary.

use std::any::Any;
use std::collections::HashMap;

use ember_component::{Component, ComponentTypeId};
use ember_math::Transform3D;

/// A type-erased component instance as stored in a scene record.
pub type BoxedComponent = Box<dyn Any + Send + Sync>;

/// The per-kind function table.
pub struct ComponentVTable {
    /// The kind's registered name, for diagnostics.
    pub name: &'static str,
    default_fn: fn() -> BoxedComponent,
    clone_fn: fn(&BoxedComponent) -> Option<BoxedComponent>,
}

impl ComponentVTable {
    /// A freshly default-constructed instance of this kind.
    #[must_use]
    pub fn make_default(&self) -> BoxedComponent {
        (self.default_fn)()
    }

    /// Clone a stored instance. `None` if the box does not actually hold
    /// this kind.
    #[must_use]
    pub fn clone_boxed(&self, component: &BoxedComponent) -> Option<BoxedComponent> {
        (self.clone_fn)(component)
    }
}

impl std::fmt::Debug for ComponentVTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentVTable").field("name", &self.name).finish()
    }
}

/// All component kinds this host understands, keyed by token.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    kinds: HashMap<ComponentTypeId, ComponentVTable>,
}

impl ComponentRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            kinds: HashMap::new(),
        }
    }

    /// A registry with the built-in kinds ([`Transform3D`]) registered.
    #[must_use]
    pub fn with_builtin_kinds() -> Self {
        let mut registry = Self::new();
        registry.register::<Transform3D>();
        registry
    }

    /// Register kind `T` under its [`ComponentTypeId`]. Re-registering a
    /// kind replaces its vtable.
    pub fn register<T: Component + Default + Clone>(&mut self) {
        self.kinds.insert(
            ComponentTypeId::of::<T>(),
            ComponentVTable {
                name: T::type_name(),
                default_fn: || Box::new(T::default()),
                clone_fn: |component| {
                    component
                        .downcast_ref::<T>()
                        .map(|value| Box::new(value.clone()) as BoxedComponent)
                },
            },
        );
    }

    /// Is this token a registered kind?
    #[must_use]
    pub fn contains(&self, kind: ComponentTypeId) -> bool {
        self.kinds.contains_key(&kind)
    }

    /// The vtable for a token, if registered.
    #[must_use]
    pub fn get(&self, kind: ComponentTypeId) -> Option<&ComponentVTable> {
        self.kinds.get(&kind)
    }
}
