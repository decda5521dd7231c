//! The host call surface.
//!
//! [`ScriptHost`] is the complete, enumerated set of entry points the
//! façades may invoke — the Rust rendition of an engine's internal-call
//! table. Method names keep the `<category>_<operation>` convention
//! (`transform_get_translation`, `entity_destroy`) and the first parameter
//! is always the owning entity's id.
//!
//! All calls are synchronous and blocking; a call returns only once the
//! host-side operation is complete, so calls from one script context reach
//! the host in program order. Getters return their value directly — the
//! out-parameter shape some marshalling layers need is not required here.

use ember_component::{ComponentTypeId, Entity};
use ember_math::{Quat, Vec3};

use crate::error::ScriptError;

/// Opaque handle to the script object a host has bound to an entity.
///
/// Scripts compare and pass these; only the host can resolve one back to
/// an actual script object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScriptInstanceId(pub u64);

/// The set of native entry points available to scripts.
///
/// Hosts implement this over their component storage; façades hold an
/// `Arc<dyn ScriptHost>` and forward every property access through it.
/// Implementations must be internally synchronised — all methods take
/// `&self` so a single host can serve many façades.
///
/// ## Conventions
///
/// - Lookups that can miss (`entity_find_by_name`, `entity_instantiate`)
///   return [`Entity::INVALID`] rather than an error.
/// - Component accessors return `Err(ScriptError::InvalidEntity)` for ids
///   that no longer name a live entity and
///   `Err(ScriptError::MissingComponent)` when the component kind is
///   absent. They never panic on stale input.
/// - Setters apply no validation here; what the host does with a
///   non-unit quaternion or zero scale is host-defined.
pub trait ScriptHost: Send + Sync {
    // ----- Entity operations -----

    /// Does `entity` currently carry a component of kind `kind`?
    /// `false` for invalid entities and unregistered kinds.
    fn entity_has_component(&self, entity: Entity, kind: ComponentTypeId) -> bool;

    /// Attach a default-constructed component of kind `kind` to `entity`.
    /// Re-adding a kind the entity already carries resets it to default.
    fn entity_add_component(&self, entity: Entity, kind: ComponentTypeId)
    -> Result<(), ScriptError>;

    /// Look an entity up by name. [`Entity::INVALID`] when no entity has
    /// that name.
    fn entity_find_by_name(&self, name: &str) -> Entity;

    /// Clone `source` (all components copied), place the copy at
    /// `translation`, and return its fresh id. [`Entity::INVALID`] when
    /// `source` is not a live entity.
    fn entity_instantiate(&self, source: Entity, translation: Vec3) -> Entity;

    /// Remove `entity` and everything attached to it. Unknown ids are
    /// ignored. When the removal takes effect is host-defined; the only
    /// promise is that subsequent calls treat the id as invalid once it
    /// has.
    fn entity_destroy(&self, entity: Entity);

    /// Toggle whether `entity` participates in render/simulation traversal.
    fn entity_set_visibility(&self, entity: Entity, visible: bool) -> Result<(), ScriptError>;

    /// Current visibility flag of `entity`.
    fn entity_get_visibility(&self, entity: Entity) -> Result<bool, ScriptError>;

    /// The script object bound to `entity`, if any.
    fn get_script_instance(&self, entity: Entity) -> Option<ScriptInstanceId>;

    // ----- Transform component -----

    /// The direction `entity` faces.
    fn transform_get_forward(&self, entity: Entity) -> Result<Vec3, ScriptError>;
    /// Reorient `entity` to face along `value`.
    fn transform_set_forward(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError>;

    /// The direction to `entity`'s right.
    fn transform_get_right(&self, entity: Entity) -> Result<Vec3, ScriptError>;
    /// Reorient `entity` so its right axis points along `value`.
    fn transform_set_right(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError>;

    /// The direction above `entity`.
    fn transform_get_up(&self, entity: Entity) -> Result<Vec3, ScriptError>;
    /// Reorient `entity` so its up axis points along `value`.
    fn transform_set_up(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError>;

    /// World-space translation.
    fn transform_get_translation(&self, entity: Entity) -> Result<Vec3, ScriptError>;
    /// Replace the world-space translation.
    fn transform_set_translation(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError>;

    /// Rotation as a quaternion — the canonical view.
    fn transform_get_rotation(&self, entity: Entity) -> Result<Quat, ScriptError>;
    /// Replace the rotation from a quaternion. Visible through the Euler
    /// view on the next read.
    fn transform_set_rotation(&self, entity: Entity, value: Quat) -> Result<(), ScriptError>;

    /// Rotation as Euler angles (radians) — a derived view of the same
    /// underlying rotation as [`ScriptHost::transform_get_rotation`].
    fn transform_get_euler_angles(&self, entity: Entity) -> Result<Vec3, ScriptError>;
    /// Replace the rotation from Euler angles. Visible through the
    /// quaternion view on the next read.
    fn transform_set_euler_angles(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError>;

    /// Per-axis scale.
    fn transform_get_scale(&self, entity: Entity) -> Result<Vec3, ScriptError>;
    /// Replace the per-axis scale.
    fn transform_set_scale(&self, entity: Entity, value: Vec3) -> Result<(), ScriptError>;
}
